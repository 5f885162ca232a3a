use std::collections::BTreeMap;

use thiserror::Error;
use ustr::Ustr;

use super::columns::ColumnKey;

/// A user record as held by the grid.
///
/// `key` identifies the row for its whole lifetime; `id` mirrors the
/// upstream identifier and is never edited either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub key: Ustr,
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub birth_date: String,
    pub gender: String,
    pub city: String,
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Column `{0}` cannot be changed")]
    Immutable(ColumnKey),
    #[error("{0} must be a whole number")]
    NotANumber(&'static str),
}

/// Editable field values keyed by column, as typed by the user.
pub type RowFields = BTreeMap<ColumnKey, String>;

impl UserRow {
    /// An otherwise empty row whose key is derived from `id`.
    pub fn with_id(id: u64) -> Self {
        Self {
            key: Ustr::from(id.to_string().as_str()),
            id,
            name: String::new(),
            username: String::new(),
            email: String::new(),
            phone: String::new(),
            age: 0,
            birth_date: String::new(),
            gender: String::new(),
            city: String::new(),
            company: String::new(),
        }
    }

    /// Display text of a column; `actions` has none.
    pub fn cell_text(&self, column: ColumnKey) -> String {
        match column {
            ColumnKey::Id => self.id.to_string(),
            ColumnKey::Name => self.name.clone(),
            ColumnKey::Username => self.username.clone(),
            ColumnKey::Email => self.email.clone(),
            ColumnKey::Phone => self.phone.clone(),
            ColumnKey::Age => self.age.to_string(),
            ColumnKey::BirthDate => self.birth_date.clone(),
            ColumnKey::Gender => self.gender.clone(),
            ColumnKey::City => self.city.clone(),
            ColumnKey::Company => self.company.clone(),
            ColumnKey::Actions => String::new(),
        }
    }

    pub fn set_field(&mut self, column: ColumnKey, value: &str) -> Result<(), FieldError> {
        match column {
            ColumnKey::Id | ColumnKey::Actions => return Err(FieldError::Immutable(column)),
            ColumnKey::Name => self.name = value.to_string(),
            ColumnKey::Username => self.username = value.to_string(),
            ColumnKey::Email => self.email = value.to_string(),
            ColumnKey::Phone => self.phone = value.to_string(),
            ColumnKey::Age => {
                self.age = value
                    .trim()
                    .parse()
                    .map_err(|_| FieldError::NotANumber(column.descriptor().title))?;
            }
            ColumnKey::BirthDate => self.birth_date = value.to_string(),
            ColumnKey::Gender => self.gender = value.to_string(),
            ColumnKey::City => self.city = value.to_string(),
            ColumnKey::Company => self.company = value.to_string(),
        }
        Ok(())
    }

    /// Current values of every editable column.
    pub fn editable_fields(&self) -> RowFields {
        super::columns::catalog()
            .iter()
            .filter(|c| c.editable)
            .map(|c| (c.key, self.cell_text(c.key)))
            .collect()
    }
}
