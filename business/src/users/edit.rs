use std::collections::BTreeMap;

use log::{debug, info};
use thiserror::Error;
use ustr::Ustr;

use super::columns::ColumnKey;
use super::row::{RowFields, UserRow};
use super::store::RowStore;

/// Per-field messages produced by a failed save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("Invalid fields: {0:?}")]
pub struct ValidationErrors(pub BTreeMap<ColumnKey, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, column: ColumnKey) -> Option<&str> {
        self.0.get(&column).map(String::as_str)
    }
}

/// Inline edit lifecycle. At most one row is edited at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing {
        key: Ustr,
        scratch: RowFields,
        errors: ValidationErrors,
    },
}

impl EditSession {
    /// Starts editing `row`; any other row's unsaved changes are dropped.
    pub fn begin(&mut self, row: &UserRow) {
        if let Some(key) = self.editing_key().filter(|key| *key != row.key) {
            debug!("Abandoning edit of row {key}");
        }
        *self = EditSession::Editing {
            key: row.key,
            scratch: row.editable_fields(),
            errors: ValidationErrors::default(),
        };
    }

    /// Updates the scratch value of an editable column. Returns whether the
    /// value was taken.
    pub fn set_field(&mut self, column: ColumnKey, value: impl Into<String>) -> bool {
        let EditSession::Editing {
            scratch, errors, ..
        } = self
        else {
            return false;
        };
        if !column.descriptor().editable {
            return false;
        }
        scratch.insert(column, value.into());
        errors.0.remove(&column);
        true
    }

    pub fn cancel(&mut self) {
        *self = EditSession::Idle;
    }

    /// Validates the scratch copy and commits it into `store`.
    ///
    /// On failure the session stays open with per-field messages.
    pub fn save(&mut self, store: &mut RowStore) -> Result<(), ValidationErrors> {
        let EditSession::Editing {
            key,
            scratch,
            errors,
        } = self
        else {
            return Ok(());
        };

        let found = validate(scratch);
        if !found.is_empty() {
            *errors = found.clone();
            return Err(found);
        }

        if store.commit_edit(key.as_str(), scratch) {
            info!("Saved row {key}");
        }
        *self = EditSession::Idle;
        Ok(())
    }

    pub fn editing_key(&self) -> Option<Ustr> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { key, .. } => Some(*key),
        }
    }

    pub fn is_editing(&self, row_key: &str) -> bool {
        self.editing_key().is_some_and(|key| key.as_str() == row_key)
    }

    pub fn scratch_value(&self, column: ColumnKey) -> Option<&str> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { scratch, .. } => scratch.get(&column).map(String::as_str),
        }
    }

    pub fn error_for(&self, column: ColumnKey) -> Option<&str> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { errors, .. } => errors.get(column),
        }
    }
}

fn validate(scratch: &RowFields) -> ValidationErrors {
    let mut errors = BTreeMap::new();
    for (column, value) in scratch {
        let title = column.descriptor().title;
        if value.trim().is_empty() {
            errors.insert(*column, format!("Please input {title}"));
        } else if *column == ColumnKey::Age && value.trim().parse::<u32>().is_err() {
            errors.insert(*column, format!("{title} must be a whole number"));
        }
    }
    ValidationErrors(errors)
}
