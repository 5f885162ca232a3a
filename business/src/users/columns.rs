//! The static column catalog of the user grid.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use super::row::UserRow;

/// Identifier of a catalog column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColumnKey {
    Id,
    Name,
    Username,
    Email,
    Phone,
    Age,
    BirthDate,
    Gender,
    City,
    Company,
    /// Row actions (edit/delete). Not backed by a row field.
    Actions,
}

impl ColumnKey {
    /// Catalog order.
    pub const ALL: [ColumnKey; 11] = [
        ColumnKey::Id,
        ColumnKey::Name,
        ColumnKey::Username,
        ColumnKey::Email,
        ColumnKey::Phone,
        ColumnKey::Age,
        ColumnKey::BirthDate,
        ColumnKey::Gender,
        ColumnKey::City,
        ColumnKey::Company,
        ColumnKey::Actions,
    ];

    /// Columns that must stay visible whatever the user toggles.
    pub const PROTECTED: [ColumnKey; 2] = [ColumnKey::Id, ColumnKey::Actions];

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKey::Id => "id",
            ColumnKey::Name => "name",
            ColumnKey::Username => "username",
            ColumnKey::Email => "email",
            ColumnKey::Phone => "phone",
            ColumnKey::Age => "age",
            ColumnKey::BirthDate => "birthDate",
            ColumnKey::Gender => "gender",
            ColumnKey::City => "city",
            ColumnKey::Company => "company",
            ColumnKey::Actions => "actions",
        }
    }

    pub fn is_protected(self) -> bool {
        Self::PROTECTED.contains(&self)
    }

    pub fn descriptor(self) -> &'static ColumnDescriptor {
        // CATALOG is indexed in ALL order.
        &CATALOG[self as usize]
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown column key: {0}")]
pub struct UnknownColumn(pub String);

impl FromStr for ColumnKey {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

/// One entry of a column's filter menu.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

/// Where a filterable column takes its menu entries from.
#[derive(Debug, Clone, Copy)]
pub enum FilterOptions {
    /// `(label, value)` pairs known up front.
    Fixed(&'static [(&'static str, &'static str)]),
    /// Every distinct non-empty cell value currently in the store.
    Distinct,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnFilter {
    pub options: FilterOptions,
    pub predicate: fn(&str, &UserRow) -> bool,
}

pub type SortComparator = fn(&UserRow, &UserRow) -> Ordering;

#[derive(Debug, Clone, Copy)]
pub struct ColumnDescriptor {
    pub key: ColumnKey,
    pub title: &'static str,
    pub editable: bool,
    pub sorter: Option<SortComparator>,
    pub filter: Option<ColumnFilter>,
}

impl ColumnDescriptor {
    pub fn is_sortable(&self) -> bool {
        self.sorter.is_some()
    }

    pub fn is_filterable(&self) -> bool {
        self.filter.is_some()
    }

    /// Filter menu entries for this column given the current rows.
    pub fn filter_options<'a>(&self, rows: impl IntoIterator<Item = &'a UserRow>) -> Vec<FilterOption> {
        let Some(filter) = &self.filter else {
            return Vec::new();
        };
        match filter.options {
            FilterOptions::Fixed(pairs) => pairs
                .iter()
                .map(|(label, value)| FilterOption {
                    label: (*label).to_string(),
                    value: (*value).to_string(),
                })
                .collect(),
            FilterOptions::Distinct => {
                let mut seen = BTreeSet::new();
                rows.into_iter()
                    .map(|row| row.cell_text(self.key))
                    .filter(|value| !value.is_empty() && seen.insert(value.clone()))
                    .map(|value| FilterOption {
                        label: value.clone(),
                        value,
                    })
                    .collect()
            }
        }
    }

    /// Whether `row` passes a filter value selected in this column's menu.
    pub fn accepts(&self, value: &str, row: &UserRow) -> bool {
        self.filter
            .as_ref()
            .is_none_or(|filter| (filter.predicate)(value, row))
    }
}

const GENDER_OPTIONS: &[(&str, &str)] = &[("Male", "male"), ("Female", "female")];

fn by_id(a: &UserRow, b: &UserRow) -> Ordering {
    a.id.cmp(&b.id)
}

fn by_age(a: &UserRow, b: &UserRow) -> Ordering {
    a.age.cmp(&b.age)
}

fn text_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn by_name(a: &UserRow, b: &UserRow) -> Ordering {
    text_order(&a.name, &b.name)
}

fn by_username(a: &UserRow, b: &UserRow) -> Ordering {
    text_order(&a.username, &b.username)
}

fn by_email(a: &UserRow, b: &UserRow) -> Ordering {
    text_order(&a.email, &b.email)
}

fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Calendar order; unparsable dates sort after valid ones.
fn by_birth_date(a: &UserRow, b: &UserRow) -> Ordering {
    match (parse_birth_date(&a.birth_date), parse_birth_date(&b.birth_date)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.birth_date.cmp(&b.birth_date),
    }
}

fn gender_is(value: &str, row: &UserRow) -> bool {
    row.gender == value
}

fn city_is(value: &str, row: &UserRow) -> bool {
    row.city == value
}

fn company_is(value: &str, row: &UserRow) -> bool {
    row.company == value
}

const fn plain(key: ColumnKey, title: &'static str, editable: bool) -> ColumnDescriptor {
    ColumnDescriptor {
        key,
        title,
        editable,
        sorter: None,
        filter: None,
    }
}

static CATALOG: [ColumnDescriptor; 11] = [
    ColumnDescriptor {
        sorter: Some(by_id),
        ..plain(ColumnKey::Id, "ID", false)
    },
    ColumnDescriptor {
        sorter: Some(by_name),
        ..plain(ColumnKey::Name, "Name", true)
    },
    ColumnDescriptor {
        sorter: Some(by_username),
        ..plain(ColumnKey::Username, "Username", true)
    },
    ColumnDescriptor {
        sorter: Some(by_email),
        ..plain(ColumnKey::Email, "Email", true)
    },
    plain(ColumnKey::Phone, "Phone", true),
    ColumnDescriptor {
        sorter: Some(by_age),
        ..plain(ColumnKey::Age, "Age", true)
    },
    ColumnDescriptor {
        sorter: Some(by_birth_date),
        ..plain(ColumnKey::BirthDate, "Birth Date", true)
    },
    ColumnDescriptor {
        filter: Some(ColumnFilter {
            options: FilterOptions::Fixed(GENDER_OPTIONS),
            predicate: gender_is,
        }),
        ..plain(ColumnKey::Gender, "Gender", false)
    },
    ColumnDescriptor {
        filter: Some(ColumnFilter {
            options: FilterOptions::Distinct,
            predicate: city_is,
        }),
        ..plain(ColumnKey::City, "City", true)
    },
    ColumnDescriptor {
        filter: Some(ColumnFilter {
            options: FilterOptions::Distinct,
            predicate: company_is,
        }),
        ..plain(ColumnKey::Company, "Company", true)
    },
    plain(ColumnKey::Actions, "Actions", false),
];

/// Every column, in catalog order.
pub fn catalog() -> &'static [ColumnDescriptor] {
    &CATALOG
}

/// Columns offered in the "Column Display" checklist.
pub fn selectable_columns() -> impl Iterator<Item = &'static ColumnDescriptor> {
    CATALOG.iter().filter(|c| c.key != ColumnKey::Actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u64, name: &str, birth_date: &str, city: &str) -> UserRow {
        UserRow {
            name: name.to_string(),
            birth_date: birth_date.to_string(),
            city: city.to_string(),
            ..UserRow::with_id(id)
        }
    }

    #[test]
    fn catalog_is_indexed_by_key() {
        for key in ColumnKey::ALL {
            assert_eq!(key.descriptor().key, key);
        }
        assert_eq!(catalog().len(), ColumnKey::ALL.len());
    }

    #[test]
    fn keys_round_trip_through_strings() {
        assert_eq!("birthDate".parse::<ColumnKey>(), Ok(ColumnKey::BirthDate));
        assert_eq!(ColumnKey::BirthDate.to_string(), "birthDate");
        assert!("blue".parse::<ColumnKey>().is_err());
    }

    #[test]
    fn editable_flags() {
        let editable: Vec<ColumnKey> = catalog()
            .iter()
            .filter(|c| c.editable)
            .map(|c| c.key)
            .collect();
        assert_eq!(
            editable,
            vec![
                ColumnKey::Name,
                ColumnKey::Username,
                ColumnKey::Email,
                ColumnKey::Phone,
                ColumnKey::Age,
                ColumnKey::BirthDate,
                ColumnKey::City,
                ColumnKey::Company,
            ]
        );
    }

    #[test]
    fn actions_is_not_selectable() {
        assert!(selectable_columns().all(|c| c.key != ColumnKey::Actions));
        assert_eq!(selectable_columns().count(), 10);
    }

    #[test]
    fn name_sort_ignores_case() {
        let a = row(1, "bob", "", "");
        let b = row(2, "Alice", "", "");
        let sorter = ColumnKey::Name.descriptor().sorter.unwrap();
        assert_eq!(sorter(&a, &b), Ordering::Greater);
    }

    #[test]
    fn birth_date_sorts_by_calendar() {
        let a = row(1, "", "1996-5-30", "");
        let b = row(2, "", "1996-12-1", "");
        let broken = row(3, "", "someday", "");
        let sorter = ColumnKey::BirthDate.descriptor().sorter.unwrap();

        assert_eq!(sorter(&a, &b), Ordering::Less);
        assert_eq!(sorter(&b, &broken), Ordering::Less);
    }

    #[test]
    fn distinct_filter_options_skip_empty_and_duplicates() {
        let rows = vec![
            row(1, "", "", "Phoenix"),
            row(2, "", "", ""),
            row(3, "", "", "Austin"),
            row(4, "", "", "Phoenix"),
        ];
        let options = ColumnKey::City.descriptor().filter_options(&rows);
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["Phoenix", "Austin"]);
    }

    #[test]
    fn gender_filter_uses_fixed_options() {
        let options = ColumnKey::Gender.descriptor().filter_options(&[]);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "Male");
        assert_eq!(options[0].value, "male");

        let mut male = UserRow::with_id(1);
        male.gender = "male".to_string();
        assert!(ColumnKey::Gender.descriptor().accepts("male", &male));
        assert!(!ColumnKey::Gender.descriptor().accepts("female", &male));
    }
}
