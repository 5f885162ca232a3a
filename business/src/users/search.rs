//! Global search across every data column.

use chrono::{DateTime, Utc};
use roster_states::Debounce;

use super::columns::ColumnKey;
use super::row::UserRow;

/// Columns the global search looks at.
pub const SEARCHABLE: [ColumnKey; 10] = [
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
];

/// Whether any searchable cell of `row` contains the lower-cased `needle`.
fn matches(row: &UserRow, needle: &str) -> bool {
    SEARCHABLE
        .iter()
        .any(|column| row.cell_text(*column).to_lowercase().contains(needle))
}

/// Rows matching `query`, in input order.
///
/// A blank query keeps every row.
pub fn filter_rows<'a, I>(query: &str, rows: I) -> Vec<&'a UserRow>
where
    I: IntoIterator<Item = &'a UserRow>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.into_iter().collect();
    }
    rows.into_iter().filter(|row| matches(row, &needle)).collect()
}

/// The search box: a draft that follows every keystroke and a debounced
/// commit that feeds the grid.
#[derive(Debug, Clone)]
pub struct SearchInput {
    draft: String,
    debounce: Debounce<String>,
}

impl SearchInput {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            draft: String::new(),
            debounce: Debounce::from_millis(debounce_ms),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Records a keystroke; the query is committed once typing pauses.
    pub fn edit(&mut self, value: impl Into<String>, now: DateTime<Utc>) {
        self.draft = value.into();
        self.debounce.push(self.draft.clone(), now);
    }

    /// The committed query, once the delay has elapsed without new input.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<String> {
        self.debounce.poll(now)
    }

    pub fn is_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> Option<std::time::Duration> {
        self.debounce.remaining(now)
    }

    /// Empties the box and yields the query to commit right away.
    pub fn clear(&mut self) -> String {
        self.reset();
        String::new()
    }

    pub fn reset(&mut self) {
        self.draft.clear();
        self.debounce.cancel();
    }
}
