use std::collections::HashSet;

use log::{debug, warn};
use ustr::Ustr;

use super::reorder::relocate;
use super::row::{RowFields, UserRow};

/// Working copy of the fetched users, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowStore {
    rows: Vec<UserRow>,
}

impl RowStore {
    /// Keys stay unique: the first row wins, later duplicates are dropped.
    pub fn new(rows: Vec<UserRow>) -> Self {
        let mut seen: HashSet<Ustr> = HashSet::with_capacity(rows.len());
        let rows = rows
            .into_iter()
            .filter(|row| {
                let fresh = seen.insert(row.key);
                if !fresh {
                    warn!("Dropping duplicate row {}", row.key);
                }
                fresh
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[UserRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&UserRow> {
        self.rows.iter().find(|row| row.key.as_str() == key)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.key.as_str() == key)
    }

    /// Removes the row with `key`; returns whether one was there.
    pub fn delete(&mut self, key: &str) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.key.as_str() != key);
        let removed = self.rows.len() != before;
        if removed {
            debug!("Deleted row {key}");
        }
        removed
    }

    /// Moves `from_key` into the slot `to_key` occupies right now.
    pub fn move_row(&mut self, from_key: &str, to_key: &str) -> bool {
        if from_key == to_key {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(from_key), self.position(to_key)) else {
            return false;
        };
        relocate(&mut self.rows, from, to)
    }

    /// Merges `fields` into the row with `key`. `key` and `id` never change;
    /// fields that fail to apply are skipped with a warning.
    pub fn commit_edit(&mut self, key: &str, fields: &RowFields) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.key.as_str() == key) else {
            return false;
        };
        for (column, value) in fields {
            if let Err(err) = row.set_field(*column, value) {
                warn!("Skipping {column} on row {key}: {err}");
            }
        }
        true
    }
}
