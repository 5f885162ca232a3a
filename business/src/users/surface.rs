//! Sort, filter and pagination indicators of the rendered grid.
//!
//! These belong to the presentation surface rather than the grid core. They
//! live here so they can be tested without a renderer; the core only tells
//! the surface when to start over through a generation counter.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

use log::debug;

use super::columns::ColumnKey;
use super::row::UserRow;
use crate::config::BusinessConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascend,
    Descend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: ColumnKey,
    pub order: SortOrder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
    size_options: Vec<usize>,
}

impl Pagination {
    pub fn new(page_size: usize, size_options: Vec<usize>) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            size_options,
        }
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn size_options(&self) -> &[usize] {
        &self.size_options
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn first_page(&mut self) {
        self.page = 1;
    }

    /// Pulls the page back inside `total` rows.
    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.clamp(1, self.page_count(total));
    }

    /// Indices of the current page within `total` rows.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);
        start..end
    }

    pub fn summary(&self, total: usize) -> String {
        let range = self.range(total);
        if range.is_empty() {
            return format!("0-0 of {total} users");
        }
        format!("{}-{} of {total} users", range.start + 1, range.end)
    }
}

/// One page of projected rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub rows: Vec<&'a UserRow>,
    /// Rows left after column filters, across all pages.
    pub total: usize,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceState {
    generation: u64,
    sort: Option<SortState>,
    filters: BTreeMap<ColumnKey, BTreeSet<String>>,
    pagination: Pagination,
    default_pagination: Pagination,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self::new(&BusinessConfig::default())
    }
}

impl SurfaceState {
    pub fn new(config: &BusinessConfig) -> Self {
        let pagination = Pagination::new(config.page_size, config.page_size_options.clone());
        Self {
            generation: 0,
            sort: None,
            filters: BTreeMap::new(),
            pagination: pagination.clone(),
            default_pagination: pagination,
        }
    }

    /// Starts over when the grid was remounted since the last frame.
    pub fn sync(&mut self, generation: u64) -> bool {
        if generation == self.generation {
            return false;
        }
        debug!("Surface remounted (generation {generation})");
        self.sort = None;
        self.filters.clear();
        self.pagination = self.default_pagination.clone();
        self.generation = generation;
        true
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn sort_order(&self, column: ColumnKey) -> Option<SortOrder> {
        self.sort
            .filter(|sort| sort.column == column)
            .map(|sort| sort.order)
    }

    /// none -> ascend -> descend -> none. Switching columns starts at ascend.
    pub fn cycle_sort(&mut self, column: ColumnKey) {
        if !column.descriptor().is_sortable() {
            return;
        }
        self.sort = match self.sort_order(column) {
            None => Some(SortState {
                column,
                order: SortOrder::Ascend,
            }),
            Some(SortOrder::Ascend) => Some(SortState {
                column,
                order: SortOrder::Descend,
            }),
            Some(SortOrder::Descend) => None,
        };
        self.pagination.first_page();
    }

    pub fn is_filter_selected(&self, column: ColumnKey, value: &str) -> bool {
        self.filters
            .get(&column)
            .is_some_and(|values| values.contains(value))
    }

    pub fn has_filter(&self, column: ColumnKey) -> bool {
        self.filters.contains_key(&column)
    }

    pub fn toggle_filter(&mut self, column: ColumnKey, value: &str, selected: bool) {
        if !column.descriptor().is_filterable() {
            return;
        }
        if selected {
            self.filters
                .entry(column)
                .or_default()
                .insert(value.to_string());
        } else if let Some(values) = self.filters.get_mut(&column) {
            values.remove(value);
            if values.is_empty() {
                self.filters.remove(&column);
            }
        }
        self.pagination.first_page();
    }

    pub fn clear_filter(&mut self, column: ColumnKey) {
        if self.filters.remove(&column).is_some() {
            self.pagination.first_page();
        }
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.set_page_size(page_size);
    }

    fn passes_filters(&self, row: &UserRow) -> bool {
        self.filters.iter().all(|(column, values)| {
            let descriptor = column.descriptor();
            values.iter().any(|value| descriptor.accepts(value, row))
        })
    }

    /// Column filters, then sort, then the page slice.
    pub fn project<'a>(&mut self, rows: Vec<&'a UserRow>) -> Page<'a> {
        let mut rows: Vec<&'a UserRow> = rows
            .into_iter()
            .filter(|row| self.passes_filters(row))
            .collect();

        let sort = self
            .sort
            .and_then(|sort| sort.column.descriptor().sorter.map(|sorter| (sorter, sort.order)));
        if let Some((sorter, order)) = sort {
            match order {
                SortOrder::Ascend => rows.sort_by(|a, b| sorter(a, b)),
                SortOrder::Descend => rows.sort_by(|a, b| sorter(b, a)),
            }
        }

        let total = rows.len();
        self.pagination.clamp(total);
        let range = self.pagination.range(total);
        let summary = self.pagination.summary(total);
        let rows = rows.drain(range).collect();
        Page {
            rows,
            total,
            summary,
        }
    }
}
