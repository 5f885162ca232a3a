//! The grid core as a pure reducer.

use log::{debug, error, info, warn};
use roster_states::Reducer;
use ustr::Ustr;

use super::columns::{ColumnDescriptor, ColumnKey};
use super::edit::EditSession;
use super::layout::{ColumnLayout, is_draggable};
use super::reorder::DragReorder;
use super::row::UserRow;
use super::search::filter_rows;
use super::store::RowStore;

/// Everything the grid core tracks for one page session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridState {
    rows: RowStore,
    layout: ColumnLayout,
    query: String,
    edit: EditSession,
    row_drag: DragReorder<Ustr>,
    column_drag: DragReorder<usize>,
    loading: bool,
    surface_generation: u64,
}

/// Events raised by the presentation surface or the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridAction {
    FetchStarted,
    FetchSucceeded(Vec<UserRow>),
    FetchFailed(String),
    SetSearch(String),
    ClearSearch,
    BeginEdit(Ustr),
    EditField { column: ColumnKey, value: String },
    SaveEdit,
    CancelEdit,
    DeleteRow(Ustr),
    RowDragStart(Ustr),
    RowDrop(Ustr),
    /// Visible column index.
    ColumnDragStart(usize),
    /// Visible column index.
    ColumnDrop(usize),
    ToggleColumn { column: ColumnKey, shown: bool },
    ResetColumns,
    GlobalReset,
}

impl Reducer for GridState {
    type Action = GridAction;

    fn reduce(mut self, action: Self::Action) -> Self {
        match action {
            GridAction::FetchStarted => {
                self.loading = true;
            }
            GridAction::FetchSucceeded(rows) => {
                info!("Loaded {} users", rows.len());
                self.rows = RowStore::new(rows);
                self.loading = false;
            }
            GridAction::FetchFailed(message) => {
                error!("Failed to fetch users: {message}");
                self.loading = false;
            }
            GridAction::SetSearch(query) => {
                debug!("Search query set to {query:?}");
                self.query = query;
            }
            GridAction::ClearSearch => {
                self.query.clear();
            }
            GridAction::BeginEdit(key) => match self.rows.get(key.as_str()) {
                Some(row) => self.edit.begin(row),
                None => warn!("Cannot edit missing row {key}"),
            },
            GridAction::EditField { column, value } => {
                self.edit.set_field(column, value);
            }
            GridAction::SaveEdit => {
                if let Err(errors) = self.edit.save(&mut self.rows) {
                    warn!("Edit not saved: {errors}");
                }
            }
            GridAction::CancelEdit => {
                self.edit.cancel();
            }
            GridAction::DeleteRow(key) => {
                if self.rows.delete(key.as_str()) {
                    info!("Deleted user {key}");
                }
                if self.edit.is_editing(key.as_str()) {
                    self.edit.cancel();
                }
                if self.row_drag.source() == Some(&key) {
                    self.row_drag.clear();
                }
            }
            GridAction::RowDragStart(key) => {
                self.row_drag.drag_start(key);
            }
            GridAction::RowDrop(key) => {
                let Some((from, to)) = self.row_drag.drop_on(key) else {
                    return self;
                };
                if self.rows.move_row(from.as_str(), to.as_str()) {
                    debug!("Moved row {from} to the place of {to}");
                }
            }
            GridAction::ColumnDragStart(index) => {
                if self.draggable_column(index) {
                    self.column_drag.drag_start(index);
                } else {
                    self.column_drag.clear();
                }
            }
            GridAction::ColumnDrop(index) => {
                if !self.draggable_column(index) {
                    self.column_drag.clear();
                } else if let Some((from, to)) = self.column_drag.drop_on(index) {
                    self.layout.move_column(from, to);
                }
            }
            GridAction::ToggleColumn { column, shown } => {
                self.layout.toggle_visibility(column, shown);
            }
            GridAction::ResetColumns => {
                self.layout.reset();
                self.column_drag.clear();
            }
            GridAction::GlobalReset => {
                info!("Resetting grid");
                self.query.clear();
                self.layout.reset();
                self.edit.cancel();
                self.row_drag.clear();
                self.column_drag.clear();
                self.surface_generation = self.surface_generation.wrapping_add(1);
            }
        }
        self
    }
}

impl GridState {
    pub fn rows(&self) -> &RowStore {
        &self.rows
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn edit(&self) -> &EditSession {
        &self.edit
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn surface_generation(&self) -> u64 {
        self.surface_generation
    }

    pub fn row_drag_source(&self) -> Option<Ustr> {
        self.row_drag.source().copied()
    }

    pub fn column_drag_source(&self) -> Option<usize> {
        self.column_drag.source().copied()
    }

    /// Rows passing the committed search query, in store order.
    pub fn filtered_rows(&self) -> Vec<&UserRow> {
        filter_rows(&self.query, self.rows.rows())
    }

    pub fn visible_columns(&self) -> Vec<&'static ColumnDescriptor> {
        self.layout.visible_ordered_columns()
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} users",
            self.filtered_rows().len(),
            self.rows.len()
        )
    }

    fn draggable_column(&self, index: usize) -> bool {
        self.layout
            .visible_keys()
            .get(index)
            .is_some_and(|key| is_draggable(*key))
    }
}
