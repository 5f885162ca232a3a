//! The user grid: row model, column catalog and the reducer driving them.

mod columns;
mod edit;
mod grid;
mod layout;
mod reorder;
mod row;
mod search;
mod source;
mod store;
mod surface;

pub use columns::{
    ColumnDescriptor, ColumnFilter, ColumnKey, FilterOption, FilterOptions, SortComparator,
    UnknownColumn, catalog, selectable_columns,
};
pub use edit::{EditSession, ValidationErrors};
pub use grid::{GridAction, GridState};
pub use layout::{ColumnLayout, is_draggable};
pub use reorder::{DragReorder, relocate};
pub use row::{FieldError, RowFields, UserRow};
pub use search::{SEARCHABLE, SearchInput, filter_rows};
pub use source::{SourceError, fetch_users, parse_users};
pub use store::RowStore;
pub use surface::{Page, Pagination, SortOrder, SortState, SurfaceState};
