//! Column widths for the users table.

use egui_extras::Column;
use roster_business::users::ColumnKey;

pub const HANDLE_WIDTH: f32 = 24.0;
pub const ROW_HEIGHT: f32 = 30.0;
/// Editing rows leave room for a validation message under each input.
pub const EDIT_ROW_HEIGHT: f32 = 52.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// Table column for the drag handle that starts every row.
#[inline]
pub fn handle_column() -> Column {
    Column::exact(HANDLE_WIDTH)
}

/// Table column for a catalog column.
#[inline]
pub fn table_column(key: ColumnKey) -> Column {
    match key {
        ColumnKey::Id => Column::exact(60.0),
        ColumnKey::Age => Column::exact(70.0),
        ColumnKey::Gender => Column::exact(90.0),
        ColumnKey::Actions => Column::exact(150.0),
        ColumnKey::Email | ColumnKey::Company => Column::initial(200.0).at_least(120.0).clip(true),
        _ => Column::initial(130.0).at_least(90.0).clip(true),
    }
}
