//! The users table.
//!
//! - `columns`: column widths and row heights
//! - `header`: header cells with drag, sort and filter
//! - `row`: one user row, drag handle first
//! - `cells`: per-column cell rendering

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Layout, ScrollArea, Ui};
use egui_extras::TableBuilder;
use roster_business::{GridAction, GridState};
use roster_business::users::SurfaceState;
use ustr::Ustr;

use columns::{EDIT_ROW_HEIGHT, HEADER_HEIGHT, ROW_HEIGHT, handle_column, table_column};
use header::render_table_header;
use row::render_user_row;

/// Renders the current page of the grid. Returns how many rows are left
/// after column filters, across all pages.
pub fn users_table(
    ui: &mut Ui,
    grid: &GridState,
    surface: &mut SurfaceState,
    pending_delete: &mut Option<Ustr>,
    actions: &mut Vec<GridAction>,
) -> usize {
    let columns = grid.visible_columns();
    let page = surface.project(grid.filtered_rows());
    let all_rows = grid.rows().rows();

    ScrollArea::horizontal().show(ui, |ui| {
        let mut table = TableBuilder::new(ui)
            .id_salt("users_table")
            .striped(true)
            .resizable(false)
            .cell_layout(Layout::left_to_right(egui::Align::Center))
            .column(handle_column());
        for column in &columns {
            table = table.column(table_column(column.key));
        }

        table
            .header(HEADER_HEIGHT, |mut header| {
                render_table_header(&mut header, &columns, all_rows, surface, actions);
            })
            .body(|mut body| {
                for user in &page.rows {
                    let height = if grid.edit().is_editing(user.key.as_str()) {
                        EDIT_ROW_HEIGHT
                    } else {
                        ROW_HEIGHT
                    };
                    body.row(height, |mut row| {
                        render_user_row(
                            &mut row,
                            user,
                            &columns,
                            grid.edit(),
                            pending_delete,
                            actions,
                        );
                    });
                }
            });
    });

    if page.rows.is_empty() && !grid.is_loading() {
        ui.vertical_centered(|ui| {
            ui.weak("No data");
        });
    }

    page.total
}
