//! Header row: drag to reorder, click to sort, menu to filter.

use egui::{Id, Label, RichText, Stroke, Ui};
use egui_extras::TableRow;
use roster_business::GridAction;
use roster_business::users::{ColumnDescriptor, SortOrder, SurfaceState, UserRow, is_draggable};

use crate::utils::colors::COLOR_DROP_TARGET;

/// Drag payload of a header cell: its visible index.
#[derive(Debug, Clone, Copy)]
pub struct ColumnDrag(pub usize);

/// Renders the header row.
///
/// Drag starts and drops become grid actions; sort and filter clicks change
/// `surface` directly.
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    columns: &[&'static ColumnDescriptor],
    rows: &[UserRow],
    surface: &mut SurfaceState,
    actions: &mut Vec<GridAction>,
) {
    header.col(|_ui| {});

    for (index, column) in columns.iter().enumerate() {
        let (_, response) = header.col(|ui| {
            render_header_cell(ui, index, column, rows, surface, actions);
        });

        if !is_draggable(column.key) {
            continue;
        }
        if response.dnd_hover_payload::<ColumnDrag>().is_some() {
            outline_drop_target(&response);
        }
        if response.dnd_release_payload::<ColumnDrag>().is_some() {
            actions.push(GridAction::ColumnDrop(index));
        }
    }
}

pub(super) fn outline_drop_target(response: &egui::Response) {
    response.ctx.layer_painter(response.layer_id).rect_stroke(
        response.rect,
        2.0,
        Stroke::new(2.0, COLOR_DROP_TARGET),
        egui::StrokeKind::Inside,
    );
}

fn render_header_cell(
    ui: &mut Ui,
    index: usize,
    column: &'static ColumnDescriptor,
    rows: &[UserRow],
    surface: &mut SurfaceState,
    actions: &mut Vec<GridAction>,
) {
    let title = Label::new(RichText::new(column.title).strong()).selectable(false);

    if is_draggable(column.key) {
        let drag_id = Id::new(("column_drag", column.key.as_str()));
        let drag = ui.dnd_drag_source(drag_id, ColumnDrag(index), |ui| ui.add(title));
        if drag.response.drag_started() {
            actions.push(GridAction::ColumnDragStart(index));
        }
    } else {
        ui.add(title);
    }

    if column.is_sortable() {
        let indicator = match surface.sort_order(column.key) {
            None => "↕",
            Some(SortOrder::Ascend) => "⬆",
            Some(SortOrder::Descend) => "⬇",
        };
        if ui
            .small_button(indicator)
            .on_hover_text(format!("Sort by {}", column.title))
            .clicked()
        {
            surface.cycle_sort(column.key);
        }
    }

    if column.is_filterable() {
        render_filter_menu(ui, column, rows, surface);
    }
}

fn render_filter_menu(
    ui: &mut Ui,
    column: &'static ColumnDescriptor,
    rows: &[UserRow],
    surface: &mut SurfaceState,
) {
    let label = if surface.has_filter(column.key) {
        RichText::new("⏷").strong()
    } else {
        RichText::new("⏷")
    };

    ui.menu_button(label, |ui| {
        egui::ScrollArea::vertical()
            .max_height(240.0)
            .show(ui, |ui| {
                for option in column.filter_options(rows) {
                    let mut selected = surface.is_filter_selected(column.key, &option.value);
                    if ui.checkbox(&mut selected, &option.label).changed() {
                        surface.toggle_filter(column.key, &option.value, selected);
                    }
                }
            });
        ui.separator();
        if ui.button("Reset").clicked() {
            surface.clear_filter(column.key);
            ui.close();
        }
    });
}
