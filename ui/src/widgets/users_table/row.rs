//! Row rendering for the users table.

use egui::{Id, Label, Ui};
use egui_extras::TableRow;
use roster_business::GridAction;
use roster_business::users::{ColumnDescriptor, ColumnKey, EditSession, UserRow};
use ustr::Ustr;

use super::cells::{
    RowCommand, render_action_buttons, render_edit_cell, render_gender_tag, render_text_cell,
};
use super::header::outline_drop_target;

/// Drag payload of a row: its key.
#[derive(Debug, Clone, Copy)]
pub struct RowDrag(pub Ustr);

/// Renders one user row: drag handle, then the visible columns.
///
/// Every cell is a drop zone for a dragged row.
pub fn render_user_row(
    row: &mut TableRow<'_, '_>,
    user: &UserRow,
    columns: &[&'static ColumnDescriptor],
    edit: &EditSession,
    pending_delete: &mut Option<Ustr>,
    actions: &mut Vec<GridAction>,
) {
    let editing = edit.is_editing(user.key.as_str());
    let mut responses = Vec::with_capacity(columns.len() + 1);

    let (_, response) = row.col(|ui| render_drag_handle(ui, user.key, actions));
    responses.push(response);

    for column in columns {
        let (_, response) = row.col(|ui| match column.key {
            ColumnKey::Actions => match render_action_buttons(ui, editing) {
                Some(RowCommand::Edit) => actions.push(GridAction::BeginEdit(user.key)),
                Some(RowCommand::Save) => actions.push(GridAction::SaveEdit),
                Some(RowCommand::Cancel) => actions.push(GridAction::CancelEdit),
                Some(RowCommand::Delete) => *pending_delete = Some(user.key),
                None => {}
            },
            _ if editing && column.editable => render_edit_cell(ui, column, edit, actions),
            ColumnKey::Gender => render_gender_tag(ui, &user.gender),
            _ => render_text_cell(ui, user.cell_text(column.key)),
        });
        responses.push(response);
    }

    if responses
        .iter()
        .any(|response| response.dnd_hover_payload::<RowDrag>().is_some())
    {
        for response in &responses {
            outline_drop_target(response);
        }
    }
    if responses
        .iter()
        .any(|response| response.dnd_release_payload::<RowDrag>().is_some())
    {
        actions.push(GridAction::RowDrop(user.key));
    }
}

fn render_drag_handle(ui: &mut Ui, key: Ustr, actions: &mut Vec<GridAction>) {
    let drag = ui.dnd_drag_source(Id::new(("row_drag", key.as_str())), RowDrag(key), |ui| {
        ui.add(Label::new("☰").selectable(false))
    });
    if drag.response.drag_started() {
        actions.push(GridAction::RowDragStart(key));
    }
}
