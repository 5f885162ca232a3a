//! Cell rendering functions for the users table.

use egui::{Button, Frame, Label, Margin, RichText, TextEdit, Ui};
use roster_business::GridAction;
use roster_business::users::{ColumnDescriptor, EditSession};

use crate::utils::colors::{COLOR_BLUE, COLOR_MAGENTA, COLOR_RED};

/// What the user clicked in the actions column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowCommand {
    Edit,
    Delete,
    Save,
    Cancel,
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: String) {
    ui.add(Label::new(text).truncate());
}

/// Gender as a colored upper-case tag.
pub fn render_gender_tag(ui: &mut Ui, gender: &str) {
    if gender.is_empty() {
        return;
    }
    let fill = if gender == "male" {
        COLOR_BLUE
    } else {
        COLOR_MAGENTA
    };
    Frame::NONE
        .fill(fill)
        .inner_margin(Margin::symmetric(6, 2))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.label(
                RichText::new(gender.to_uppercase())
                    .small()
                    .color(egui::Color32::WHITE),
            );
        });
}

/// Input bound to the edit session's scratch value, with its validation
/// message underneath.
pub fn render_edit_cell(
    ui: &mut Ui,
    column: &ColumnDescriptor,
    edit: &EditSession,
    actions: &mut Vec<GridAction>,
) {
    let mut value = edit.scratch_value(column.key).unwrap_or_default().to_string();

    ui.vertical(|ui| {
        let response = ui.add(
            TextEdit::singleline(&mut value)
                .hint_text(format!("Please input {}", column.title))
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            actions.push(GridAction::EditField {
                column: column.key,
                value,
            });
        }
        if let Some(message) = edit.error_for(column.key) {
            ui.label(RichText::new(message).small().color(COLOR_RED));
        }
    });
}

/// Edit / Delete, or Save / Cancel on the row being edited.
pub fn render_action_buttons(ui: &mut Ui, editing: bool) -> Option<RowCommand> {
    let mut command = None;
    ui.horizontal(|ui| {
        if editing {
            if ui.button("Save").clicked() {
                command = Some(RowCommand::Save);
            }
            if ui.button("Cancel").clicked() {
                command = Some(RowCommand::Cancel);
            }
        } else {
            if ui.button("Edit").clicked() {
                command = Some(RowCommand::Edit);
            }
            if ui
                .add(Button::new(RichText::new("Delete").color(COLOR_RED)))
                .clicked()
            {
                command = Some(RowCommand::Delete);
            }
        }
    });
    command
}
