use egui::{Align2, Context, Window};
use roster_business::GridAction;
use ustr::Ustr;

/// Confirmation window for a pending delete. Closes on either answer.
pub fn delete_confirm(ctx: &Context, pending: &mut Option<Ustr>, actions: &mut Vec<GridAction>) {
    let Some(key) = *pending else {
        return;
    };

    Window::new("Delete this user?")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("User #{key} will be removed from the table."));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Yes").clicked() {
                    actions.push(GridAction::DeleteRow(key));
                    *pending = None;
                }
                if ui.button("No").clicked() {
                    *pending = None;
                }
            });
        });
}
