use egui::Ui;
use roster_business::GridAction;
use roster_business::users::{ColumnLayout, selectable_columns};

/// "Column Display" menu: one checkbox per column, plus a reset link.
pub fn column_display(ui: &mut Ui, layout: &ColumnLayout, actions: &mut Vec<GridAction>) {
    ui.menu_button("Column Display", |ui| {
        for column in selectable_columns() {
            let mut shown = layout.is_visible(column.key);
            let protected = column.key.is_protected();
            let response = ui.add_enabled(
                !protected,
                egui::Checkbox::new(&mut shown, column.title),
            );
            if response.changed() {
                actions.push(GridAction::ToggleColumn {
                    column: column.key,
                    shown,
                });
            }
        }

        ui.separator();
        if ui.link("Reset").clicked() {
            actions.push(GridAction::ResetColumns);
            ui.close();
        }
    });
}
