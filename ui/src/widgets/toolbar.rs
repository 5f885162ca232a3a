use chrono::{DateTime, Utc};
use egui::Ui;
use roster_business::GridAction;
use roster_business::users::{ColumnLayout, SearchInput};

use super::{column_display, search_bar};

/// Search, column display and the global reset.
pub fn toolbar(
    ui: &mut Ui,
    search: &mut SearchInput,
    layout: &ColumnLayout,
    now: DateTime<Utc>,
    actions: &mut Vec<GridAction>,
) {
    ui.horizontal(|ui| {
        search_bar(ui, search, now, actions);
        ui.separator();
        column_display(ui, layout, actions);
        if ui.button("Reset").clicked() {
            search.reset();
            actions.push(GridAction::GlobalReset);
        }
    });
}
