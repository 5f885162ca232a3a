use egui::{Theme, Ui};

/// Title on the left, theme switch on the right.
pub fn top_bar(ui: &mut Ui, theme: &mut Theme) {
    ui.horizontal(|ui| {
        ui.heading("User Management");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut dark = *theme == Theme::Dark;
            if ui.checkbox(&mut dark, "Dark mode").changed() {
                *theme = if dark { Theme::Dark } else { Theme::Light };
                log::info!("Switched to {theme:?} theme");
            }
        });
    });
}
