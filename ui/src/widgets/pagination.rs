use egui::{ComboBox, Ui};
use roster_business::users::SurfaceState;

/// Page links this far from the current page stay visible.
const PAGE_WINDOW: usize = 2;

/// Previous/next, page numbers, page size and the range summary.
pub fn pagination_bar(ui: &mut Ui, surface: &mut SurfaceState, total: usize) {
    let pagination = surface.pagination().clone();
    let page = pagination.page();
    let page_count = pagination.page_count(total);

    ui.horizontal(|ui| {
        ui.label(pagination.summary(total));
        ui.separator();

        if ui.add_enabled(page > 1, egui::Button::new("‹")).clicked() {
            surface.set_page(page - 1);
        }
        for number in 1..=page_count {
            let near = number.abs_diff(page) <= PAGE_WINDOW;
            if number == 1 || number == page_count || near {
                if ui
                    .selectable_label(number == page, number.to_string())
                    .clicked()
                {
                    surface.set_page(number);
                }
            } else if number.abs_diff(page) == PAGE_WINDOW + 1 {
                ui.label("…");
            }
        }
        if ui
            .add_enabled(page < page_count, egui::Button::new("›"))
            .clicked()
        {
            surface.set_page(page + 1);
        }

        let mut size = pagination.page_size();
        ComboBox::from_id_salt("page_size")
            .selected_text(format!("{size} / page"))
            .show_ui(ui, |ui| {
                for option in pagination.size_options() {
                    ui.selectable_value(&mut size, *option, format!("{option} / page"));
                }
            });
        if size != pagination.page_size() {
            surface.set_page_size(size);
        }
    });
}
