use chrono::{DateTime, Utc};
use egui::{TextEdit, Ui};
use roster_business::GridAction;
use roster_business::users::SearchInput;

pub const SEARCH_HINT: &str = "Global search in any column";

/// Search box plus its Clear button.
///
/// Each keystroke updates the draft and restarts the debounce; the committed
/// query reaches the grid when the app polls [`SearchInput`].
pub fn search_bar(
    ui: &mut Ui,
    search: &mut SearchInput,
    now: DateTime<Utc>,
    actions: &mut Vec<GridAction>,
) {
    let mut draft = search.draft().to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut draft)
            .hint_text(SEARCH_HINT)
            .desired_width(360.0),
    );
    if response.changed() {
        search.edit(draft, now);
    }

    if ui.button("Clear").clicked() {
        search.clear();
        actions.push(GridAction::ClearSearch);
    }
}
