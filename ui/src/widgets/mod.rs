mod column_display;
mod delete_confirm;
mod fetch;
mod pagination;
mod search_bar;
mod toolbar;
mod top_bar;
pub mod users_table;

pub use column_display::column_display;
pub use delete_confirm::delete_confirm;
pub use fetch::spawn_fetch;
pub use pagination::pagination_bar;
pub use search_bar::{SEARCH_HINT, search_bar};
pub use toolbar::toolbar;
pub use top_bar::top_bar;
pub use users_table::users_table;
