//! Domain layer of the roster app: the user grid core, its data source and
//! configuration. Nothing here knows about rendering.

mod config;
pub mod http;
pub mod users;

pub use config::{
    BusinessConfig, DEFAULT_API_BASE_URL, DEFAULT_FETCH_LIMIT, DEFAULT_PAGE_SIZE,
    DEFAULT_PAGE_SIZE_OPTIONS, DEFAULT_SEARCH_DEBOUNCE_MS,
};
pub use users::{GridAction, GridState, UserRow};
