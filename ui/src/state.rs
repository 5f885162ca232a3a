use chrono::Utc;
use log::warn;
use roster_business::users::{SearchInput, SurfaceState};
use roster_business::{BusinessConfig, GridState};
use roster_states::{Store, Time};
use ustr::Ustr;

/// The main application state.
pub struct State {
    /// Grid core; every change goes through its reducer.
    pub grid: Store<GridState>,
    /// Sort, filter and pagination of the rendered table.
    pub surface: SurfaceState,
    pub search: SearchInput,
    pub time: Time,
    pub config: BusinessConfig,
    pub theme: egui::Theme,
    /// Row waiting for delete confirmation.
    pub pending_delete: Option<Ustr>,
    pub(crate) fetch_spawned: bool,
}

impl Default for State {
    fn default() -> Self {
        let config = BusinessConfig::from_env().unwrap_or_else(|err| {
            warn!("Ignoring invalid configuration: {err:#}");
            BusinessConfig::default()
        });
        Self::with_config(config, Time::default())
    }
}

impl State {
    pub fn with_config(config: BusinessConfig, time: Time) -> Self {
        Self {
            grid: Store::default(),
            surface: SurfaceState::new(&config),
            search: SearchInput::new(config.search_debounce_ms),
            time,
            config,
            theme: egui::Theme::Light,
            pending_delete: None,
            fetch_spawned: false,
        }
    }

    /// State pointing at a mock API with a clock that only moves when told.
    pub fn test(base_url: String) -> Self {
        Self::with_config(BusinessConfig::new(base_url), Time::fixed(Utc::now()))
    }

    pub fn is_dark(&self) -> bool {
        self.theme == egui::Theme::Dark
    }
}
