use log::info;
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_FETCH_LIMIT: usize = 100;
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 400;

/// Tunables for the user grid.
///
/// Page size and debounce delay have no deeper meaning than "felt right";
/// they are configuration, not invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    pub fetch_limit: usize,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub search_debounce_ms: u64,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }
}

/// Environment overrides, all optional.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    roster_api_base_url: Option<String>,
    roster_fetch_limit: Option<usize>,
    roster_page_size: Option<usize>,
    roster_search_debounce_ms: Option<u64>,
}

impl BusinessConfig {
    /// Config pointing at another API host, everything else default.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    /// Reads `ROSTER_*` variables over the defaults.
    ///
    /// There is no process environment on the web, so wasm builds always get
    /// the defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        if cfg!(target_arch = "wasm32") {
            return Ok(Self::default());
        }
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<S>(vars: impl IntoIterator<Item = (S, S)>) -> anyhow::Result<Self>
    where
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            roster_api_base_url,
            roster_fetch_limit,
            roster_page_size,
            roster_search_debounce_ms,
        } = raw;

        let mut config = Self::default();

        if let Some(url) = roster_api_base_url {
            info!("Using ROSTER_API_BASE_URL={url}");
            config.api_base_url = url;
        }
        if let Some(limit) = roster_fetch_limit {
            anyhow::ensure!(limit > 0, "ROSTER_FETCH_LIMIT must be positive");
            config.fetch_limit = limit;
        }
        if let Some(size) = roster_page_size {
            anyhow::ensure!(size > 0, "ROSTER_PAGE_SIZE must be positive");
            config.page_size = size;
            if !config.page_size_options.contains(&size) {
                config.page_size_options.push(size);
                config.page_size_options.sort_unstable();
            }
        }
        if let Some(delay) = roster_search_debounce_ms {
            config.search_debounce_ms = delay;
        }

        Ok(config)
    }

    /// Endpoint listing the users, e.g. `https://dummyjson.com/users?limit=100`.
    pub fn users_url(&self) -> String {
        format!(
            "{}/users?limit={}",
            self.api_base_url.trim_end_matches('/'),
            self.fetch_limit
        )
    }
}
