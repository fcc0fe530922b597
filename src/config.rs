use std::time::Duration;

/// TheMealDB public v1 endpoint (test key "1")
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Seconds a cached response stays fresh
const FRESHNESS_SECS: i64 = 5 * 60;

/// Runtime settings. There is no external configuration surface; every
/// value is fixed here and only tests build other combinations.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    /// Age after which a cached response is refetched
    pub freshness: chrono::Duration,
    /// Quiet period before a search query is sent
    pub debounce: Duration,
    /// Fetch meal pictures for cards and the detail screen
    pub load_thumbnails: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            freshness: chrono::Duration::seconds(FRESHNESS_SECS),
            debounce: Duration::from_millis(300),
            load_thumbnails: true,
        }
    }
}
