use std::time::Duration;
use vault_core::types::SearchSettings;

/// Number of ranked records kept for a non-empty query.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub result_limit: usize,
    /// Suppresses submission until this much idle time has elapsed since the
    /// last query change. Zero submits on every change.
    pub debounce_interval: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            debounce_interval: Duration::ZERO,
        }
    }
}

impl From<&SearchSettings> for SearchConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            result_limit: settings.result_limit,
            debounce_interval: Duration::from_millis(settings.debounce_interval_ms),
        }
    }
}
