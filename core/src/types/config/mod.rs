mod app;

pub use app::{AppConfig, AppConfigError, SearchSettings};
