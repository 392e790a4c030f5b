pub(crate) mod config;
pub use config::{AppConfig, AppConfigError, SearchSettings};

pub(crate) mod record;
pub use record::{Record, RecordId, RecordIdError};
