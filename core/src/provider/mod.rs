//! Seam to the external vault collaborator.
//!
//! The real provider shells out to the vault service and is owned by the
//! surrounding application. The search engine only needs `list_items`.

use crate::error::ProviderError;
use crate::types::Record;
use std::path::{Path, PathBuf};

/// Lists the record summaries currently visible to the signed-in account.
pub trait VaultProvider {
    fn list_items(&self) -> Result<Vec<Record>, ProviderError>;
}

/// Decodes a JSON array of vault items.
///
/// A single malformed item rejects the whole batch.
pub fn parse_records(json: &str) -> Result<Vec<Record>, ProviderError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a JSON export of the vault item list from disk on every call.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VaultProvider for JsonFileProvider {
    fn list_items(&self) -> Result<Vec<Record>, ProviderError> {
        let content = std::fs::read_to_string(&self.path)?;
        parse_records(&content)
    }
}

/// Serves a fixed record set.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    records: Vec<Record>,
}

impl StaticProvider {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl VaultProvider for StaticProvider {
    fn list_items(&self) -> Result<Vec<Record>, ProviderError> {
        Ok(self.records.clone())
    }
}
