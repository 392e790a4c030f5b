//! Units of work exchanged with the search worker.

use crate::query::SearchQuery;
use std::sync::Arc;
use vault_core::types::Record;

/// Snapshot of the coordinator's state at submission time.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub records: Arc<[Record]>,
    pub query: SearchQuery,
    /// Strictly increasing per coordinator.
    pub sequence: u64,
}

/// Ranked output of one completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub items: Vec<Record>,
    pub sequence: u64,
}
