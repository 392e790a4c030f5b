//! Search query types.

/// The current free-text search term.
///
/// Stored lower-cased so every comparison is case-insensitive. The empty
/// query is meaningful: it selects every record in its original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(term: &str) -> Self {
        Self(term.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SearchQuery {
    fn from(term: &str) -> Self {
        Self::new(term)
    }
}
