use crate::error::ValidationError;
use nutype::nutype;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a vault item, as assigned by the vault service.
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct RecordId(String);

/// Summary of a vault item, subject to search.
///
/// Records are immutable snapshots handed over by the vault provider. Unknown
/// fields of the item listing (vault, version, urls, timestamps) are ignored
/// on decode; a missing `id`, `title` or `category` rejects the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    title: String,
    category: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    tags: Vec<String>,
}

impl Record {
    pub fn new(id: RecordId, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            tags: Vec::new(),
        }
    }

    /// Builds a record from an untrusted id string.
    pub fn try_new(
        id: &str,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> crate::Result<Self> {
        let id = RecordId::try_new(id).map_err(ValidationError::from)?;
        Ok(Self::new(id, title, category))
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

// The vault CLI emits `"tags": null` for untagged items.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests;
