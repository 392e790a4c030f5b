use crate::query::SearchQuery;
use vault_core::types::Record;

/// Returns true if the query occurs in the title, the category or any tag,
/// ignoring case.
pub fn matches(record: &Record, query: &SearchQuery) -> bool {
    let needle = query.as_str();

    record.title().to_lowercase().contains(needle)
        || record.category().to_lowercase().contains(needle)
        || record
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Selects the records matching `query`, preserving input order.
///
/// An empty query selects every record.
pub fn filter_candidates<'a>(records: &'a [Record], query: &SearchQuery) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| matches(record, query))
        .collect()
}
