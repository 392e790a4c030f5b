use crate::distance::edit_distance;
use crate::filter::filter_candidates;
use crate::query::SearchQuery;
use vault_core::types::Record;

/// A filtered record paired with its distance to the query.
#[derive(Debug)]
pub(crate) struct ScoredCandidate<'a> {
    pub(crate) record: &'a Record,
    pub(crate) score: usize,
}

impl<'a> ScoredCandidate<'a> {
    /// Title and category drive relevance; tags only widen the filter.
    fn new(record: &'a Record, query: &SearchQuery) -> Self {
        let title = edit_distance(&record.title().to_lowercase(), query.as_str());
        let category = edit_distance(&record.category().to_lowercase(), query.as_str());

        Self {
            record,
            score: title.min(category),
        }
    }
}

/// Orders candidates by ascending score and keeps the first `limit`.
///
/// Equal scores keep their filtered order (`sort_by_key` is stable).
pub fn rank_candidates(
    candidates: Vec<&Record>,
    query: &SearchQuery,
    limit: usize,
) -> Vec<Record> {
    let mut scored: Vec<ScoredCandidate<'_>> = candidates
        .into_iter()
        .map(|record| ScoredCandidate::new(record, query))
        .collect();

    scored.sort_by_key(|candidate| candidate.score);

    scored
        .into_iter()
        .take(limit)
        .map(|candidate| candidate.record.clone())
        .collect()
}

/// Filters then ranks `records` for `query`.
///
/// The empty query returns every record unchanged and untruncated.
pub fn search(records: &[Record], query: &SearchQuery, limit: usize) -> Vec<Record> {
    if query.is_empty() {
        return records.to_vec();
    }

    rank_candidates(filter_candidates(records, query), query, limit)
}
