//! Incremental fuzzy search over vault records.
//!
//! Filters and ranks a record set on a background thread while the
//! interactive thread keeps editing the query.
//!
//! # Design
//!
//! - Candidate filter: case-insensitive substring match on title, category
//!   and tags. The empty query selects everything, untouched.
//! - Ranker: edit distance of the query to the title or category (whichever
//!   is closer), stable ascending sort, truncated to the result limit.
//! - One [`SearchWorker`] thread runs filter + rank. Requests are immutable
//!   snapshots; results come back over a channel.
//! - The [`SearchCoordinator`] numbers every request and never shows a result
//!   older than one it already showed.
//!
//! # Non-blocking API
//!
//! - `set_records()`, `set_query()`: Feed changes to the coordinator
//! - `tick()`: Collects finished results without blocking
//! - `current_results()`: The latest accepted result set

mod config;
mod coordinator;
mod distance;
mod error;
mod filter;
mod query;
mod rank;
mod request;
mod worker;

pub use config::{DEFAULT_RESULT_LIMIT, SearchConfig};
pub use coordinator::SearchCoordinator;
pub use distance::edit_distance;
pub use error::SearchError;
pub use filter::{filter_candidates, matches};
pub use query::SearchQuery;
pub use rank::{rank_candidates, search};
pub use request::{SearchRequest, SearchResult};
pub use worker::SearchWorker;
