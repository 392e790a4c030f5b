//! Interactive-side owner of the record set and the query.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::query::SearchQuery;
use crate::request::{SearchRequest, SearchResult};
use crate::worker::SearchWorker;
#[cfg(test)]
use std::cell::Cell;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Instant;
use tracing::{debug, trace, warn};
use vault_core::ProviderError;
use vault_core::provider::VaultProvider;
use vault_core::types::Record;

/// A running worker and the receiving end of its results channel.
///
/// `results` is declared first so it drops before the worker is joined: the
/// thread then fails its next send and exits without calling `notify`.
struct WorkerHandle {
    results: Receiver<SearchResult>,
    worker: SearchWorker,
}

impl WorkerHandle {
    fn spawn(
        config: &SearchConfig,
        notify: &Arc<dyn Fn() + Send + Sync>,
    ) -> Result<Self, SearchError> {
        #[cfg(test)]
        if FAIL_SPAWN.with(Cell::get) {
            return Err(SearchError::WorkerSpawn(std::io::Error::other(
                "worker spawn disabled",
            )));
        }

        let (results_tx, results) = mpsc::channel();
        let worker = SearchWorker::spawn(config.result_limit, results_tx, Arc::clone(notify))?;
        Ok(Self { results, worker })
    }

    /// Collects every result already delivered. The flag is true if the
    /// worker thread is gone.
    fn receive(&self) -> (Vec<SearchResult>, bool) {
        let mut received = Vec::new();
        loop {
            match self.results.try_recv() {
                Ok(result) => received.push(result),
                Err(TryRecvError::Empty) => return (received, false),
                Err(TryRecvError::Disconnected) => return (received, true),
            }
        }
    }
}

/// Forwards every record or query change to a background [`SearchWorker`]
/// and publishes the newest result.
///
/// Each submission carries a strictly increasing sequence number. A result
/// older than the last accepted one is dropped, so a slow computation for a
/// superseded query never overwrites a newer result. In-flight work is not
/// cancelled; stale output is ignored at this boundary instead.
///
/// # Non-blocking API
///
/// - `set_records()`, `set_query()`: Update state and submit (queries may be debounced)
/// - `tick()`: Submits due queries and collects finished results without blocking
/// - `current_results()`: The most recently accepted result set
///
/// The worker is started on the first submission and joined when the
/// coordinator is dropped.
pub struct SearchCoordinator {
    config: SearchConfig,
    notify: Arc<dyn Fn() + Send + Sync>,
    records: Arc<[Record]>,
    query: SearchQuery,
    worker: Option<WorkerHandle>,
    next_sequence: u64,
    in_flight: usize,
    /// Sequence of the last accepted result.
    high_water: Option<u64>,
    current: Vec<Record>,
    /// Set while a query change waits out the debounce interval.
    query_changed_at: Option<Instant>,
}

/// Create operations.
impl SearchCoordinator {
    /// The `notify` callback is invoked from the worker thread whenever a
    /// result is ready, typically to request a repaint followed by `tick()`.
    pub fn new(config: SearchConfig, notify: Arc<dyn Fn() + Send + Sync>) -> Self {
        Self {
            config,
            notify,
            records: Arc::from(Vec::new()),
            query: SearchQuery::default(),
            worker: None,
            next_sequence: 0,
            in_flight: 0,
            high_water: None,
            current: Vec::new(),
            query_changed_at: None,
        }
    }
}

/// Input operations.
impl SearchCoordinator {
    /// Replaces the record set wholesale and submits right away, flushing
    /// any debounced query with it.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = Arc::from(records);
        self.query_changed_at = None;
        let _ = self.submit();
    }

    /// Replaces the query.
    ///
    /// Submits immediately unless a debounce interval is configured, in which
    /// case `tick()` submits once the query has been idle long enough.
    pub fn set_query(&mut self, term: &str, now: Instant) {
        let query = SearchQuery::new(term);
        if query == self.query {
            return;
        }
        self.query = query;

        if self.config.debounce_interval.is_zero() {
            let _ = self.submit();
        } else {
            self.query_changed_at = Some(now);
        }
    }

    /// Reloads the record set from the vault provider.
    ///
    /// On failure the previous records and results stay in place.
    pub fn refresh(&mut self, provider: &dyn VaultProvider) -> Result<usize, ProviderError> {
        match provider.list_items() {
            Ok(records) => {
                let count = records.len();
                self.set_records(records);
                Ok(count)
            }
            Err(err) => {
                warn!(%err, "failed to fetch vault items, keeping last results");
                Err(err)
            }
        }
    }
}

/// Result operations.
impl SearchCoordinator {
    /// Drives the pipeline forward without blocking.
    ///
    /// Returns true if the displayed results changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(changed_at) = self.query_changed_at
            && now.saturating_duration_since(changed_at) >= self.config.debounce_interval
        {
            self.query_changed_at = None;
            changed |= self.submit();
        }

        let Some(handle) = &self.worker else {
            return changed;
        };
        let (received, disconnected) = handle.receive();

        changed |= self.accept_all(received);

        if disconnected {
            let lost = self.in_flight;
            warn!(lost, "search worker terminated unexpectedly");
            self.worker = None;
            self.in_flight = 0;
            if lost > 0 {
                changed |= self.submit();
            }
        }

        changed
    }

    /// True when no query is waiting on the debounce and every submitted
    /// request has reported back.
    pub fn is_done(&self) -> bool {
        self.query_changed_at.is_none() && self.in_flight == 0
    }

    pub fn current_results(&self) -> &[Record] {
        &self.current
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl SearchCoordinator {
    /// Returns true only if the unfiltered fallback changed the display.
    fn submit(&mut self) -> bool {
        self.next_sequence += 1;
        let sequence = self.next_sequence;
        let request = SearchRequest {
            records: Arc::clone(&self.records),
            query: self.query.clone(),
            sequence,
        };

        debug!(
            sequence,
            records = self.records.len(),
            query_len = self.query.as_str().chars().count(),
            "submitting search"
        );

        match self.send(request) {
            Ok(()) => {
                self.in_flight += 1;
                false
            }
            Err(err) => {
                warn!(%err, sequence, "search worker unavailable, showing unfiltered records");
                self.publish_unfiltered(sequence)
            }
        }
    }

    /// Submits to the current worker, replacing it once if it has died.
    fn send(&mut self, request: SearchRequest) -> Result<(), SearchError> {
        if let Some(handle) = &self.worker {
            match handle.worker.submit(request.clone()) {
                Ok(()) => return Ok(()),
                Err(err) => {
                    warn!(%err, "search worker lost, restarting");
                    self.retire_worker();
                }
            }
        }

        let handle = self
            .worker
            .insert(WorkerHandle::spawn(&self.config, &self.notify)?);
        handle.worker.submit(request)
    }

    /// Drops the worker after keeping whatever it delivered before dying.
    fn retire_worker(&mut self) {
        if let Some(handle) = self.worker.take() {
            let (received, _) = handle.receive();
            drop(handle);
            self.accept_all(received);
        }
        self.in_flight = 0;
    }

    fn accept_all(&mut self, received: Vec<SearchResult>) -> bool {
        let mut changed = false;
        for result in received {
            self.in_flight = self.in_flight.saturating_sub(1);
            changed |= self.accept(result);
        }
        changed
    }

    /// Publishes `result` unless a newer sequence was already shown.
    /// Returns true if the displayed items changed.
    pub(crate) fn accept(&mut self, result: SearchResult) -> bool {
        if let Some(high_water) = self.high_water
            && result.sequence < high_water
        {
            trace!(
                sequence = result.sequence,
                high_water,
                "discarding stale search result"
            );
            return false;
        }

        self.high_water = Some(result.sequence);
        if self.current == result.items {
            return false;
        }
        self.current = result.items;
        true
    }

    /// Fallback when no worker can be reached: show everything rather than
    /// nothing.
    pub(crate) fn publish_unfiltered(&mut self, sequence: u64) -> bool {
        self.high_water = Some(self.high_water.map_or(sequence, |mark| mark.max(sequence)));
        if self.current[..] == self.records[..] {
            return false;
        }
        self.current = self.records.to_vec();
        (self.notify)();
        true
    }
}

#[cfg(test)]
thread_local! {
    static FAIL_SPAWN: Cell<bool> = const { Cell::new(false) };
}

#[cfg(test)]
impl SearchCoordinator {
    /// Makes worker creation fail on the calling thread.
    pub(crate) fn fail_worker_spawn(fail: bool) {
        FAIL_SPAWN.with(|flag| flag.set(fail));
    }

    /// Stops the worker thread behind the coordinator's back.
    pub(crate) fn kill_worker(&mut self) {
        if let Some(handle) = self.worker.as_mut() {
            handle.worker.stop();
        }
    }

    pub(crate) fn has_worker(&self) -> bool {
        self.worker.is_some()
    }

    pub(crate) fn next_sequence(&mut self) -> u64 {
        self.next_sequence += 1;
        self.next_sequence
    }
}
