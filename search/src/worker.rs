//! Background worker thread running filter and rank off the interactive path.

use crate::error::SearchError;
use crate::rank::search;
use crate::request::{SearchRequest, SearchResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, trace};

const THREAD_NAME: &str = "vault-search";

pub(crate) enum Request {
    Search(SearchRequest),
    Shutdown,
}

/// Owns the search thread.
///
/// Requests are processed one at a time in submission order. While the
/// worker is running, every accepted request yields exactly one
/// [`SearchResult`] on the results channel, followed by one call to `notify`.
///
/// Dropping the worker abandons requests still queued, lets the one in
/// progress finish and joins the thread.
pub struct SearchWorker {
    requests: Sender<Request>,
    stopping: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SearchWorker {
    /// Starts the worker thread.
    ///
    /// The worker holds the only `results` sender it is given, so the receiver
    /// observes a disconnect once the thread is gone.
    pub fn spawn(
        result_limit: usize,
        results: Sender<SearchResult>,
        notify: Arc<dyn Fn() + Send + Sync>,
    ) -> Result<Self, SearchError> {
        let (request_tx, request_rx) = mpsc::channel::<Request>();
        let stopping = Arc::new(AtomicBool::new(false));
        let worker_stopping = Arc::clone(&stopping);

        let handle = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || {
                worker_loop(request_rx, results, result_limit, notify, &worker_stopping)
            })?;

        debug!(result_limit, "search worker started");

        Ok(Self {
            requests: request_tx,
            stopping,
            handle: Some(handle),
        })
    }

    /// Enqueues a request without blocking.
    pub fn submit(&self, request: SearchRequest) -> Result<(), SearchError> {
        self.requests
            .send(Request::Search(request))
            .map_err(|_| SearchError::WorkerUnavailable)
    }

    fn shutdown(&mut self) {
        self.stopping.store(true, Ordering::Release);
        let _ = self.requests.send(Request::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
impl SearchWorker {
    pub(crate) fn stop(&mut self) {
        self.shutdown();
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

fn worker_loop(
    requests: Receiver<Request>,
    results: Sender<SearchResult>,
    result_limit: usize,
    notify: Arc<dyn Fn() + Send + Sync>,
    stopping: &AtomicBool,
) {
    let mut skipped = 0usize;
    for request in requests {
        match request {
            Request::Search(_) if stopping.load(Ordering::Acquire) => skipped += 1,
            Request::Search(request) => {
                let result = run(request, result_limit);
                if results.send(result).is_err() {
                    // Receiver dropped: the coordinator is gone.
                    break;
                }
                notify();
            }
            Request::Shutdown => break,
        }
    }

    trace!(skipped, "search worker stopped");
}

fn run(request: SearchRequest, result_limit: usize) -> SearchResult {
    let started = Instant::now();
    let SearchRequest {
        records,
        query,
        sequence,
    } = request;

    let items = search(&records, &query, result_limit);

    debug!(
        sequence,
        records = records.len(),
        results = items.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "search completed"
    );

    SearchResult { items, sequence }
}
