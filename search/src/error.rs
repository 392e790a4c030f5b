use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("failed to spawn search worker: {0}")]
    WorkerSpawn(#[from] std::io::Error),

    #[error("search worker is no longer running")]
    WorkerUnavailable,
}
