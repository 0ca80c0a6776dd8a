/// Failure fetching one schedule page over HTTP.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),
}

/// Failure turning one page's HTML into a table.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("missing element: {0}")]
    MissingElement(&'static str),
}

/// Per-job failure: either side of the fetch -> parse pipeline.
/// Captured into the result set, never raised across the pool.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Pool-level failure joining worker tasks. Reported once per batch
/// at the driver; does not terminate the process.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
