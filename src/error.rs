/// Failure taxonomy for a reconciliation run.
///
/// Transport failures are retried inside the Fetcher before they escalate;
/// everything else is fatal on first occurrence. Every variant is logged
/// before the run terminates.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Network or HTTP failure during fetch, after the retry budget
    /// was exhausted.
    #[error("fetch failed after {attempts} attempts: {source}")]
    Transport {
        attempts: usize,
        #[source]
        source: reqwest::Error,
    },

    /// A raw record is missing a required field. The remote payload broke
    /// its data contract, so the run aborts rather than guessing.
    #[error("malformed record: missing field '{field}'")]
    Malformed { field: &'static str },

    /// Connect or upsert failure at the persistence layer. Never retried;
    /// the next scheduled run is the retry.
    #[error("persistence error: {0}")]
    Persistence(#[from] tokio_postgres::Error),
}

pub type Result<T> = std::result::Result<T, SyncError>;

impl SyncError {
    /// True for errors the binary should re-raise to its caller rather
    /// than swallow after logging.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
