use thiserror::Error;

/// Failures surfaced by a [`DocumentStore`](crate::store::DocumentStore).
///
/// Driver errors are wrapped, not translated, so the underlying diagnostic
/// reaches whoever terminates the run.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Counter '{0}' disappeared before it could be incremented")]
    MissingCounter(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
