use thiserror::Error;

use crate::backend::BackendError;

pub type Result<T> = std::result::Result<T, Error>;

/// Top-level crate error: a small umbrella enum aggregating one error type
/// per collaborator.
#[derive(Debug, Error)]
pub enum Error {
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    /// Close on an engine that was already closed (§5 resource lifecycle).
    #[error("engine already closed")]
    AlreadyClosed,
}
