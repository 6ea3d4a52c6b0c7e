//! The KV backend contract (§6.1): a narrow, lock-free trait the engine
//! drives with many small, unbatched round-trips. Two implementations ship
//! in this crate — [`redis::RedisBackend`] for a real sorted-set server and
//! [`memory::MemoryBackend`] for tests and dependency-free embedding.

pub mod memory;
pub mod redis;

pub mod error {
    use thiserror::Error;

    /// Failures surfaced from a [`super::KvBackend`] implementation.
    ///
    /// A missing key or member is never an error — backends report absence
    /// through `Option`/empty-collection return values instead (§7).
    #[derive(Debug, Error)]
    pub enum BackendError {
        #[error("backend unavailable: {0}")]
        Unavailable(String),

        #[error("backend protocol error: {0}")]
        Protocol(String),
    }
}

pub use error::BackendError;

/// Narrow interface over a remote sorted/key-value store.
///
/// Every method is one backend round-trip; the engine never batches or
/// pipelines (§5). Implementations are not required to be `Send`/`Sync` —
/// the engine itself is single-writer, multi-reader by contract, not by
/// internal locking.
pub trait KvBackend {
    // Unordered set.
    fn set_add(&mut self, key: &str, members: &[&str]) -> Result<u64, BackendError>;
    fn set_rem(&mut self, key: &str, members: &[&str]) -> Result<u64, BackendError>;
    fn set_card(&mut self, key: &str) -> Result<u64, BackendError>;
    fn set_is_member(&mut self, key: &str, member: &str) -> Result<bool, BackendError>;
    fn set_members(&mut self, key: &str) -> Result<Vec<String>, BackendError>;
    fn del(&mut self, key: &str) -> Result<u64, BackendError>;

    // Lexicographic ordered set. All members share an identical score;
    // ordering is byte-lex over the stored member.
    fn zadd(&mut self, key: &str, member: &str) -> Result<u64, BackendError>;
    fn zrem(&mut self, key: &str, member: &str) -> Result<u64, BackendError>;
    fn zcard(&mut self, key: &str) -> Result<u64, BackendError>;
    fn zscore(&mut self, key: &str, member: &str) -> Result<Option<f64>, BackendError>;
    fn zrank(&mut self, key: &str, member: &str) -> Result<Option<u64>, BackendError>;
    fn zrange(&mut self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, BackendError>;

    /// Releases the backend's own resources (sockets, file handles). Called
    /// exactly once by `Engine::close` (§5 resource lifecycle).
    fn close(&mut self) -> Result<(), BackendError>;
}
