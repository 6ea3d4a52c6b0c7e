//! Incremental multi-pattern string matching built on the Aho–Corasick
//! construction, with all persistent state externalized to a remote
//! sorted/key-value store.
//!
//! Classical Aho–Corasick builds its goto/failure/output tables in one
//! offline pass over all patterns; [`Engine`] instead maintains them
//! in-place against a flat, external, sorted-string store — an ordered set
//! of trie-node labels, an ordered set of their reversed labels, a set of
//! accepting keywords, per-node output sets, and per-keyword reverse
//! indexes — one [`backend::KvBackend`] round-trip at a time, with no
//! in-memory graph.
//!
//! ```
//! use acorkv::{CollectionName, Engine, backend::memory::MemoryBackend};
//!
//! let name = CollectionName::try_new("demo").unwrap();
//! let mut engine = Engine::open(name, MemoryBackend::new()).unwrap();
//!
//! engine.add("he").unwrap();
//! engine.add("her").unwrap();
//! engine.add("his").unwrap();
//!
//! assert_eq!(engine.find("ushers").unwrap(), vec!["he", "her"]);
//! ```

pub mod backend;
mod canon;
pub mod config;
mod engine;
mod error;
mod keys;

pub use backend::{BackendError, KvBackend};
pub use config::{CollectionName, Config};
pub use engine::{Debug, Engine, Info};
pub use error::{Error, Result};
