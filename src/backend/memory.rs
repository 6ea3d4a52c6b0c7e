//! In-memory [`KvBackend`], used by this crate's own test suite and
//! available to callers who want a self-contained engine without a running
//! server. Not a mock: it implements the same byte-lex ordering and
//! missing-marker semantics the contract requires, just in-process.

use std::collections::{BTreeSet, HashMap};

use super::{BackendError, KvBackend};

/// A process-local store backing one or more collections.
///
/// Both tables use `BTreeSet` even for the nominally "unordered" sets: a
/// real backend gives no iteration-order guarantee there, but a
/// deterministic test double is strictly more useful than one that
/// reproduces that non-determinism.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    sets: HashMap<String, BTreeSet<String>>,
    zsets: HashMap<String, BTreeSet<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

fn clamp_range(len: usize, start: i64, stop: i64) -> Option<(usize, usize)> {
    if len == 0 {
        return None;
    }
    let len = len as i64;
    let normalize = |i: i64| if i < 0 { len + i } else { i };
    let start = normalize(start).max(0);
    let stop = normalize(stop).min(len - 1);
    if start > stop || start >= len {
        None
    } else {
        Some((start as usize, stop as usize))
    }
}

impl KvBackend for MemoryBackend {
    fn set_add(&mut self, key: &str, members: &[&str]) -> Result<u64, BackendError> {
        let set = self.sets.entry(key.to_string()).or_default();
        let mut added = 0;
        for member in members {
            if set.insert((*member).to_string()) {
                added += 1;
            }
        }
        Ok(added)
    }

    fn set_rem(&mut self, key: &str, members: &[&str]) -> Result<u64, BackendError> {
        let Some(set) = self.sets.get_mut(key) else {
            return Ok(0);
        };
        let mut removed = 0;
        for member in members {
            if set.remove(*member) {
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn set_card(&mut self, key: &str) -> Result<u64, BackendError> {
        Ok(self.sets.get(key).map_or(0, |s| s.len() as u64))
    }

    fn set_is_member(&mut self, key: &str, member: &str) -> Result<bool, BackendError> {
        Ok(self.sets.get(key).is_some_and(|s| s.contains(member)))
    }

    fn set_members(&mut self, key: &str) -> Result<Vec<String>, BackendError> {
        Ok(self
            .sets
            .get(key)
            .map(|s| s.iter().cloned().collect())
            .unwrap_or_default())
    }

    fn del(&mut self, key: &str) -> Result<u64, BackendError> {
        let mut removed = 0;
        if self.sets.remove(key).is_some() {
            removed += 1;
        }
        if self.zsets.remove(key).is_some() {
            removed += 1;
        }
        Ok(removed)
    }

    fn zadd(&mut self, key: &str, member: &str) -> Result<u64, BackendError> {
        let set = self.zsets.entry(key.to_string()).or_default();
        Ok(if set.insert(member.to_string()) { 1 } else { 0 })
    }

    fn zrem(&mut self, key: &str, member: &str) -> Result<u64, BackendError> {
        let Some(set) = self.zsets.get_mut(key) else {
            return Ok(0);
        };
        Ok(if set.remove(member) { 1 } else { 0 })
    }

    fn zcard(&mut self, key: &str) -> Result<u64, BackendError> {
        Ok(self.zsets.get(key).map_or(0, |s| s.len() as u64))
    }

    fn zscore(&mut self, key: &str, member: &str) -> Result<Option<f64>, BackendError> {
        Ok(self
            .zsets
            .get(key)
            .filter(|s| s.contains(member))
            .map(|_| 0.0))
    }

    fn zrank(&mut self, key: &str, member: &str) -> Result<Option<u64>, BackendError> {
        Ok(self
            .zsets
            .get(key)
            .and_then(|s| s.iter().position(|m| m == member))
            .map(|pos| pos as u64))
    }

    fn zrange(&mut self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, BackendError> {
        let Some(set) = self.zsets.get(key) else {
            return Ok(Vec::new());
        };
        let Some((start, stop)) = clamp_range(set.len(), start, stop) else {
            return Ok(Vec::new());
        };
        Ok(set
            .iter()
            .skip(start)
            .take(stop - start + 1)
            .cloned()
            .collect())
    }

    fn close(&mut self) -> Result<(), BackendError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zrange_supports_negative_indices() {
        let mut backend = MemoryBackend::new();
        backend.zadd("z", "a").unwrap();
        backend.zadd("z", "b").unwrap();
        backend.zadd("z", "c").unwrap();
        assert_eq!(
            backend.zrange("z", 0, -1).unwrap(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert_eq!(backend.zrange("z", -1, -1).unwrap(), vec!["c".to_string()]);
    }

    #[test]
    fn zscore_and_zrank_report_missing_as_none() {
        let mut backend = MemoryBackend::new();
        backend.zadd("z", "a").unwrap();
        assert_eq!(backend.zscore("z", "missing").unwrap(), None);
        assert_eq!(backend.zrank("z", "missing").unwrap(), None);
        assert_eq!(backend.zrank("missing-key", "a").unwrap(), None);
    }

    #[test]
    fn set_add_reports_only_newly_inserted_count() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.set_add("s", &["a", "b"]).unwrap(), 2);
        assert_eq!(backend.set_add("s", &["a", "c"]).unwrap(), 1);
    }
}
