//! Goto / fail oracle (§4.3). Pure queries against `N:prefix`; no writes.

use crate::backend::{BackendError, KvBackend};

/// `go(state, c)`: the trie child transition, or `None` when undefined.
/// Undefined means exactly that — never implicitly the root.
pub(crate) fn go(
    backend: &mut impl KvBackend,
    prefix_key: &str,
    state: &str,
    c: char,
) -> Result<Option<String>, BackendError> {
    let mut next = String::with_capacity(state.len() + c.len_utf8());
    next.push_str(state);
    next.push(c);
    Ok(if backend.zscore(prefix_key, &next)?.is_some() {
        Some(next)
    } else {
        None
    })
}

/// `fail(state)`: the longest proper suffix of `state` that is itself a
/// node, or `""` (root) if none. Total over all inputs, since the root is
/// always a node.
pub(crate) fn fail(
    backend: &mut impl KvBackend,
    prefix_key: &str,
    state: &str,
) -> Result<String, BackendError> {
    let chars: Vec<char> = state.chars().collect();
    for idx in 1..=chars.len() {
        let candidate: String = chars[idx..].iter().collect();
        if backend.zscore(prefix_key, &candidate)?.is_some() {
            return Ok(candidate);
        }
    }
    Ok(String::new())
}
