//! Scanner (§4.5): single pass over canonicalized input text.

use crate::backend::{BackendError, KvBackend};
use crate::engine::oracle;
use crate::keys;

/// Runs the matching loop over `text`, returning every output emitted along
/// the way, in emission order, with duplicates preserved.
pub(crate) fn find(
    backend: &mut impl KvBackend,
    name: &str,
    text: &str,
) -> Result<Vec<String>, BackendError> {
    let prefix_key = keys::prefix_key(name);
    let mut state = String::new();
    let mut matched = Vec::new();

    for c in text.chars() {
        matched.extend(backend.set_members(&keys::output_key(&state))?);
        state = transition(backend, &prefix_key, &state, c)?;
    }
    matched.extend(backend.set_members(&keys::output_key(&state))?);
    Ok(matched)
}

/// One step of the automaton. Falls back to a single additional `fail` hop
/// rather than looping to the root — faithful to the observed reference
/// behavior (§4.5, §9).
fn transition(
    backend: &mut impl KvBackend,
    prefix_key: &str,
    state: &str,
    c: char,
) -> Result<String, BackendError> {
    if let Some(next) = oracle::go(backend, prefix_key, state, c)? {
        return Ok(next);
    }

    let fail_state = oracle::fail(backend, prefix_key, state)?;
    if let Some(next) = oracle::go(backend, prefix_key, &fail_state, c)? {
        return Ok(next);
    }

    let mut probe = fail_state;
    probe.push(c);
    oracle::fail(backend, prefix_key, &probe)
}
