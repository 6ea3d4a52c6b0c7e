//! Output maintainer (§4.4): on node creation, propagates output sets down
//! the failure chain that newly reaches a keyword-accepting node.

use crate::backend::{BackendError, KvBackend};
use crate::engine::oracle;
use crate::keys;

/// Driven by the reversed label `s = reverse(p)` of a node `p` that has just
/// become (re)declared accepting-reachable. Enumerates every existing node
/// whose label ends with `p` — every `s' ∈ N:suffix` with `s'` starting with
/// `s` — via one contiguous lex-range scan.
pub(crate) fn rebuild(
    backend: &mut impl KvBackend,
    name: &str,
    s: &str,
) -> Result<(), BackendError> {
    let suffix_key = keys::suffix_key(name);
    let Some(mut rank) = backend.zrank(&suffix_key, s)? else {
        return Ok(());
    };

    loop {
        let Some(candidate) = backend.zrange(&suffix_key, rank as i64, rank as i64)?.pop() else {
            break;
        };
        if !candidate.starts_with(s) {
            break;
        }
        let state: String = candidate.chars().rev().collect();
        build(backend, name, &state)?;
        rank += 1;
    }
    Ok(())
}

/// Recomputes `outputs(state) = ({state} ∩ N:keyword) ∪ output(fail(state))`
/// and, if non-empty, accumulates it into `state:output` and the reverse
/// index `w:node` for each emitted keyword `w` (never resets existing
/// entries — see §4.4).
fn build(backend: &mut impl KvBackend, name: &str, state: &str) -> Result<(), BackendError> {
    let keyword_key = keys::keyword_key(name);
    let mut outputs = Vec::new();

    if backend.set_is_member(&keyword_key, state)? {
        outputs.push(state.to_string());
    }

    let prefix_key = keys::prefix_key(name);
    let fail_state = oracle::fail(backend, &prefix_key, state)?;
    outputs.extend(backend.set_members(&keys::output_key(&fail_state))?);

    if outputs.is_empty() {
        return Ok(());
    }

    let output_key = keys::output_key(state);
    let refs: Vec<&str> = outputs.iter().map(String::as_str).collect();
    backend.set_add(&output_key, &refs)?;

    for keyword in &outputs {
        backend.set_add(&keys::node_key(keyword), &[state])?;
    }
    Ok(())
}
