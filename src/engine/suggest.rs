//! Suggest (§4.6): raw-prefix autocompletion over `N:prefix`. Not run
//! through the canonicalizer — see §4.1, §9 for the asymmetry.

use crate::backend::{BackendError, KvBackend};
use crate::keys;

pub(crate) fn suggest(
    backend: &mut impl KvBackend,
    name: &str,
    input: &str,
) -> Result<Vec<String>, BackendError> {
    let prefix_key = keys::prefix_key(name);
    let keyword_key = keys::keyword_key(name);

    // A missing rank (input not itself a node) is treated as rank 0 and
    // scanned from the start — the observed, under-specified source
    // behavior (§9), not a `zrangebylex`-style exact prefix seek.
    let mut rank = backend.zrank(&prefix_key, input)?.unwrap_or(0);
    let mut results = Vec::new();

    loop {
        let Some(label) = backend.zrange(&prefix_key, rank as i64, rank as i64)?.pop() else {
            break;
        };
        if !label.starts_with(input) {
            break;
        }
        if backend.set_is_member(&keyword_key, &label)? {
            results.push(label);
        }
        rank += 1;
    }
    Ok(results)
}
