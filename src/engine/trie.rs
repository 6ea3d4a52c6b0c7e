//! Trie maintainer (§4.2): Add inserts per-prefix nodes; Remove prunes dead
//! branches using the lex-adjacency test on `N:prefix`.

use crate::backend::{BackendError, KvBackend};
use crate::engine::output;
use crate::keys;

/// Inserts `keyword` into the dictionary and materializes any trie nodes it
/// introduces. Returns `1` if the keyword was newly added, `0` if it was
/// already present (§3 lifecycle, P4).
pub(crate) fn add(
    backend: &mut impl KvBackend,
    name: &str,
    keyword: &str,
) -> Result<u64, BackendError> {
    let keyword_key = keys::keyword_key(name);
    let added = backend.set_add(&keyword_key, &[keyword])?;
    build(backend, name, keyword)?;
    Ok(added)
}

fn build(backend: &mut impl KvBackend, name: &str, keyword: &str) -> Result<(), BackendError> {
    let prefix_key = keys::prefix_key(name);
    let suffix_key = keys::suffix_key(name);
    let keyword_key = keys::keyword_key(name);

    let chars: Vec<char> = keyword.chars().collect();
    for i in 1..=chars.len() {
        let p: String = chars[..i].iter().collect();
        let s: String = p.chars().rev().collect();

        if backend.zscore(&prefix_key, &p)?.is_none() {
            backend.zadd(&prefix_key, &p)?;
            backend.zadd(&suffix_key, &s)?;
            output::rebuild(backend, name, &s)?;
        } else if backend.set_is_member(&keyword_key, &p)? {
            // `p` was already a node; if it's also an accepting keyword
            // (including `p == keyword` on a re-add), re-derive outputs for
            // the subtree that were not previously accepting.
            output::rebuild(backend, name, &s)?;
        }
    }
    Ok(())
}

/// Removes `keyword` from the dictionary, strips it from every dependent
/// output set, and prunes the trie spine it leaves unused. Returns the
/// resulting dictionary size.
pub(crate) fn remove(
    backend: &mut impl KvBackend,
    name: &str,
    keyword: &str,
) -> Result<u64, BackendError> {
    strip_outputs(backend, keyword)?;
    prune_spine(backend, name, keyword)?;

    let keyword_key = keys::keyword_key(name);
    backend.set_rem(&keyword_key, &[keyword])?;
    backend.set_card(&keyword_key)
}

fn strip_outputs(backend: &mut impl KvBackend, keyword: &str) -> Result<(), BackendError> {
    let node_key = keys::node_key(keyword);
    for node in backend.set_members(&node_key)? {
        backend.set_rem(&keys::output_key(&node), &[keyword])?;
    }
    backend.del(&node_key)?;
    Ok(())
}

fn prune_spine(backend: &mut impl KvBackend, name: &str, keyword: &str) -> Result<(), BackendError> {
    let prefix_key = keys::prefix_key(name);
    let suffix_key = keys::suffix_key(name);
    let keyword_key = keys::keyword_key(name);

    let chars: Vec<char> = keyword.chars().collect();
    let len = chars.len();

    for i in (0..=len).rev() {
        let p: String = chars[..i].iter().collect();
        let s: String = p.chars().rev().collect();

        // The root persists for the collection's lifetime (§3 lifecycle);
        // never prune it, even when it has no other descendant left.
        if p.is_empty() {
            break;
        }

        if i != len && backend.set_is_member(&keyword_key, &p)? {
            // `p` is still an accepting node owned by another keyword; no
            // shorter ancestor may be pruned either.
            break;
        }

        let Some(rank) = backend.zrank(&prefix_key, &p)? else {
            break;
        };

        let next = backend.zrange(&prefix_key, rank as i64 + 1, rank as i64 + 1)?;
        let has_descendant = next.first().is_some_and(|n| n.starts_with(&p));
        if has_descendant {
            break;
        }

        backend.zrem(&prefix_key, &p)?;
        backend.zrem(&suffix_key, &s)?;
    }
    Ok(())
}
