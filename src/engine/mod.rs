//! The engine: public Add/Remove/Find/Suggest/Info/Flush/Debug/Close
//! operations over a named keyword collection (§2).

mod oracle;
mod output;
mod scanner;
mod suggest;
mod trie;

use crate::backend::KvBackend;
use crate::canon::canonicalize;
use crate::config::CollectionName;
use crate::error::{Error, Result};
use crate::keys;

/// Result of [`Engine::info`] (§4.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Info {
    pub keywords: u64,
    pub nodes: u64,
}

/// Diagnostic dump of the five tables (§4.7). No contractual format; for
/// human inspection only.
#[derive(Debug, Clone, Default)]
pub struct Debug {
    pub keywords: Vec<String>,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub outputs: Vec<String>,
    pub nodes: Vec<String>,
}

/// One logical Aho-Corasick-over-KV instance, parameterized by a collection
/// name and a [`KvBackend`] handle (§2). Single-writer, multi-reader (§5).
pub struct Engine<B: KvBackend> {
    name: CollectionName,
    backend: Option<B>,
}

impl<B: KvBackend> Engine<B> {
    /// Opens the engine against `backend`, materializing the root node if
    /// this is the first use of `name` (§3 lifecycle).
    pub fn open(name: CollectionName, mut backend: B) -> Result<Self> {
        let prefix_key = keys::prefix_key(name.as_ref());
        if backend.zscore(&prefix_key, "")?.is_none() {
            backend.zadd(&prefix_key, "")?;
            // reverse("") == "", so the root's entry in `N:suffix` is itself
            // the empty label; keeping both in lock-step preserves I2.
            backend.zadd(&keys::suffix_key(name.as_ref()), "")?;
            log::debug!("acorkv[{}]: initialized root node", name.as_ref());
        }
        Ok(Self {
            name,
            backend: Some(backend),
        })
    }

    fn backend_mut(&mut self) -> Result<&mut B> {
        self.backend.as_mut().ok_or(Error::AlreadyClosed)
    }

    /// Adds `keyword` to the dictionary. Returns `1` if newly added, `0` if
    /// it was already present (§4.2, P4).
    pub fn add(&mut self, keyword: &str) -> Result<u64> {
        let keyword = canonicalize(keyword);
        let name = self.name.as_ref().to_string();
        let added = trie::add(self.backend_mut()?, &name, &keyword)?;
        log::debug!("acorkv[{name}]: add({keyword:?}) -> {added} newly added");
        Ok(added)
    }

    /// Removes `keyword` from the dictionary. Returns the resulting
    /// dictionary size (§4.2).
    pub fn remove(&mut self, keyword: &str) -> Result<u64> {
        let keyword = canonicalize(keyword);
        let name = self.name.as_ref().to_string();
        let remaining = trie::remove(self.backend_mut()?, &name, &keyword)?;
        log::debug!("acorkv[{name}]: remove({keyword:?}) -> {remaining} remaining");
        Ok(remaining)
    }

    /// Runs the matching loop over `text`, in emission order, duplicates
    /// preserved (§4.5, P2).
    pub fn find(&mut self, text: &str) -> Result<Vec<String>> {
        let text = canonicalize(text);
        let name = self.name.as_ref().to_string();
        let matched = scanner::find(self.backend_mut()?, &name, &text)?;
        log::debug!("acorkv[{name}]: find({text:?}) -> {} matches", matched.len());
        Ok(matched)
    }

    /// Prefix-autocompletes `input` against the stored keywords, in
    /// lex-ascending order. `input` is used raw, **not** canonicalized
    /// (§4.1, §4.6, §9).
    pub fn suggest(&mut self, input: &str) -> Result<Vec<String>> {
        let name = self.name.as_ref().to_string();
        Ok(suggest::suggest(self.backend_mut()?, &name, input)?)
    }

    /// Returns dictionary and node counts (§4.7).
    pub fn info(&mut self) -> Result<Info> {
        let name = self.name.as_ref().to_string();
        let backend = self.backend_mut()?;
        let keywords = backend.set_card(&keys::keyword_key(&name))?;
        let nodes = backend.zcard(&keys::prefix_key(&name))?;
        Ok(Info { keywords, nodes })
    }

    /// Tears down the collection's state entirely. The engine remains
    /// usable: a subsequent write re-materializes the root (§4.7).
    pub fn flush(&mut self) -> Result<()> {
        let name = self.name.as_ref().to_string();
        let backend = self.backend_mut()?;

        let keyword_key = keys::keyword_key(&name);
        for keyword in backend.set_members(&keyword_key)? {
            backend.del(&keys::output_key(&keyword))?;
            backend.del(&keys::node_key(&keyword))?;
        }
        backend.del(&keys::prefix_key(&name))?;
        backend.del(&keys::suffix_key(&name))?;
        backend.del(&keyword_key)?;

        log::debug!("acorkv[{name}]: flushed");
        Ok(())
    }

    /// Diagnostic dump of the five tables (§4.7). No contractual format.
    pub fn debug(&mut self) -> Result<Debug> {
        let name = self.name.as_ref().to_string();
        let backend = self.backend_mut()?;

        let keywords = backend.set_members(&keys::keyword_key(&name))?;
        let prefixes = backend.zrange(&keys::prefix_key(&name), 0, -1)?;
        let suffixes = backend.zrange(&keys::suffix_key(&name), 0, -1)?;

        let mut outputs = Vec::new();
        for label in &prefixes {
            outputs.extend(backend.set_members(&keys::output_key(label))?);
        }

        let mut nodes = Vec::new();
        for keyword in &keywords {
            nodes.extend(backend.set_members(&keys::node_key(keyword))?);
        }

        Ok(Debug {
            keywords,
            prefixes,
            suffixes,
            outputs,
            nodes,
        })
    }

    /// Closes the underlying backend handle. A second call reports
    /// [`Error::AlreadyClosed`] (§5 resource lifecycle).
    pub fn close(&mut self) -> Result<()> {
        let mut backend = self.backend.take().ok_or(Error::AlreadyClosed)?;
        Ok(backend.close()?)
    }
}
