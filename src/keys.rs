//! Builders for the namespaced keys described in §2 / §6.3 of the design.
//!
//! `N:keyword`, `N:prefix` and `N:suffix` are scoped by the collection name;
//! `<label>:output` and `<keyword>:node` are scoped by the label/keyword
//! itself, with no collection prefix — two collections sharing a backend
//! and a node label share that node's output key too.

pub(crate) fn keyword_key(name: &str) -> String {
    format!("{name}:keyword")
}

pub(crate) fn prefix_key(name: &str) -> String {
    format!("{name}:prefix")
}

pub(crate) fn suffix_key(name: &str) -> String {
    format!("{name}:suffix")
}

pub(crate) fn output_key(label: &str) -> String {
    format!("{label}:output")
}

pub(crate) fn node_key(keyword: &str) -> String {
    format!("{keyword}:node")
}
