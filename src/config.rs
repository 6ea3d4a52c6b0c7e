use nutype::nutype;

/// The namespace prefix isolating one engine's keys in the shared backend
/// (§6.2). Trimmed and required non-empty.
#[nutype(
    new_unchecked,
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, AsRef, Deref, Display)
)]
pub struct CollectionName(String);

/// Configuration record for one engine instance (§6.2). Deliberately plain:
/// persistence of configuration is an explicit non-goal (§1), so this type
/// carries no `serde`/`toml` surface.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend endpoint, e.g. `"localhost:6379"`.
    pub addr: String,
    /// Backend password; empty means no authentication.
    pub password: String,
    /// Backend partition index.
    pub db: i64,
    /// Collection name, also used as the key prefix.
    pub name: CollectionName,
    /// Enables verbose backend-level logging.
    pub debug: bool,
}

impl Config {
    pub fn new(addr: impl Into<String>, name: CollectionName) -> Self {
        Self {
            addr: addr.into(),
            password: String::new(),
            db: 0,
            name,
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_name_is_trimmed() {
        let name = CollectionName::try_new("  spam  ").unwrap();
        assert_eq!(name.as_ref(), "spam");
    }

    #[test]
    fn collection_name_rejects_empty() {
        assert!(CollectionName::try_new("   ").is_err());
    }
}
