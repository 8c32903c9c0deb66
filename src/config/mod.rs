//! Configuration lookup for the supplier
//!
//! Configuration keys live under a named scope and are addressed as
//! `<scope>:<name>`. Providers hand plain values back synchronously and
//! secret values as deferred, secret-classified handles.

pub mod provider;

pub use provider::{ConfigProvider, StackConfig};

/// A configuration namespace (e.g., a service or project name)
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope(String);

impl Scope {
    /// Create a scope for the given namespace
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The namespace name
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Build the full lookup key for a name under this scope
    pub fn key(&self, name: &str) -> String {
        format!("{}:{}", self.0, name)
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_key_prefixes_namespace() {
        let scope = Scope::new("sample");
        assert_eq!(scope.key("thing.token"), "sample:thing.token");
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(Scope::new("project").to_string(), "project");
    }
}
