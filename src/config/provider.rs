//! Configuration providers
//!
//! A provider resolves fully-qualified keys (`<scope>:<name>`). Plain values
//! come back synchronously; secret values come back as deferred handles that
//! are already secret-classified, so a provider cannot accidentally hand out
//! a plain token.

use std::collections::HashMap;

use crate::SupplierError;
use crate::deferred::Deferred;
use crate::secret::Sensitive;

/// Source of configuration values
///
/// Both operations signal an absent key with
/// [`SupplierError::MissingConfiguration`]; required keys have no fallback.
pub trait ConfigProvider: Send + Sync {
    /// Look up a required plain value
    fn require(&self, key: &str) -> Result<String, SupplierError>;

    /// Look up a required secret value as a deferred, secret-classified handle
    ///
    /// The key must be present for this call to succeed, but the value itself
    /// may resolve later; implementations backed by remote stores return
    /// genuinely pending deferreds.
    fn require_secret(&self, key: &str) -> Result<Deferred<Sensitive<String>>, SupplierError>;
}

/// In-memory configuration, keyed by fully-qualified names
///
/// Backs tests and embedders that already hold their configuration in
/// memory. Secrets resolve immediately.
///
/// # Example
/// ```
/// use cloudinit_supplier::config::StackConfig;
///
/// let config = StackConfig::new()
///     .with_value("project:thing.address", "http://example.com")
///     .with_value("project:thing.token", "secret_secret");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StackConfig {
    values: HashMap<String, String>,
}

impl StackConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value for a fully-qualified key
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    fn lookup(&self, key: &str) -> Result<String, SupplierError> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| SupplierError::missing(key))
    }
}

impl ConfigProvider for StackConfig {
    fn require(&self, key: &str) -> Result<String, SupplierError> {
        self.lookup(key)
    }

    fn require_secret(&self, key: &str) -> Result<Deferred<Sensitive<String>>, SupplierError> {
        let value = self.lookup(key)?;
        Ok(Deferred::ready(Sensitive::new(value)))
    }
}
