//! Error types for cloudinit-supplier

use thiserror::Error;

use crate::deferred::ResolveError;

/// Main error type for cloudinit-supplier operations
#[derive(Error, Debug)]
pub enum SupplierError {
    /// A required configuration key was absent at construction time.
    ///
    /// Fatal for the caller; the supplier never catches it.
    #[error("missing required configuration key '{key}'")]
    MissingConfiguration { key: String },

    /// An upstream deferred value failed to resolve.
    #[error("resolution failed: {0}")]
    Resolution(#[from] ResolveError),
}

impl SupplierError {
    /// Create a missing-configuration error
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingConfiguration { key: key.into() }
    }
}
