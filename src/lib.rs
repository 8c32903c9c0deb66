//! cloudinit-supplier library
//!
//! Composes the cloud-init payload a VM receives at first boot: a fixed
//! startup document embedding a hostname, a region, and a secret credential
//! from a configuration store, base64-encoded and classified sensitive.
//!
//! The secret credential is not available synchronously. It arrives as a
//! [`Deferred`] value; [`Supplier::compose`] attaches a render-and-encode
//! transform to it and returns a new deferred payload immediately, without
//! blocking. Secrecy is one-way: the token is only ever touched inside
//! [`Sensitive::map`], so everything derived from it stays classified.
//!
//! # Example
//!
//! ```
//! use cloudinit_supplier::{Scope, StackConfig, Supplier};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), cloudinit_supplier::SupplierError> {
//! let config = StackConfig::new()
//!     .with_value("project:thing.address", "http://example.com")
//!     .with_value("project:thing.token", "secret_secret");
//!
//! let supplier = Supplier::new(&config, Scope::new("project"))?;
//! let payload = supplier.compose("region-1", "greatest-host-ever");
//!
//! // `payload` is deferred and secret-classified; the provisioning layer
//! // awaits it and hands the base64 text to the VM.
//! let payload = payload.await?;
//! assert!(!payload.expose().is_empty());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod deferred;
pub mod secret;
pub mod template;

mod error;
mod supplier;

pub use config::{ConfigProvider, Scope, StackConfig};
pub use deferred::{Deferred, ResolveError, Resolver};
pub use error::SupplierError;
pub use secret::Sensitive;
pub use supplier::Supplier;
