//! Secret-aware payload composition
//!
//! [`Supplier`] binds a configuration scope at construction and turns the
//! deferred secret token into a deferred, secret-classified cloud-init
//! payload on each [`Supplier::compose`] call.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::SupplierError;
use crate::config::{ConfigProvider, Scope};
use crate::deferred::Deferred;
use crate::secret::Sensitive;
use crate::template;

/// Composes cloud-init payloads for a single configuration scope
///
/// Holds the deferred secret token and the plain secondary value, both
/// fetched once at construction. Immutable afterwards, so concurrent
/// `compose` calls on one instance are safe.
#[derive(Debug)]
pub struct Supplier {
    scope: Scope,
    token: Deferred<Sensitive<String>>,
    address: String,
}

impl Supplier {
    /// Bind a supplier to a scope, fetching its configuration
    ///
    /// Requires `<scope>:thing.token` (secret) and `<scope>:thing.address`
    /// (plain); a missing key fails construction and is not recoverable here.
    pub fn new(provider: &dyn ConfigProvider, scope: Scope) -> Result<Self, SupplierError> {
        debug!(scope = %scope, "loading supplier configuration");

        let token = provider.require_secret(&scope.key("thing.token"))?;
        let address = provider.require(&scope.key("thing.address"))?;

        Ok(Self {
            scope,
            token,
            address,
        })
    }

    /// Compose the cloud-init payload for a VM
    ///
    /// Returns immediately with a deferred payload: once the token resolves,
    /// the document is rendered, base64-encoded, and exposed as a new
    /// secret-classified value. The token is only ever read inside
    /// [`Sensitive::map`], so the result is secret by construction. If the
    /// token never resolves, neither does the payload; an upstream failure
    /// passes through unmodified.
    pub fn compose(&self, region: &str, hostname: &str) -> Deferred<Sensitive<String>> {
        debug!(scope = %self.scope, %region, %hostname, "composing cloud-init payload");

        // Captured at call time; later compose calls see their own copies.
        let hostname = hostname.to_owned();
        let region = region.to_owned();
        let address = self.address.clone();

        self.token.clone().map(move |token| {
            token.map(|token| {
                let document = template::render(&hostname, &region, &token, &address);
                // Encode so transport cannot mangle the document.
                STANDARD.encode(document)
            })
        })
    }
}
