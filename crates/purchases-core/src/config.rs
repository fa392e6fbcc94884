//! SDK configuration consumed at startup
//!
//! Hosts build a [`PurchasesConfig`] and hand its optional app user ID to
//! [`IdentityManager::configure`](crate::IdentityManager::configure). The
//! cache namespace scopes device-cache keys so multiple SDK instances on
//! one device do not collide.

/// Configuration for a purchases SDK instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchasesConfig {
    /// Application-supplied app user ID, if the host already knows who
    /// the user is at startup. `None` requests an anonymous identity.
    pub app_user_id: Option<String>,
    /// Namespace prefix for device-cache keys. Typically derived from
    /// the API key so caches from different apps stay separate.
    pub cache_namespace: Option<String>,
}

impl PurchasesConfig {
    /// Create an empty configuration (anonymous identity, default namespace).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the application-supplied app user ID.
    pub fn with_app_user_id(mut self, app_user_id: impl Into<String>) -> Self {
        self.app_user_id = Some(app_user_id.into());
        self
    }

    /// Set the device-cache key namespace.
    pub fn with_cache_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.cache_namespace = Some(namespace.into());
        self
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
