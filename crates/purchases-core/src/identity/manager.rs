//! Identity state manager
//!
//! Central owner of the current app user ID. Resolves the identity at
//! startup, switches and aliases identities, and coordinates cache
//! invalidation so purchase data never leaks across users.

use std::sync::Arc;

use tracing::{debug, info};

use super::{AppUserId, Backend, DeviceCache, SubscriberAttributesCache};
use crate::errors::{PurchasesError, Result};

/// Manages the per-application end-user identity.
///
/// The device cache is the source of truth for the current app user ID;
/// the manager itself holds no identity state. Hosts are expected to
/// serialize identity transitions (a single dispatch queue or
/// equivalent); the manager performs no internal locking across the
/// backend suspension point.
pub struct IdentityManager {
    /// Durable store for the current app user ID and purchase data.
    device_cache: Arc<dyn DeviceCache>,
    /// Per-user attribute bookkeeping.
    subscriber_attributes_cache: Arc<dyn SubscriberAttributesCache>,
    /// Remote client for alias creation.
    backend: Arc<dyn Backend>,
}

impl IdentityManager {
    /// Create a manager over the injected collaborators.
    pub fn new(
        device_cache: Arc<dyn DeviceCache>,
        subscriber_attributes_cache: Arc<dyn SubscriberAttributesCache>,
        backend: Arc<dyn Backend>,
    ) -> Self {
        Self {
            device_cache,
            subscriber_attributes_cache,
            backend,
        }
    }

    // ------------------------------------------------------------------------
    // Startup
    // ------------------------------------------------------------------------

    /// Establish the current identity at SDK startup.
    ///
    /// Resolution order: an already-cached current ID wins; else an
    /// application-supplied ID; else a legacy ID migrated from an older
    /// SDK version; else a freshly generated anonymous ID. A supplied ID
    /// beats a legacy one, so migration never overrides an explicit
    /// identity. Always persists the resolved ID and runs attribute
    /// cache cleanup for it. Never touches the network.
    pub fn configure(&self, supplied_app_user_id: Option<&str>) -> AppUserId {
        let resolved = self
            .device_cache
            .cached_app_user_id()
            .map(AppUserId::from)
            .or_else(|| supplied_app_user_id.map(AppUserId::from))
            .or_else(|| {
                self.device_cache
                    .legacy_cached_app_user_id()
                    .map(AppUserId::from)
            })
            .unwrap_or_else(AppUserId::generate_anonymous);

        info!(app_user_id = %resolved, "identity configured");
        self.device_cache.cache_app_user_id(resolved.as_str());
        self.subscriber_attributes_cache
            .clean_up_subscriber_attribute_cache(resolved.as_str());
        resolved
    }

    // ------------------------------------------------------------------------
    // Identity Switches
    // ------------------------------------------------------------------------

    /// Switch the active identity to `new_app_user_id`.
    ///
    /// Switching to the ID that is already current is a successful no-op
    /// that re-persists it. Switching away from an anonymous identity is
    /// an aliasing event and routes through [`Self::create_alias`]; only
    /// that path reaches the backend. Switching between two identified
    /// users clears the old user's caches locally.
    pub async fn identify(&self, new_app_user_id: &str) -> Result<()> {
        let current = self.current_app_user_id();

        if current.as_ref().map(AppUserId::as_str) == Some(new_app_user_id) {
            debug!(app_user_id = new_app_user_id, "already identified");
            self.device_cache.cache_app_user_id(new_app_user_id);
            return Ok(());
        }

        if self.current_user_is_anonymous() {
            debug!(
                new_app_user_id,
                "identifying from anonymous user, creating alias"
            );
            return self.create_alias(new_app_user_id).await;
        }

        if let Some(old) = current {
            debug!(old_app_user_id = %old, new_app_user_id, "changing app user id");
            self.clear_caches_for(old.as_str());
        }
        self.device_cache.cache_app_user_id(new_app_user_id);
        Ok(())
    }

    /// Link the current identity to `new_app_user_id` on the backend,
    /// then switch to it.
    ///
    /// On success the old user's caches are cleared before the new ID is
    /// adopted, so no purchase data from the old identity is readable
    /// under the new one. On failure the backend's error is returned
    /// unchanged and no cache is mutated.
    pub async fn create_alias(&self, new_app_user_id: &str) -> Result<()> {
        let old_app_user_id = self.current_app_user_id().ok_or_else(|| {
            PurchasesError::invalid_app_user_id("cannot create an alias before configure")
        })?;

        debug!(
            current_app_user_id = %old_app_user_id,
            new_app_user_id,
            "creating alias"
        );
        self.backend
            .create_alias(old_app_user_id.as_str(), new_app_user_id)
            .await?;

        info!(new_app_user_id, "alias created, switching identity");
        self.clear_caches_for(old_app_user_id.as_str());
        self.device_cache.cache_app_user_id(new_app_user_id);
        Ok(())
    }

    /// Discard the current identity and return to a fresh anonymous one.
    pub fn reset(&self) -> AppUserId {
        if let Some(old) = self.current_app_user_id() {
            debug!(old_app_user_id = %old, "resetting identity");
            self.clear_caches_for(old.as_str());
        }
        let fresh = AppUserId::generate_anonymous();
        self.device_cache.cache_app_user_id(fresh.as_str());
        info!(app_user_id = %fresh, "reset to anonymous identity");
        fresh
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// The current app user ID, if one has been established.
    pub fn current_app_user_id(&self) -> Option<AppUserId> {
        self.device_cache.cached_app_user_id().map(AppUserId::from)
    }

    /// True iff the current identity is anonymous.
    ///
    /// Generated IDs are recognized by format; a migrated legacy ID is
    /// also anonymous even though it predates the current format, which
    /// is detected by comparing against the legacy cache slot.
    pub fn current_user_is_anonymous(&self) -> bool {
        let Some(current) = self.current_app_user_id() else {
            return false;
        };
        if current.is_anonymous() {
            return true;
        }
        self.device_cache.legacy_cached_app_user_id().as_deref() == Some(current.as_str())
    }

    // ------------------------------------------------------------------------
    // Private Methods
    // ------------------------------------------------------------------------

    /// Clear all cached purchase data for an outgoing user.
    fn clear_caches_for(&self, old_app_user_id: &str) {
        self.device_cache.clear_caches_for_app_user_id();
        self.subscriber_attributes_cache
            .clear_subscriber_attributes_if_synced(old_app_user_id);
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
