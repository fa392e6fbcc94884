//! Device cache abstraction for identity data
//!
//! The device cache is the sole durable store for the current app user ID
//! and for per-user purchase data (purchaser info, offerings). Hosts
//! supply a platform-backed implementation; [`InMemoryDeviceCache`] is the
//! reference implementation used for embedding and tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

// ----------------------------------------------------------------------------
// Device Cache Trait
// ----------------------------------------------------------------------------

/// Key-value device cache consumed by the identity manager.
///
/// Operations are non-failing at this layer; a host implementation that
/// can fail should handle or surface that internally.
pub trait DeviceCache: Send + Sync {
    /// The current app user ID, if one has been cached.
    fn cached_app_user_id(&self) -> Option<String>;

    /// A legacy-format app user ID left behind by an older SDK version.
    fn legacy_cached_app_user_id(&self) -> Option<String>;

    /// Persist `app_user_id` as the current identity.
    fn cache_app_user_id(&self, app_user_id: &str);

    /// Drop all cached purchase data for the current app user ID,
    /// including the cached ID itself.
    fn clear_caches_for_app_user_id(&self);
}

// ----------------------------------------------------------------------------
// In-Memory Implementation
// ----------------------------------------------------------------------------

const APP_USER_ID_KEY: &str = "appUserID";
const LEGACY_APP_USER_ID_KEY: &str = "appUserID.old";
const PURCHASER_INFO_KEY: &str = "purchaserInfo";

/// In-memory device cache for embedding and testing.
///
/// Keys are scoped by a namespace (typically derived from the API key) so
/// caches from different SDK instances stay separate.
#[derive(Debug)]
pub struct InMemoryDeviceCache {
    namespace: String,
    values: Mutex<BTreeMap<String, String>>,
}

impl InMemoryDeviceCache {
    /// Create a cache with the default namespace.
    pub fn new() -> Self {
        Self::with_namespace("com.purchases.default")
    }

    /// Create a cache whose keys are prefixed with `namespace`.
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            values: Mutex::new(BTreeMap::new()),
        }
    }

    /// Seed a legacy app user ID, as an older SDK version would have
    /// left it. Intended for migration scenarios and tests.
    pub fn seed_legacy_app_user_id(&self, app_user_id: &str) {
        let mut values = self.values.lock().unwrap();
        values.insert(self.key(LEGACY_APP_USER_ID_KEY), app_user_id.to_string());
    }

    /// Store purchaser data for the current user. Cleared alongside the
    /// app user ID on identity switches.
    pub fn cache_purchaser_info(&self, payload: &str) {
        let mut values = self.values.lock().unwrap();
        values.insert(self.key(PURCHASER_INFO_KEY), payload.to_string());
    }

    /// Cached purchaser data, if any.
    pub fn cached_purchaser_info(&self) -> Option<String> {
        let values = self.values.lock().unwrap();
        values.get(&self.key(PURCHASER_INFO_KEY)).cloned()
    }

    fn key(&self, suffix: &str) -> String {
        format!("{}.{}", self.namespace, suffix)
    }
}

impl Default for InMemoryDeviceCache {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceCache for InMemoryDeviceCache {
    fn cached_app_user_id(&self) -> Option<String> {
        let values = self.values.lock().unwrap();
        values.get(&self.key(APP_USER_ID_KEY)).cloned()
    }

    fn legacy_cached_app_user_id(&self) -> Option<String> {
        let values = self.values.lock().unwrap();
        values.get(&self.key(LEGACY_APP_USER_ID_KEY)).cloned()
    }

    fn cache_app_user_id(&self, app_user_id: &str) {
        let mut values = self.values.lock().unwrap();
        values.insert(self.key(APP_USER_ID_KEY), app_user_id.to_string());
    }

    fn clear_caches_for_app_user_id(&self) {
        let mut values = self.values.lock().unwrap();
        values.remove(&self.key(APP_USER_ID_KEY));
        values.remove(&self.key(PURCHASER_INFO_KEY));
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
