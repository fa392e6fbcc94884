//! Subscriber attribute cache abstraction
//!
//! Subscriber attributes are per-user key-value pairs set by the host app
//! and synced to the backend in the background. The identity manager only
//! needs two housekeeping operations: a non-destructive cleanup run on
//! every configure, and a destructive clear run when the active identity
//! changes.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

// ----------------------------------------------------------------------------
// Attribute Value
// ----------------------------------------------------------------------------

/// A single subscriber attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberAttribute {
    /// Attribute key, e.g. `$email`.
    pub key: String,
    /// Attribute value. `None` represents a deletion pending sync.
    pub value: Option<String>,
    /// Whether this value has been synced to the backend.
    pub is_synced: bool,
}

impl SubscriberAttribute {
    /// Create an unsynced attribute.
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
            is_synced: false,
        }
    }

    /// Mark this attribute as synced to the backend.
    pub fn mark_synced(mut self) -> Self {
        self.is_synced = true;
        self
    }
}

// ----------------------------------------------------------------------------
// Cache Trait
// ----------------------------------------------------------------------------

/// Per-user subscriber attribute storage consumed by the identity manager.
pub trait SubscriberAttributesCache: Send + Sync {
    /// Idempotent housekeeping, invoked on every configure with the
    /// resolved current app user ID. Discards synced attributes that
    /// belong to other users; unsynced attributes are kept so a later
    /// sync can still deliver them.
    fn clean_up_subscriber_attribute_cache(&self, app_user_id: &str);

    /// Destructive clear for an identity switch or reset. Drops the
    /// attributes of `app_user_id` only if every one of them has already
    /// been synced; unsynced attributes survive.
    fn clear_subscriber_attributes_if_synced(&self, app_user_id: &str);
}

// ----------------------------------------------------------------------------
// In-Memory Implementation
// ----------------------------------------------------------------------------

/// In-memory subscriber attribute cache for embedding and testing.
#[derive(Debug, Default)]
pub struct InMemorySubscriberAttributesCache {
    attributes: Mutex<HashMap<String, HashMap<String, SubscriberAttribute>>>,
}

impl InMemorySubscriberAttributesCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an attribute for a user.
    pub fn set_attribute(&self, app_user_id: &str, attribute: SubscriberAttribute) {
        let mut attributes = self.attributes.lock().unwrap();
        attributes
            .entry(app_user_id.to_string())
            .or_default()
            .insert(attribute.key.clone(), attribute);
    }

    /// All attributes currently stored for a user.
    pub fn attributes_for(&self, app_user_id: &str) -> Vec<SubscriberAttribute> {
        let attributes = self.attributes.lock().unwrap();
        attributes
            .get(app_user_id)
            .map(|per_user| per_user.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of unsynced attributes for a user.
    pub fn unsynced_count_for(&self, app_user_id: &str) -> usize {
        let attributes = self.attributes.lock().unwrap();
        attributes
            .get(app_user_id)
            .map(|per_user| per_user.values().filter(|a| !a.is_synced).count())
            .unwrap_or(0)
    }
}

impl SubscriberAttributesCache for InMemorySubscriberAttributesCache {
    fn clean_up_subscriber_attribute_cache(&self, app_user_id: &str) {
        let mut attributes = self.attributes.lock().unwrap();
        for (user, per_user) in attributes.iter_mut() {
            if user != app_user_id {
                per_user.retain(|_, attribute| !attribute.is_synced);
            }
        }
        attributes.retain(|_, per_user| !per_user.is_empty());
    }

    fn clear_subscriber_attributes_if_synced(&self, app_user_id: &str) {
        let mut attributes = self.attributes.lock().unwrap();
        let fully_synced = attributes
            .get(app_user_id)
            .map(|per_user| per_user.values().all(|a| a.is_synced))
            .unwrap_or(false);
        if fully_synced {
            attributes.remove(app_user_id);
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
