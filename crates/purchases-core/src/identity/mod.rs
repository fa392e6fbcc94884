//! Identity management for the purchases SDK
//!
//! Tracks exactly one current app user ID per SDK instance:
//! 1. Anonymous identity - generated `$RCAnonymousID:` + 32 hex chars
//! 2. Identified identity - any application-supplied string
//! 3. Legacy identity - older-format anonymous ID migrated in once
//!
//! The [`IdentityManager`] owns the state transitions; the device cache,
//! subscriber-attribute cache, and backend are injected through traits.

// Module declarations
pub mod app_user_id;
pub mod attribution;
pub mod backend;
pub mod caching;
pub mod manager;

// Re-export commonly used types
pub use app_user_id::{AppUserId, ANONYMOUS_ID_PREFIX};
pub use attribution::{
    InMemorySubscriberAttributesCache, SubscriberAttribute, SubscriberAttributesCache,
};
pub use backend::Backend;
pub use caching::{DeviceCache, InMemoryDeviceCache};
pub use manager::IdentityManager;
