//! Purchases SDK identity core
//!
//! This crate manages the per-application end-user identity for a
//! purchase-tracking SDK: it assigns anonymous app user IDs, persists the
//! active ID in a device cache, migrates legacy IDs from older SDK
//! versions, aliases an anonymous identity into a known identity through
//! the backend, and invalidates per-user caches when the active identity
//! changes.
//!
//! The device cache, subscriber-attribute cache, and backend client are
//! consumed through narrow traits so hosts can supply their own
//! implementations; in-memory reference implementations are provided for
//! embedding and testing.

// ----------------------------------------------------------------------------
// Module Declarations
// ----------------------------------------------------------------------------

pub mod config;
pub mod errors;
pub mod identity;

// ----------------------------------------------------------------------------
// Public API
// ----------------------------------------------------------------------------

pub use config::PurchasesConfig;
pub use errors::{ErrorCode, PurchasesError, Result};
pub use identity::{
    AppUserId, Backend, DeviceCache, IdentityManager, InMemoryDeviceCache,
    InMemorySubscriberAttributesCache, SubscriberAttribute, SubscriberAttributesCache,
};
