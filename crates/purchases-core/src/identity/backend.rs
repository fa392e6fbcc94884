//! Backend client contract for identity operations

use async_trait::async_trait;

use crate::errors::Result;

/// Remote backend operations needed by the identity manager.
///
/// The alias call is the only operation that may suspend. The returned
/// future resolves exactly once with either success or the backend's
/// error, and may complete on any thread the client chooses; retry
/// policy and timeouts are the client's responsibility.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Link `current_app_user_id` to `new_app_user_id` on the backend so
    /// purchase history made under the current (typically anonymous)
    /// identity becomes visible under the new one.
    ///
    /// Errors are propagated unchanged to the caller of
    /// [`IdentityManager::create_alias`](crate::IdentityManager::create_alias).
    async fn create_alias(&self, current_app_user_id: &str, new_app_user_id: &str) -> Result<()>;
}
