use crate::{dto::ServiceType, repository};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserNotificationsRepository: Send + Sync {
    ///
    /// Inserts a notification addressed to a single user.
    /// The document id is generated client side and written into the
    /// record's own `id` field within the same insert, so the stored
    /// `id` always equals the storage identifier.
    ///
    /// ### Returns
    /// Hex of the assigned document id
    ///
    async fn insert(
        &self,
        user_id: &str,
        text: &str,
        service_type: Option<ServiceType>,
        sent_at: &str,
    ) -> Result<String, repository::Error>;
}
