use crate::{dto::output, error::Error};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminNotificationsService: Send + Sync {
    ///
    /// Read the admin notification feed
    ///
    /// ### Returns
    /// [output::AdminNotificationFeed] with records in store order
    /// and the derived number of unread records
    ///
    async fn find_notifications(&self) -> Result<output::AdminNotificationFeed, Error>;

    ///
    /// Mark a single record as read.
    /// Marking an already read record again is a no-op
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when record with id does not exist
    ///
    async fn mark_read(&self, id: ObjectId) -> Result<(), Error>;

    ///
    /// Mark every record in the feed as read.
    ///
    /// Updates are issued concurrently and every record is attempted
    /// even when earlier updates fail. On failure some records may
    /// stay unread, only the aggregate outcome is reported
    ///
    async fn mark_all_read(&self) -> Result<(), Error>;
}
