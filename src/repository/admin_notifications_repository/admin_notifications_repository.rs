use super::AdminNotification;
use crate::repository;
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminNotificationsRepository: Send + Sync {
    ///
    /// Reads the whole admin notification collection.
    /// Order of the records is store assigned
    ///
    async fn find_all(&self) -> Result<Vec<AdminNotification>, repository::Error>;

    ///
    /// Sets `read` flag of the record
    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated]
    /// when record with id does not exist
    ///
    async fn update_read(&self, id: ObjectId) -> Result<(), repository::Error>;
}
