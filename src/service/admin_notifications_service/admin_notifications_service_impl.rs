use super::AdminNotificationsService;
use crate::{
    dto::output,
    error::Error,
    repository::{self, AdminNotificationsRepository},
};
use axum::async_trait;
use bson::oid::ObjectId;
use futures_util::future;
use std::sync::Arc;

pub struct AdminNotificationsServiceImpl {
    repository: Arc<dyn AdminNotificationsRepository>,
}

impl AdminNotificationsServiceImpl {
    pub fn new(repository: Arc<dyn AdminNotificationsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AdminNotificationsService for AdminNotificationsServiceImpl {
    async fn find_notifications(&self) -> Result<output::AdminNotificationFeed, Error> {
        tracing::info!("finding admin notifications");

        let notifications = self.repository.find_all().await?;
        tracing::info!(count = notifications.len(), "found notifications");

        let unread_count = notifications
            .iter()
            .filter(|notification| !notification.read)
            .count();
        let notifications = notifications
            .into_iter()
            .map(output::AdminNotification::from)
            .collect();

        Ok(output::AdminNotificationFeed {
            notifications,
            unread_count,
        })
    }

    async fn mark_read(&self, id: ObjectId) -> Result<(), Error> {
        tracing::info!("marking notification as read");

        self.repository
            .update_read(id)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::NotificationNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!("marked notification as read");

        Ok(())
    }

    async fn mark_all_read(&self) -> Result<(), Error> {
        tracing::info!("marking all notifications as read");

        let notifications = self.repository.find_all().await?;

        let updates = notifications
            .iter()
            .map(|notification| self.repository.update_read(notification.id));

        let mut failed = 0_usize;
        let mut first_err = None;
        for update_result in future::join_all(updates).await {
            if let Err(err) = update_result {
                failed += 1;
                first_err.get_or_insert(err);
            }
        }

        if let Some(err) = first_err {
            tracing::warn!(
                failed,
                count = notifications.len(),
                "some notifications were not marked as read"
            );
            return Err(Error::Database(err));
        }

        tracing::info!(count = notifications.len(), "marked all notifications as read");

        Ok(())
    }
}
