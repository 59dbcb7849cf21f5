use super::{entity::AdminNotificationFindEntity, AdminNotification, AdminNotificationsRepository};
use crate::repository;
use axum::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures_util::TryStreamExt;
use mongodb::Database;

const ADMIN_NOTIFICATIONS: &str = "admin_notifications";

pub struct AdminNotificationsRepositoryImpl {
    database: Database,
}

impl AdminNotificationsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = ADMIN_NOTIFICATIONS, "creating collection");
        database.create_collection(ADMIN_NOTIFICATIONS).await?;

        Ok(Self { database })
    }
}

#[async_trait]
impl AdminNotificationsRepository for AdminNotificationsRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<AdminNotification>, repository::Error> {
        let entities = self
            .database
            .collection::<AdminNotificationFindEntity>(ADMIN_NOTIFICATIONS)
            .find(doc! {})
            .await?
            .try_collect::<Vec<_>>()
            .await?;

        let notifications = entities
            .into_iter()
            .map(AdminNotification::from)
            .collect();

        Ok(notifications)
    }

    async fn update_read(&self, id: ObjectId) -> Result<(), repository::Error> {
        let update_result = self
            .database
            .collection::<Document>(ADMIN_NOTIFICATIONS)
            .update_one(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$set": {
                        "read": true,
                    }
                },
            )
            .await?;

        // matched_count instead of modified_count becaouse marking
        // an already read record doesn't count as modification
        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(repository::Error::NoDocumentUpdated),
        }
    }
}
