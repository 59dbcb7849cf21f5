use super::{entity::NotificationInsertEntity, UserNotificationsRepository};
use crate::{dto::ServiceType, repository};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Document};
use mongodb::{options::IndexOptions, Database, IndexModel};

const NOTIFICATIONS: &str = "notifications";
const INDEX_NAME_USER_ID: &str = "index_user_id";

pub struct UserNotificationsRepositoryImpl {
    database: Database,
}

impl UserNotificationsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = NOTIFICATIONS, "creating collection");
        database.create_collection(NOTIFICATIONS).await?;

        let collection = database.collection::<Document>(NOTIFICATIONS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_USER_ID.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "user_id": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_USER_ID.to_string())
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = NOTIFICATIONS,
                index = INDEX_NAME_USER_ID,
                "created index"
            );
        }

        Ok(Self { database })
    }
}

#[async_trait]
impl UserNotificationsRepository for UserNotificationsRepositoryImpl {
    async fn insert(
        &self,
        user_id: &str,
        text: &str,
        service_type: Option<ServiceType>,
        sent_at: &str,
    ) -> Result<String, repository::Error> {
        let id = ObjectId::new();
        let insert_entity = NotificationInsertEntity {
            _id: id,
            id: id.to_hex(),
            user_id,
            text,
            service_type,
            sent_at,
            image_link: None,
        };

        self.database
            .collection::<NotificationInsertEntity>(NOTIFICATIONS)
            .insert_one(&insert_entity)
            .await?;

        Ok(insert_entity.id)
    }
}
