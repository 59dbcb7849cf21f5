use super::{entity::UserFindEntity, User, UsersRepository};
use crate::repository;
use axum::async_trait;
use bson::doc;
use futures_util::TryStreamExt;
use mongodb::Database;

const USERS: &str = "users";

pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<User>, repository::Error> {
        let entities = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find(doc! {})
            .await?
            .try_collect::<Vec<_>>()
            .await?;

        let users = entities
            .into_iter()
            .map(|entity| User {
                id: entity._id.to_hex(),
                phone_number: entity.phone_number,
            })
            .collect();

        Ok(users)
    }
}
