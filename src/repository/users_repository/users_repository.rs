use super::User;
use crate::repository;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// Reads the full user roster as it exists at call time
    ///
    async fn find_all(&self) -> Result<Vec<User>, repository::Error>;
}
