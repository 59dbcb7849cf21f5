mod admin_notifications_repository;
mod error;
mod user_notifications_repository;
mod users_repository;

pub use admin_notifications_repository::*;
pub use error::*;
pub use user_notifications_repository::*;
pub use users_repository::*;
