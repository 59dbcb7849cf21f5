mod entity;
mod user_notifications_repository;
mod user_notifications_repository_impl;

pub use user_notifications_repository::*;
pub use user_notifications_repository_impl::*;
