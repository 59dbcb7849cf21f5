mod admin_notifications_repository;
mod admin_notifications_repository_impl;
mod dto;
mod entity;

pub use admin_notifications_repository::*;
pub use admin_notifications_repository_impl::*;
pub use dto::AdminNotification;
