mod admin_notification_find_entity;

pub use admin_notification_find_entity::*;
