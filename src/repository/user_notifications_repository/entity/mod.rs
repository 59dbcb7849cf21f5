mod notification_insert_entity;

pub use notification_insert_entity::*;
