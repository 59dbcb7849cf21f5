mod user_find_entity;

pub use user_find_entity::*;
