mod admin_notification;

pub use admin_notification::*;
