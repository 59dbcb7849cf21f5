mod admin_notification;
mod admin_notification_feed;
mod dispatch_report;
mod user;

pub use admin_notification::*;
pub use admin_notification_feed::*;
pub use dispatch_report::*;
pub use user::*;
