pub mod admin_notifications_service;
pub mod dispatch_service;
pub mod users_service;
