mod admin_notifications_service;
mod admin_notifications_service_impl;

pub use admin_notifications_service::*;
pub use admin_notifications_service_impl::*;
