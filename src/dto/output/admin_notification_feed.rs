use super::AdminNotification;
use serde::Serialize;

#[derive(Serialize)]
pub struct AdminNotificationFeed {
    pub notifications: Vec<AdminNotification>,

    /// Count of records with `read` unset
    pub unread_count: usize,
}
