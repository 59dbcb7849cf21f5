use crate::repository;
use serde::Serialize;

#[derive(Serialize)]
pub struct AdminNotification {
    pub id: String,
    pub bold_text: String,
    pub text: String,
    pub user_id: String,
    pub read: bool,
}

impl From<repository::AdminNotification> for AdminNotification {
    fn from(notification: repository::AdminNotification) -> Self {
        Self {
            id: notification.id.to_hex(),
            bold_text: notification.bold_text,
            text: notification.text,
            user_id: notification.user_id,
            read: notification.read,
        }
    }
}
