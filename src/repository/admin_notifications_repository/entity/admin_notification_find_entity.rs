use crate::repository::AdminNotification;
use bson::oid::ObjectId;
use serde::Deserialize;

///
/// Records are created by another system,
/// every field except `_id` may be missing
///
#[derive(Deserialize)]
pub struct AdminNotificationFindEntity {
    pub _id: ObjectId,

    #[serde(default)]
    pub bold_text: String,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub user_id: String,

    /// Absent means unread
    #[serde(default)]
    pub read: bool,
}

impl From<AdminNotificationFindEntity> for AdminNotification {
    fn from(entity: AdminNotificationFindEntity) -> Self {
        Self {
            id: entity._id,
            bold_text: entity.bold_text,
            text: entity.text,
            user_id: entity.user_id,
            read: entity.read,
        }
    }
}
