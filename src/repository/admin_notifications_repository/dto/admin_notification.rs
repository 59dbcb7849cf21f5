use bson::oid::ObjectId;

pub struct AdminNotification {
    pub id: ObjectId,
    pub bold_text: String,
    pub text: String,
    pub user_id: String,
    pub read: bool,
}
