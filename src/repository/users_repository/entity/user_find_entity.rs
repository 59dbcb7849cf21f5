use bson::oid::ObjectId;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct UserFindEntity {
    pub _id: ObjectId,

    /// Users are registered by another system,
    /// the field is not guaranteed to be present
    #[serde(default)]
    pub phone_number: Option<String>,
}
