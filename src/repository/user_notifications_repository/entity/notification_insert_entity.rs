use crate::dto::ServiceType;
use bson::oid::ObjectId;
use serde::Serialize;

#[derive(Serialize)]
pub struct NotificationInsertEntity<'a> {
    pub _id: ObjectId,

    /// Hex of `_id`, stamped at insert so the record
    /// carries its own storage identifier
    pub id: String,

    pub user_id: &'a str,
    pub text: &'a str,

    /// Absent for broadcast notifications
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,

    pub sent_at: &'a str,
    pub image_link: Option<&'a str>,
}

#[cfg(test)]
mod test {
    use super::*;
    use bson::Bson;

    fn entity(id: ObjectId, service_type: Option<ServiceType>) -> NotificationInsertEntity<'static> {
        NotificationInsertEntity {
            _id: id,
            id: id.to_hex(),
            user_id: "66b1f7a2e4d3c2b1a0f9e8d7",
            text: "Your document is ready",
            service_type,
            sent_at: "2024-08-10T09:30:00Z",
            image_link: None,
        }
    }

    #[test]
    fn stored_id_equals_storage_identifier() {
        let document = bson::to_document(&entity(ObjectId::new(), None)).unwrap();

        let storage_id = document.get_object_id("_id").unwrap();
        assert_eq!(document.get_str("id").unwrap(), storage_id.to_hex());
    }

    #[test]
    fn service_type_absent_for_broadcast() {
        let document = bson::to_document(&entity(ObjectId::new(), None)).unwrap();

        assert!(!document.contains_key("service_type"));
    }

    #[test]
    fn service_type_stored_lowercase() {
        let document =
            bson::to_document(&entity(ObjectId::new(), Some(ServiceType::Welfare))).unwrap();

        assert_eq!(document.get_str("service_type").unwrap(), "welfare");
    }

    #[test]
    fn image_link_stored_as_null() {
        let document = bson::to_document(&entity(ObjectId::new(), None)).unwrap();

        assert_eq!(document.get("image_link"), Some(&Bson::Null));
    }
}
