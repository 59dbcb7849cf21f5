use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BroadcastMessage {
    pub message: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn broadcast_message_json_deserialize_ok() {
        let json = r#"{
            "message": "Maintenance window tonight"
        }"#;

        let message = serde_json::from_str::<BroadcastMessage>(json).unwrap();

        assert_eq!(message.message, "Maintenance window tonight");
    }
}
