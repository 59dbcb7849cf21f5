use serde::Serialize;

///
/// Roster entry shown in the operator's recipient picker
///
#[derive(Serialize)]
pub struct User {
    pub id: String,
    pub phone_number: String,
}
