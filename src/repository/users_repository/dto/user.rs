pub struct User {
    pub id: String,
    pub phone_number: Option<String>,
}
