use serde::{Deserialize, Serialize};
use strum::AsRefStr;

///
/// Service a targeted notification is about
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ServiceType {
    Jobseeker,
    Skilling,
    Volunteer,
    Document,
    Welfare,
    Company,
}
