use serde::Serialize;

///
/// Outcome of a fan-out, one entry per target.
/// Successful writes are never rolled back, failed targets
/// are listed so they can be retried on their own
///
#[derive(Debug, Serialize)]
pub struct DispatchReport {
    pub dispatched: Vec<DispatchedNotification>,
    pub failed: Vec<FailedDispatch>,
}

#[derive(Debug, Serialize)]
pub struct DispatchedNotification {
    pub user_id: String,
    pub notification_id: String,
}

#[derive(Debug, Serialize)]
pub struct FailedDispatch {
    pub user_id: String,
    pub reason: String,
}
