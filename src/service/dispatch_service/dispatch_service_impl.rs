use super::DispatchService;
use crate::{
    dto::{input, output, ServiceType},
    error::Error,
    repository::{UserNotificationsRepository, UsersRepository},
};
use axum::async_trait;
use futures_util::future;
use std::{collections::HashSet, sync::Arc};
use time::OffsetDateTime;

pub struct DispatchServiceImpl {
    users_repository: Arc<dyn UsersRepository>,
    notifications_repository: Arc<dyn UserNotificationsRepository>,
}

impl DispatchServiceImpl {
    pub fn new(
        users_repository: Arc<dyn UsersRepository>,
        notifications_repository: Arc<dyn UserNotificationsRepository>,
    ) -> Self {
        Self {
            users_repository,
            notifications_repository,
        }
    }

    fn validate_message(message: &str) -> Result<(), Error> {
        if message.trim().is_empty() {
            return Err(Error::Validation("message is blank"));
        }

        Ok(())
    }

    /// Second precision, matches the `sent_at` format stored by the panel
    fn sent_at_stamp() -> String {
        let now = OffsetDateTime::now_utc();

        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            now.year(),
            u8::from(now.month()),
            now.day(),
            now.hour(),
            now.minute(),
            now.second(),
        )
    }

    ///
    /// Writes one notification per target, all issued concurrently.
    /// Every target is attempted even when earlier writes fail
    ///
    async fn fan_out(
        &self,
        user_ids: Vec<String>,
        text: &str,
        service_type: Option<ServiceType>,
        sent_at: &str,
    ) -> output::DispatchReport {
        let writes = user_ids.into_iter().map(|user_id| async move {
            let result = self
                .notifications_repository
                .insert(&user_id, text, service_type, sent_at)
                .await;
            (user_id, result)
        });

        let mut dispatched = Vec::new();
        let mut failed = Vec::new();
        for (user_id, result) in future::join_all(writes).await {
            match result {
                Ok(notification_id) => dispatched.push(output::DispatchedNotification {
                    user_id,
                    notification_id,
                }),
                Err(err) => {
                    tracing::warn!(user_id = %user_id, err = %err, "notification write failed");
                    failed.push(output::FailedDispatch {
                        user_id,
                        reason: err.to_string(),
                    });
                }
            }
        }

        output::DispatchReport { dispatched, failed }
    }
}

#[async_trait]
impl DispatchService for DispatchServiceImpl {
    async fn dispatch_to_all(
        &self,
        input::BroadcastMessage { message }: input::BroadcastMessage,
    ) -> Result<output::DispatchReport, Error> {
        tracing::info!("dispatching notification to all users");

        Self::validate_message(&message)?;

        let roster = self.users_repository.find_all().await?;
        tracing::info!(count = roster.len(), "loaded user roster");

        let user_ids = roster.into_iter().map(|user| user.id).collect();
        let sent_at = Self::sent_at_stamp();
        let report = self.fan_out(user_ids, &message, None, &sent_at).await;

        tracing::info!(
            dispatched = report.dispatched.len(),
            failed = report.failed.len(),
            "dispatch finished"
        );

        Ok(report)
    }

    async fn dispatch_to_selected(
        &self,
        input::ServiceMessage {
            message,
            service_type,
            user_ids,
        }: input::ServiceMessage,
    ) -> Result<output::DispatchReport, Error> {
        tracing::info!(service_type = service_type.as_ref(), "dispatching service notification");

        Self::validate_message(&message)?;
        if user_ids.is_empty() {
            return Err(Error::Validation("no users selected"));
        }

        // targets form a set, repeated ids get a single notification
        let mut seen = HashSet::new();
        let user_ids = user_ids
            .into_iter()
            .filter(|user_id| seen.insert(user_id.clone()))
            .collect();

        let sent_at = Self::sent_at_stamp();
        let report = self
            .fan_out(user_ids, &message, Some(service_type), &sent_at)
            .await;

        tracing::info!(
            dispatched = report.dispatched.len(),
            failed = report.failed.len(),
            "dispatch finished"
        );

        Ok(report)
    }
}
