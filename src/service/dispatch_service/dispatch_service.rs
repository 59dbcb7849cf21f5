use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DispatchService: Send + Sync {
    ///
    /// Send a notification to every user in the roster
    /// as it exists at call time.
    ///
    /// All writes are attempted regardless of earlier failures
    /// and nothing is rolled back.
    ///
    /// ### Returns
    /// [output::DispatchReport] with an outcome for every target
    ///
    /// ### Errors
    /// - [Error::Validation] when message is blank
    /// - [Error::Database] when the roster read fails
    ///
    async fn dispatch_to_all(
        &self,
        message: input::BroadcastMessage,
    ) -> Result<output::DispatchReport, Error>;

    ///
    /// Send a service notification to the selected users.
    /// Every created record carries the given service type.
    ///
    /// ### Returns
    /// [output::DispatchReport] with an outcome for every target
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - message is blank
    ///     - no users were selected
    ///
    async fn dispatch_to_selected(
        &self,
        message: input::ServiceMessage,
    ) -> Result<output::DispatchReport, Error>;
}
