use crate::{dto::output, error::Error};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersService: Send + Sync {
    ///
    /// Read the roster entries shown in the recipient picker.
    /// Users without a phone number have no display label
    /// and are left out
    ///
    /// ### Returns
    /// Vec of users ordered by phone number
    ///
    async fn find_recipients(&self) -> Result<Vec<output::User>, Error>;
}
