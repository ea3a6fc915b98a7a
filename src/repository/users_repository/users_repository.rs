use super::UserRecord;
use crate::repository;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// Finds user record by its uid.
    ///
    /// ### Returns
    /// `None` when no record is stored for the uid
    ///
    async fn find(&self, uid: &str) -> Result<Option<UserRecord>, repository::Error>;
}
