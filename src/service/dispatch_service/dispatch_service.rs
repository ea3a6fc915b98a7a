use super::DispatchError;
use crate::dto::{input, output};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DispatchService: Send + Sync {
    ///
    /// Sends the fixed test notification to the caller's device.
    ///
    /// Every call sends a new notification, nothing is deduplicated or retried.
    ///
    /// ### Returns
    /// [output::DispatchResult] once the gateway accepted the message
    ///
    /// ### Errors
    /// - [DispatchError::Unauthenticated] when context has no identity or uid is empty
    /// - [DispatchError::NotFound] when no user record is stored for the uid
    /// - [DispatchError::FailedPrecondition] when user record has no fcm token
    /// - [DispatchError::Gateway] when gateway refused the message
    /// - [DispatchError::Database] when user record cannot be read
    ///
    async fn dispatch_test_notification(
        &self,
        context: input::InvocationContext,
    ) -> Result<output::DispatchResult, DispatchError>;
}
