use super::{DispatchError, DispatchService};
use crate::{
    dto::{input, output},
    repository::UsersRepository,
    service::messaging_service::{Message, MessagingService, Notification},
};
use axum::async_trait;
use std::sync::Arc;

const TEST_NOTIFICATION_TITLE: &str = "WTW — тест";
const TEST_NOTIFICATION_BODY: &str = "Cloud Function работает 🚀";

pub struct DispatchServiceImpl {
    users_repository: Arc<dyn UsersRepository>,
    messaging_service: Arc<dyn MessagingService>,
}

impl DispatchServiceImpl {
    pub fn new(
        users_repository: Arc<dyn UsersRepository>,
        messaging_service: Arc<dyn MessagingService>,
    ) -> Self {
        Self {
            users_repository,
            messaging_service,
        }
    }

    fn test_notification() -> Notification {
        Notification {
            title: TEST_NOTIFICATION_TITLE.to_string(),
            body: TEST_NOTIFICATION_BODY.to_string(),
        }
    }
}

#[async_trait]
impl DispatchService for DispatchServiceImpl {
    async fn dispatch_test_notification(
        &self,
        context: input::InvocationContext,
    ) -> Result<output::DispatchResult, DispatchError> {
        let auth = match context.auth {
            Some(auth) if !auth.uid.is_empty() => auth,
            _ => return Err(DispatchError::Unauthenticated),
        };

        tracing::info!(uid = auth.uid, "dispatching test notification");

        let user = self
            .users_repository
            .find(&auth.uid)
            .await?
            .ok_or(DispatchError::NotFound)?;

        // Any non-empty value is passed on, the gateway validates tokens
        let token = user
            .fcm_token
            .filter(|token| !token.is_empty())
            .ok_or(DispatchError::FailedPrecondition)?;

        let message = Message {
            token,
            notification: Self::test_notification(),
        };
        let name = self.messaging_service.send(&message).await?;
        tracing::info!(name, "dispatched test notification");

        Ok(output::DispatchResult { success: true })
    }
}
