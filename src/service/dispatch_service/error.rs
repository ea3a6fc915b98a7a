use crate::{repository, service::messaging_service};

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("User not authenticated")]
    Unauthenticated,

    #[error("User not found")]
    NotFound,

    #[error("FCM token not found")]
    FailedPrecondition,

    #[error("messaging error: {0}")]
    Gateway(#[from] messaging_service::Error),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}
