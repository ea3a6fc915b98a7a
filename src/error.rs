use crate::{
    dto::output::{CallableError, CallableErrorCode, CallableErrorResponse},
    service::dispatch_service::DispatchError,
};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid request: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => Error::PayloadTooLarge(rejection.body_text()),
            _ => Error::InvalidArgument(rejection.body_text()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let code = match &self {
            // same reply as the body limit middleware gives for a declared Content-Length
            Error::PayloadTooLarge(message) => {
                tracing::warn!(err = %self);
                return (StatusCode::PAYLOAD_TOO_LARGE, message.clone()).into_response();
            }
            Error::InvalidArgument(_) => CallableErrorCode::InvalidArgument,
            Error::Dispatch(DispatchError::Unauthenticated) => CallableErrorCode::Unauthenticated,
            Error::Dispatch(DispatchError::NotFound) => CallableErrorCode::NotFound,
            Error::Dispatch(DispatchError::FailedPrecondition) => {
                CallableErrorCode::FailedPrecondition
            }
            Error::Dispatch(DispatchError::Gateway(_)) => CallableErrorCode::Internal,
            Error::Dispatch(DispatchError::Database(_)) => CallableErrorCode::Internal,
        };

        let message = match code {
            // details stay in the log, callers only learn the kind
            CallableErrorCode::Internal => {
                tracing::error!(err = %self);
                code.status().to_string()
            }
            _ => {
                tracing::warn!(err = %self);
                self.to_string()
            }
        };

        let body = CallableErrorResponse {
            error: CallableError::new(code, message),
        };

        (code.http_status(), Json(body)).into_response()
    }
}
