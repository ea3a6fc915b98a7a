use axum::http::StatusCode;
use serde::Serialize;
use strum::{AsRefStr, IntoStaticStr};

///
/// Error codes understood by callable clients.
///
/// [AsRefStr] gives the lowercase `code`, [CallableErrorCode::status]
/// the canonical status name sent on the wire.
///
#[derive(Debug, Clone, Copy, PartialEq, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum CallableErrorCode {
    InvalidArgument,
    FailedPrecondition,
    Unauthenticated,
    NotFound,
    Internal,
}

impl CallableErrorCode {
    pub fn status(&self) -> &'static str {
        match self {
            CallableErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            CallableErrorCode::FailedPrecondition => "FAILED_PRECONDITION",
            CallableErrorCode::Unauthenticated => "UNAUTHENTICATED",
            CallableErrorCode::NotFound => "NOT_FOUND",
            CallableErrorCode::Internal => "INTERNAL",
        }
    }

    pub fn http_status(&self) -> StatusCode {
        match self {
            CallableErrorCode::InvalidArgument => StatusCode::BAD_REQUEST,
            CallableErrorCode::FailedPrecondition => StatusCode::BAD_REQUEST,
            CallableErrorCode::Unauthenticated => StatusCode::UNAUTHORIZED,
            CallableErrorCode::NotFound => StatusCode::NOT_FOUND,
            CallableErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
pub struct CallableErrorResponse {
    pub error: CallableError,
}

#[derive(Serialize)]
pub struct CallableError {
    pub status: &'static str,
    pub code: &'static str,
    pub message: String,
}

impl CallableError {
    pub fn new(code: CallableErrorCode, message: String) -> Self {
        Self {
            status: code.status(),
            code: code.into(),
            message,
        }
    }
}
