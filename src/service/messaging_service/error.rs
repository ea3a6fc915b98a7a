#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("jwt error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("access token request rejected with status {status}: {message}")]
    TokenExchange { status: u16, message: String },

    ///
    /// Gateway refused the message.
    /// `code` holds the FCM error code, e.g. `UNREGISTERED`, when the reply carried one.
    ///
    #[error("message rejected with status {status}: {message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },
}
