#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("illegal character in Authorization header")]
    InvalidHeader,

    #[error("unsupported authorization type")]
    UnsupportedType,

    #[error("invalid jwt: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}
