use super::Error;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    ///
    /// ### Returns
    /// OAuth2 bearer token accepted by the messaging gateway
    ///
    async fn access_token(&self) -> Result<String, Error>;
}
