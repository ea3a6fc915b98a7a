use super::{Error, Message};
use axum::async_trait;

///
/// Single-recipient push delivery gateway
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagingService: Send + Sync {
    ///
    /// Hands the message over to the gateway.
    /// Does not wait for delivery to the device.
    ///
    /// ### Returns
    /// name the gateway assigned to the accepted message
    ///
    async fn send(&self, message: &Message) -> Result<String, Error>;
}
