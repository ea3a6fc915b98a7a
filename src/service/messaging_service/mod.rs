mod access_token_provider;
mod dto;
mod error;
mod fcm_messaging_service;
mod messaging_service;
mod service_account_token_provider;

pub use access_token_provider::*;
pub use dto::{FcmMessagingServiceConfig, Message, Notification, ServiceAccountKey};
pub use error::*;
pub use fcm_messaging_service::*;
pub use messaging_service::*;
pub use service_account_token_provider::*;
