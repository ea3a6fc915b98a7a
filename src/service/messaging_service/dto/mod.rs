mod access_token;
mod assertion_claims;
mod fcm_error_response;
mod fcm_messaging_service_config;
mod fcm_send_request;
mod message;
mod service_account_key;
mod token_response;

pub use access_token::*;
pub use assertion_claims::*;
pub use fcm_error_response::*;
pub use fcm_messaging_service_config::*;
pub use fcm_send_request::*;
pub use message::*;
pub use service_account_key::*;
pub use token_response::*;
