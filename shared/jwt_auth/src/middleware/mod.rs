mod jwt_auth_layer;
mod jwt_auth_service;

pub use jwt_auth_layer::*;
pub use jwt_auth_service::*;
