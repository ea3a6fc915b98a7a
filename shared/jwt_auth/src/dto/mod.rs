mod auth_context;
mod claims;

pub use auth_context::*;
pub use claims::*;
