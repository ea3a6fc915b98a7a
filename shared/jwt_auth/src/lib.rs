pub mod dto;
pub mod error;
pub mod middleware;
pub mod util;

pub use dto::AuthContext;
pub use middleware::JwtAuthLayer;
