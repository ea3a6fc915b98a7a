mod application;
mod application_env;
mod application_init;
mod application_middleware;
mod application_shutdown;
mod application_state;
mod application_tracing;

pub use application::*;
pub use application_env::*;
pub use application_init::*;
pub use application_middleware::*;
pub use application_shutdown::*;
pub use application_state::*;
pub use application_tracing::*;
