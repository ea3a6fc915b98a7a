mod callable_request;
mod invocation_context;

pub use callable_request::*;
pub use invocation_context::*;
