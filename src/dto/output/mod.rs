mod callable_error;
mod callable_response;
mod dispatch_result;

pub use callable_error::*;
pub use callable_response::*;
pub use dispatch_result::*;
