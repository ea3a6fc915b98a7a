mod error;
mod users_repository;

pub use error::*;
pub use users_repository::*;
