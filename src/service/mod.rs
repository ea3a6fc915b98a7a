pub mod dispatch_service;
pub mod messaging_service;
