use super::{ApplicationMiddleware, ApplicationState};
use crate::routing::routing;
use axum::Router;
use tower::ServiceBuilder;

pub fn create_application(
    application_state: ApplicationState,
    application_middleware: ApplicationMiddleware,
) -> Router {
    routing(&application_middleware)
        .with_state(application_state)
        .layer(
            ServiceBuilder::new()
                .layer(application_middleware.trace)
                .layer(application_middleware.body_limit),
        )
}
