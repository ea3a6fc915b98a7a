use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    dto::{input, output},
    error::Error,
    service::dispatch_service::DispatchService,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Extension, Json, Router,
};
use jwt_auth::AuthContext;
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/sendTestNotification", post(send_test_notification))
        .route_layer(application_middleware.auth.clone())
}

async fn send_test_notification(
    State(dispatch_service): State<Arc<dyn DispatchService>>,
    auth: Option<Extension<AuthContext>>,
    request: Result<Json<input::CallableRequest>, JsonRejection>,
) -> Result<Json<output::CallableResponse<output::DispatchResult>>, Error> {
    let Json(request) = request?;
    tracing::trace!(?request);

    let context = input::InvocationContext {
        auth: auth.map(|Extension(auth)| auth),
    };
    let result = dispatch_service.dispatch_test_notification(context).await?;

    Ok(Json(output::CallableResponse { result }))
}
