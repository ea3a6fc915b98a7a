use super::JwtAuthService;
use jsonwebtoken::{DecodingKey, Validation};
use std::sync::Arc;
use tower::Layer;

///
/// Layer that verifies `Authorization: Bearer <JWT>` headers.
///
/// The layer never rejects a request. Requests with a valid token get
/// an [crate::AuthContext] in their extensions, all other requests
/// reach the handler anonymous, so the handler decides how to answer.
///
#[derive(Clone)]
pub struct JwtAuthLayer {
    validation: Arc<Validation>,
    key: Arc<DecodingKey>,
}

impl JwtAuthLayer {
    pub fn new(key: DecodingKey, validation: Validation) -> Self {
        Self {
            validation: Arc::new(validation),
            key: Arc::new(key),
        }
    }
}

impl<S> Layer<S> for JwtAuthLayer {
    type Service = JwtAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        JwtAuthService::new(inner, self.validation.clone(), self.key.clone())
    }
}
