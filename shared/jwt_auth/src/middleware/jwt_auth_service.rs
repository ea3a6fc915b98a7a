use crate::{
    dto::{AuthContext, Claims},
    error::AuthError,
};
use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderValue},
    response::Response,
};
use jsonwebtoken::{DecodingKey, Validation};
use std::{
    sync::Arc,
    task::{Context, Poll},
};
use tower::Service;
use tracing::{field, instrument::Instrumented, Instrument};

#[derive(Clone)]
pub struct JwtAuthService<S> {
    inner: S,
    validation: Arc<Validation>,
    key: Arc<DecodingKey>,
}

impl<S> JwtAuthService<S> {
    pub fn new(inner: S, validation: Arc<Validation>, key: Arc<DecodingKey>) -> Self {
        Self {
            inner,
            validation,
            key,
        }
    }

    fn parse_authorization_header(
        &self,
        authorization_header: &HeaderValue,
    ) -> Result<AuthContext, AuthError> {
        let authorization_value = authorization_header
            .to_str()
            .map_err(|_| AuthError::InvalidHeader)?;
        let token = authorization_value
            .strip_prefix("Bearer ")
            .ok_or(AuthError::UnsupportedType)?;
        let token_data = jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation)?;

        Ok(AuthContext::new(token_data.claims.sub))
    }
}

impl<S> Service<Request> for JwtAuthService<S>
where
    S: Service<Request, Response = Response>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Instrumented<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        // span that holds caller information for the rest of the request
        let span = tracing::info_span!("caller", uid = field::Empty);

        let auth = req
            .headers()
            .get(AUTHORIZATION)
            .map(|header| self.parse_authorization_header(header));

        match auth {
            Some(Ok(auth)) => {
                span.record("uid", auth.uid.as_str());
                req.extensions_mut().insert(auth);
            }
            Some(Err(err)) => {
                tracing::warn!(parent: &span, %err, "auth error, continuing as anonymous");
            }
            None => {
                tracing::debug!(parent: &span, "anonymous request");
            }
        }

        self.inner.call(req).instrument(span)
    }
}
