use super::{
    dto::{AccessToken, AssertionClaims, TokenResponse},
    AccessTokenProvider, Error, ServiceAccountKey,
};
use axum::async_trait;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use std::time::Duration;
use time::OffsetDateTime;
use tokio::sync::Mutex;

const FIREBASE_MESSAGING_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";
const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFESPAN: Duration = Duration::from_secs(3600);

/// Cached token is replaced this long before it expires
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

///
/// Obtains access tokens with a service account key
/// and caches them until they are close to expiring.
///
pub struct ServiceAccountTokenProvider {
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    client: reqwest::Client,
    cached_token: Mutex<Option<AccessToken>>,
}

impl ServiceAccountTokenProvider {
    ///
    /// ### Errors
    /// - [Error::Jwt] when private key is not a valid RSA PEM
    ///
    pub fn new(key: ServiceAccountKey, client: reqwest::Client) -> Result<Self, Error> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;

        Ok(Self {
            key,
            encoding_key,
            client,
            cached_token: Mutex::new(None),
        })
    }

    fn create_assertion(&self, issued_at: OffsetDateTime) -> Result<String, Error> {
        let claims = AssertionClaims {
            iss: &self.key.client_email,
            scope: FIREBASE_MESSAGING_SCOPE,
            aud: &self.key.token_uri,
            iat: issued_at.unix_timestamp(),
            exp: (issued_at + ASSERTION_LIFESPAN).unix_timestamp(),
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(self.key.private_key_id.clone());

        let assertion = jsonwebtoken::encode(&header, &claims, &self.encoding_key)?;

        Ok(assertion)
    }

    async fn request_access_token(&self) -> Result<AccessToken, Error> {
        let issued_at = OffsetDateTime::now_utc();
        let assertion = self.create_assertion(issued_at)?;

        let response = self
            .client
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT_TYPE),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await?;
            return Err(Error::TokenExchange {
                status: status.as_u16(),
                message,
            });
        }

        let token_response = response.json::<TokenResponse>().await?;

        Ok(AccessToken {
            value: token_response.access_token,
            expire_at: issued_at + Duration::from_secs(token_response.expires_in),
        })
    }
}

#[async_trait]
impl AccessTokenProvider for ServiceAccountTokenProvider {
    async fn access_token(&self) -> Result<String, Error> {
        let mut cached_token = self.cached_token.lock().await;

        if let Some(token) = cached_token.as_ref() {
            if OffsetDateTime::now_utc() + EXPIRY_MARGIN < token.expire_at {
                return Ok(token.value.clone());
            }
        }

        tracing::info!(client_email = %self.key.client_email, "requesting access token");
        let token = self.request_access_token().await?;
        tracing::info!(expire_at = %token.expire_at, "received access token");

        let value = token.value.clone();
        *cached_token = Some(token);

        Ok(value)
    }
}
