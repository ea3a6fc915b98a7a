use super::{
    dto::{FcmErrorResponse, FcmSendRequest, FcmSendResponse},
    AccessTokenProvider, Error, FcmMessagingServiceConfig, Message, MessagingService,
};
use axum::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;

///
/// Client of the FCM HTTP v1 `messages:send` endpoint
///
pub struct FcmMessagingService {
    send_url: String,
    client: reqwest::Client,
    token_provider: Arc<dyn AccessTokenProvider>,
}

impl FcmMessagingService {
    pub fn new(
        config: FcmMessagingServiceConfig,
        client: reqwest::Client,
        token_provider: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        let send_url = format!(
            "{}/v1/projects/{}/messages:send",
            config.base_url.trim_end_matches('/'),
            config.project_id
        );

        Self {
            send_url,
            client,
            token_provider,
        }
    }

    fn rejection(status: StatusCode, body: String) -> Error {
        match serde_json::from_str::<FcmErrorResponse>(&body) {
            Ok(FcmErrorResponse { error }) => {
                let message = error.message.clone();
                Error::Rejected {
                    status: status.as_u16(),
                    code: error.code(),
                    message,
                }
            }
            Err(_) => Error::Rejected {
                status: status.as_u16(),
                code: None,
                message: body,
            },
        }
    }
}

#[async_trait]
impl MessagingService for FcmMessagingService {
    ///
    /// ### Errors
    /// - [Error::Rejected] when FCM answers with non 2xx status
    /// - [Error::TokenExchange] when access token cannot be obtained
    /// - [Error::Http] on transport failures
    ///
    async fn send(&self, message: &Message) -> Result<String, Error> {
        let access_token = self.token_provider.access_token().await?;

        tracing::info!("sending message");
        let response = self
            .client
            .post(&self.send_url)
            .bearer_auth(access_token)
            .json(&FcmSendRequest { message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(Self::rejection(status, body));
        }

        let FcmSendResponse { name } = response.json().await?;
        tracing::info!(name, "message accepted");

        Ok(name)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::service::messaging_service::{
        test::spawn_fake_server, MockAccessTokenProvider, Notification,
    };
    use axum::{
        extract::State,
        http::{header::AUTHORIZATION, HeaderMap, Uri},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::sync::Mutex;

    struct RecordedRequest {
        path: String,
        authorization: Option<String>,
        body: Value,
    }

    #[derive(Clone)]
    struct FakeFcm {
        status: StatusCode,
        response: String,
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    // fallback, because the `messages:send` segment is not a valid route pattern
    async fn fake_send(
        State(fcm): State<FakeFcm>,
        uri: Uri,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, String) {
        fcm.requests.lock().unwrap().push(RecordedRequest {
            path: uri.path().to_string(),
            authorization: headers
                .get(AUTHORIZATION)
                .map(|value| value.to_str().unwrap().to_string()),
            body,
        });

        (fcm.status, fcm.response)
    }

    async fn create_service(
        status: StatusCode,
        response: impl Into<String>,
        token_provider: MockAccessTokenProvider,
    ) -> (FcmMessagingService, Arc<Mutex<Vec<RecordedRequest>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let fcm = FakeFcm {
            status,
            response: response.into(),
            requests: requests.clone(),
        };
        let base_url = spawn_fake_server(Router::new().fallback(fake_send).with_state(fcm)).await;

        let config = FcmMessagingServiceConfig {
            base_url: format!("{base_url}/"),
            project_id: "wtw-test".to_string(),
        };
        let service = FcmMessagingService::new(config, reqwest::Client::new(), Arc::new(token_provider));

        (service, requests)
    }

    fn token_provider() -> MockAccessTokenProvider {
        let mut token_provider = MockAccessTokenProvider::new();
        token_provider
            .expect_access_token()
            .returning(|| Ok("test-access-token".to_string()));
        token_provider
    }

    fn message() -> Message {
        Message {
            token: "abc123".to_string(),
            notification: Notification {
                title: "title".to_string(),
                body: "body".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn send_accepted() {
        let (service, requests) = create_service(
            StatusCode::OK,
            json!({ "name": "projects/wtw-test/messages/0:1500415314455276%31bd1c9631bd1c96" })
                .to_string(),
            token_provider(),
        )
        .await;

        let name = service.send(&message()).await.unwrap();

        assert_eq!(
            name,
            "projects/wtw-test/messages/0:1500415314455276%31bd1c9631bd1c96"
        );

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/v1/projects/wtw-test/messages:send");
        assert_eq!(
            requests[0].authorization.as_deref(),
            Some("Bearer test-access-token")
        );
        assert_eq!(
            requests[0].body,
            json!({
                "message": {
                    "token": "abc123",
                    "notification": {
                        "title": "title",
                        "body": "body",
                    }
                }
            })
        );
    }

    #[tokio::test]
    async fn send_rejected_with_fcm_error_code() {
        let response = json!({
            "error": {
                "code": 404,
                "message": "Requested entity was not found.",
                "status": "NOT_FOUND",
                "details": [
                    {
                        "@type": "type.googleapis.com/google.firebase.fcm.v1.FcmError",
                        "errorCode": "UNREGISTERED"
                    }
                ]
            }
        });
        let (service, _) =
            create_service(StatusCode::NOT_FOUND, response.to_string(), token_provider()).await;

        let err = service.send(&message()).await.unwrap_err();

        match err {
            Error::Rejected {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 404);
                assert_eq!(code.as_deref(), Some("UNREGISTERED"));
                assert_eq!(message, "Requested entity was not found.");
            }
            err => panic!("unexpected error: {err}"),
        }
    }

    #[tokio::test]
    async fn send_rejected_without_details() {
        let response = json!({
            "error": {
                "code": 401,
                "message": "Request had invalid authentication credentials.",
                "status": "UNAUTHENTICATED"
            }
        });
        let (service, _) =
            create_service(StatusCode::UNAUTHORIZED, response.to_string(), token_provider()).await;

        let err = service.send(&message()).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Rejected { status: 401, code: Some(ref code), .. } if code == "UNAUTHENTICATED"
        ));
    }

    #[tokio::test]
    async fn send_rejected_with_plain_text() {
        let (service, _) = create_service(
            StatusCode::SERVICE_UNAVAILABLE,
            "upstream unavailable",
            token_provider(),
        )
        .await;

        let err = service.send(&message()).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Rejected { status: 503, code: None, ref message } if message == "upstream unavailable"
        ));
    }

    #[tokio::test]
    async fn send_access_token_error_no_request() {
        let mut token_provider = MockAccessTokenProvider::new();
        token_provider.expect_access_token().returning(|| {
            Err(Error::TokenExchange {
                status: 400,
                message: "invalid_grant".to_string(),
            })
        });
        let (service, requests) = create_service(StatusCode::OK, "{}", token_provider).await;

        let err = service.send(&message()).await.unwrap_err();

        assert!(matches!(err, Error::TokenExchange { status: 400, .. }));
        assert!(requests.lock().unwrap().is_empty());
    }
}
