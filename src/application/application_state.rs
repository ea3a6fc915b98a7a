use super::ApplicationEnv;
use crate::{
    repository::UsersRepositoryImpl,
    service::{
        dispatch_service::{DispatchService, DispatchServiceImpl},
        messaging_service::{
            FcmMessagingService, FcmMessagingServiceConfig, ServiceAccountKey,
            ServiceAccountTokenProvider,
        },
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub dispatch_service: Arc<dyn DispatchService>,
}

#[derive(Clone)]
pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let users_repository = UsersRepositoryImpl::new(db);
    let users_repository = Arc::new(users_repository);

    tracing::info!("creating messaging service");
    let service_account_key = ServiceAccountKey::from_file(&env.fcm_service_account_file)?;
    let http_client = reqwest::Client::builder()
        .timeout(env.fcm_request_timeout)
        .build()?;
    let config = FcmMessagingServiceConfig {
        base_url: env.fcm_base_url.clone(),
        project_id: service_account_key.project_id.clone(),
    };
    let token_provider = ServiceAccountTokenProvider::new(service_account_key, http_client.clone())?;
    let token_provider = Arc::new(token_provider);
    let messaging_service = FcmMessagingService::new(config, http_client, token_provider);
    let messaging_service = Arc::new(messaging_service);

    tracing::info!("creating services");
    let dispatch_service = DispatchServiceImpl::new(users_repository, messaging_service);
    let dispatch_service = Arc::new(dispatch_service);

    Ok((
        ApplicationState { dispatch_service },
        ApplicationStateToClose { db_client },
    ))
}
