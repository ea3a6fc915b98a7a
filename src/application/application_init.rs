use super::{create_state, ApplicationEnv, ApplicationState, ApplicationStateToClose};
use tokio::sync::OnceCell;

static APPLICATION: OnceCell<(ApplicationState, ApplicationStateToClose)> = OnceCell::const_new();

///
/// Creates process-wide application state.
///
/// Only the first call builds clients and services, every later call
/// returns handles to the same state.
///
pub async fn initialize(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    let application = APPLICATION
        .get_or_try_init(|| async {
            tracing::info!("initializing application");
            create_state(env).await
        })
        .await?;

    Ok(application.clone())
}
