use serde::Deserialize;
use serde_json::Value;

///
/// Body of a callable invocation.
///
/// `data` has to be present, but the test notification does not use it.
///
#[derive(Debug, Deserialize)]
pub struct CallableRequest {
    #[allow(dead_code)]
    pub data: Value,
}
