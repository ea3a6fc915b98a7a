use serde::Serialize;

#[derive(Debug, PartialEq, Serialize)]
pub struct DispatchResult {
    pub success: bool,
}
