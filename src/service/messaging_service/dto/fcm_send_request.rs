use super::Message;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct FcmSendRequest<'a> {
    pub message: &'a Message,
}

#[derive(Deserialize)]
pub struct FcmSendResponse {
    /// `projects/{project_id}/messages/{message_id}`
    pub name: String,
}
