use bson::Bson;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct UserFindEntity {
    pub _id: String,

    /// Written by the mobile application, so the type is not guaranteed.
    /// Any non-string value is read as a missing token and the dispatch
    /// fails with a precondition error instead of reaching the gateway.
    #[serde(rename = "fcmToken", default)]
    pub fcm_token: Option<Bson>,
}
