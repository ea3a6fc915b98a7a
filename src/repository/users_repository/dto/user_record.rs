use crate::repository::users_repository::entity::UserFindEntity;
use bson::Bson;

#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub uid: String,

    /// Device push address, `None` when the field is missing or not a string
    pub fcm_token: Option<String>,
}

impl From<UserFindEntity> for UserRecord {
    fn from(value: UserFindEntity) -> Self {
        let fcm_token = match value.fcm_token {
            Some(Bson::String(fcm_token)) => Some(fcm_token),
            _ => None,
        };

        Self {
            uid: value._id,
            fcm_token,
        }
    }
}
