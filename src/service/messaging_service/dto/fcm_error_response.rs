use serde::Deserialize;

#[derive(Deserialize)]
pub struct FcmErrorResponse {
    pub error: FcmError,
}

#[derive(Deserialize)]
pub struct FcmError {
    pub message: String,
    pub status: Option<String>,
    #[serde(default)]
    pub details: Vec<FcmErrorDetail>,
}

#[derive(Deserialize)]
pub struct FcmErrorDetail {
    #[serde(rename = "errorCode")]
    pub error_code: Option<String>,
}

impl FcmError {
    ///
    /// FCM specific error code if present, canonical status otherwise
    ///
    pub fn code(self) -> Option<String> {
        self.details
            .into_iter()
            .find_map(|detail| detail.error_code)
            .or(self.status)
    }
}
