pub struct FcmMessagingServiceConfig {
    /// Origin of the FCM API, e.g. `https://fcm.googleapis.com`
    pub base_url: String,
    pub project_id: String,
}
