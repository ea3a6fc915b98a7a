use time::OffsetDateTime;

pub struct AccessToken {
    pub value: String,
    pub expire_at: OffsetDateTime,
}
