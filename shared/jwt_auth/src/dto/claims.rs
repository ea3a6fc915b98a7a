use serde::Deserialize;

///
/// Claims of an identity token that the service relies on.
/// `aud`, `iss` and `exp` are checked by [jsonwebtoken::Validation].
///
#[derive(Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}
