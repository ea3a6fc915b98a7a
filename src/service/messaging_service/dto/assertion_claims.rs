use serde::Serialize;

///
/// Claims of the JWT exchanged for an access token
/// with the `urn:ietf:params:oauth:grant-type:jwt-bearer` grant
///
#[derive(Serialize)]
pub struct AssertionClaims<'a> {
    pub iss: &'a str,
    pub scope: &'a str,
    pub aud: &'a str,
    pub iat: i64,
    pub exp: i64,
}
