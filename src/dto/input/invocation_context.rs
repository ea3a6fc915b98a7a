use jwt_auth::AuthContext;

pub struct InvocationContext {
    /// `None` when the request carried no valid identity token
    pub auth: Option<AuthContext>,
}

#[cfg(test)]
impl InvocationContext {
    pub fn anonymous() -> Self {
        Self { auth: None }
    }

    pub fn authenticated(uid: impl Into<String>) -> Self {
        Self {
            auth: Some(AuthContext::new(uid)),
        }
    }
}
