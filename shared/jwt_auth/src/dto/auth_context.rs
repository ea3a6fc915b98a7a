use std::{ops::Deref, sync::Arc};

///
/// Identity of the caller attached to a request by [crate::JwtAuthLayer].
///
/// Fields are stored in [InnerAuthContext] behind an Arc
/// so cloning the context between extractors stays cheap.
///
#[derive(Clone)]
pub struct AuthContext {
    inner: Arc<InnerAuthContext>,
}

pub struct InnerAuthContext {
    /// `sub` claim of the verified token
    pub uid: String,
}

impl AuthContext {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(InnerAuthContext { uid: uid.into() }),
        }
    }
}

impl Deref for AuthContext {
    type Target = InnerAuthContext;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
