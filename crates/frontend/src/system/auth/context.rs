use leptos::prelude::*;

use super::storage;

/// Session credentials, provided once at the application root
///
/// Collaborators that talk to the API receive it explicitly (see
/// `shared::api_utils::fetch_collection`) instead of reading storage themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub access_token: Option<String>,
}

impl AuthContext {
    pub fn new(access_token: Option<String>) -> Self {
        Self { access_token }
    }

    /// Restore the session token saved by the login flow
    pub fn from_storage() -> Self {
        Self::new(storage::get_access_token())
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> Option<String> {
        self.access_token
            .as_deref()
            .map(|token| format!("Bearer {}", token))
    }
}

/// Hook to access the auth context provided by `App`
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not provided at app root")
}
