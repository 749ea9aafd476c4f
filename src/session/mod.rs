//! Admin session backed by a persisted credential
//!
//! The session owns the stored credential bundle and is shared by the API
//! client (which reads the bearer token and evicts on 401) and the admin
//! guard (which only checks presence).

pub mod store;

use tokio::sync::RwLock;

use crate::client::models::CredentialBundle;
use crate::error::Result;

#[cfg(test)]
pub use store::MemoryStore;
pub use store::{CredentialStore, FileStore};

/// Fixed key under which the serialized credential bundle is stored
pub const CREDENTIAL_KEY: &str = "adminAuthData";

/// A credential bundle as it sits in the store: serialized, parsed on use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredential(String);

impl StoredCredential {
    /// Wrap a raw stored value without parsing it
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Serialize a bundle returned by the login endpoint
    pub fn from_bundle(bundle: &CredentialBundle) -> Result<Self> {
        Ok(Self(serde_json::to_string(bundle)?))
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Extract the access token.
    ///
    /// A value that does not parse is logged and treated as carrying no token.
    pub fn access_token(&self) -> Option<String> {
        match serde_json::from_str::<CredentialBundle>(&self.0) {
            Ok(bundle) => bundle.access_token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("Error parsing {} from credential store: {}", CREDENTIAL_KEY, e);
                None
            }
        }
    }
}

/// Lifecycle of the stored credential
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No credential has been stored
    #[default]
    Unset,
    /// A credential is stored and assumed valid
    Set(StoredCredential),
    /// The credential was removed by a 401 or by logout
    Cleared,
}

/// Events that move the session between states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LoginSucceeded(StoredCredential),
    Unauthorized,
    LoggedOut,
}

impl SessionState {
    /// Compute the next state. Pure; persistence is done by [`Session`].
    pub fn apply(self, event: SessionEvent) -> SessionState {
        match event {
            SessionEvent::LoginSucceeded(credential) => SessionState::Set(credential),
            SessionEvent::Unauthorized | SessionEvent::LoggedOut => SessionState::Cleared,
        }
    }

    pub fn credential(&self) -> Option<&StoredCredential> {
        match self {
            SessionState::Set(credential) => Some(credential),
            SessionState::Unset | SessionState::Cleared => None,
        }
    }

    pub fn is_present(&self) -> bool {
        self.credential().is_some()
    }

    /// Short label for status output
    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Unset => "not logged in",
            SessionState::Set(_) => "logged in",
            SessionState::Cleared => "logged out",
        }
    }
}

/// Session shared by the client and the admin guard
pub struct Session {
    store: Box<dyn CredentialStore>,
    state: RwLock<SessionState>,
}

impl Session {
    /// Load the session from a store
    pub fn load(store: impl CredentialStore + 'static) -> Result<Self> {
        let state = match store.get(CREDENTIAL_KEY)? {
            Some(raw) => SessionState::Set(StoredCredential::from_raw(raw)),
            None => SessionState::Unset,
        };
        log::debug!("Session loaded: {}", state.label());

        Ok(Self {
            store: Box::new(store),
            state: RwLock::new(state),
        })
    }

    /// Snapshot of the current state
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Whether a credential is stored (presence only)
    pub async fn is_present(&self) -> bool {
        self.state.read().await.is_present()
    }

    /// Bearer token for the next request, if the stored credential yields one
    pub async fn bearer_token(&self) -> Option<String> {
        self.state
            .read()
            .await
            .credential()
            .and_then(StoredCredential::access_token)
    }

    /// Persist a bundle returned by a successful login
    pub async fn establish(&self, bundle: &CredentialBundle) -> Result<()> {
        let credential = StoredCredential::from_bundle(bundle)?;
        self.transition(SessionEvent::LoginSucceeded(credential)).await
    }

    /// Drop the credential after the server rejected it
    pub async fn evict(&self) -> Result<()> {
        self.transition(SessionEvent::Unauthorized).await
    }

    /// Drop the credential at the user's request
    pub async fn logout(&self) -> Result<()> {
        self.transition(SessionEvent::LoggedOut).await
    }

    async fn transition(&self, event: SessionEvent) -> Result<()> {
        let mut state = self.state.write().await;

        match &event {
            SessionEvent::LoginSucceeded(credential) => {
                self.store.set(CREDENTIAL_KEY, credential.raw())?
            }
            SessionEvent::Unauthorized | SessionEvent::LoggedOut => {
                self.store.remove(CREDENTIAL_KEY)?
            }
        }

        let previous = state.label();
        let next = std::mem::take(&mut *state).apply(event);
        log::debug!("Session {} -> {}", previous, next.label());
        *state = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn credential(token: &str) -> StoredCredential {
        StoredCredential::from_raw(format!(r#"{{"access_token":"{}"}}"#, token))
    }

    #[test]
    fn test_unset_login_goes_to_set() {
        let next = SessionState::Unset.apply(SessionEvent::LoginSucceeded(credential("t")));
        assert_eq!(next, SessionState::Set(credential("t")));
    }

    #[test]
    fn test_set_unauthorized_goes_to_cleared() {
        let next = SessionState::Set(credential("t")).apply(SessionEvent::Unauthorized);
        assert_eq!(next, SessionState::Cleared);
    }

    #[test]
    fn test_cleared_login_goes_to_set() {
        let next = SessionState::Cleared.apply(SessionEvent::LoginSucceeded(credential("u")));
        assert_eq!(next, SessionState::Set(credential("u")));
    }

    #[test]
    fn test_unset_unauthorized_goes_to_cleared() {
        let next = SessionState::Unset.apply(SessionEvent::Unauthorized);
        assert_eq!(next, SessionState::Cleared);
    }

    #[test]
    fn test_logout_from_any_state() {
        for state in [
            SessionState::Unset,
            SessionState::Set(credential("t")),
            SessionState::Cleared,
        ] {
            assert_eq!(state.apply(SessionEvent::LoggedOut), SessionState::Cleared);
        }
    }

    #[test]
    fn test_access_token_parses_bundle() {
        let stored = StoredCredential::from_raw(r#"{"access_token":"abc","user":{"id":1}}"#);
        assert_eq!(stored.access_token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_access_token_unparseable_is_none() {
        let stored = StoredCredential::from_raw("{not json");
        assert_eq!(stored.access_token(), None);
    }

    #[test]
    fn test_access_token_missing_or_empty_is_none() {
        assert_eq!(StoredCredential::from_raw("{}").access_token(), None);
        assert_eq!(
            StoredCredential::from_raw(r#"{"access_token":""}"#).access_token(),
            None
        );
    }

    #[tokio::test]
    async fn test_session_loads_from_store() {
        let session = Session::load(MemoryStore::with_entry(
            CREDENTIAL_KEY,
            r#"{"access_token":"abc"}"#,
        ))
        .unwrap();
        assert!(session.is_present().await);
        assert_eq!(session.bearer_token().await.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_corrupt_credential_is_present_but_yields_no_token() {
        let session = Session::load(MemoryStore::with_entry(CREDENTIAL_KEY, "garbage")).unwrap();
        assert!(session.is_present().await);
        assert_eq!(session.bearer_token().await, None);
    }

    #[tokio::test]
    async fn test_establish_and_evict_persist() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        let session = Session::load(FileStore::new(&path)).unwrap();
        assert_eq!(session.state().await, SessionState::Unset);

        let bundle: CredentialBundle =
            serde_json::from_str(r#"{"access_token":"tok","role":"admin"}"#).unwrap();
        session.establish(&bundle).await.unwrap();
        assert_eq!(session.bearer_token().await.as_deref(), Some("tok"));

        let raw = FileStore::new(&path).get(CREDENTIAL_KEY).unwrap().unwrap();
        assert!(raw.contains("\"role\":\"admin\""));

        session.evict().await.unwrap();
        assert_eq!(session.state().await, SessionState::Cleared);
        assert_eq!(FileStore::new(&path).get(CREDENTIAL_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_store_file_loads_unauthenticated() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let session = Session::load(FileStore::new(&path)).unwrap();
        assert_eq!(session.state().await, SessionState::Unset);
        assert_eq!(session.bearer_token().await, None);

        session.logout().await.unwrap();
        assert_eq!(session.state().await, SessionState::Cleared);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&contents).is_ok());
    }

    #[tokio::test]
    async fn test_session_is_shareable() {
        let session = Arc::new(Session::load(MemoryStore::new()).unwrap());
        let other = session.clone();
        other.logout().await.unwrap();
        assert_eq!(session.state().await, SessionState::Cleared);
    }
}
