pub(crate) mod error;

pub use error::{AuthError, Result as AuthResult};

use crate::credential_store::{CredentialStore, TOKEN_KEY, USER_KEY};

use std::sync::Arc;

use async_trait::async_trait;
use fd_client::Client;
use fd_core::{Identity, Registration};
use log::{debug, info, warn};

/// What a successful login hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub credential: String,
    pub identity: Identity,
}

/// The operations the session store needs from an authentication backend.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Exchange credentials for a bearer credential and persist it.
    async fn login(&self, email: &str, password: &str) -> AuthResult<LoginOutcome>;

    /// Resolve a bearer credential into the identity it belongs to.
    async fn resolve_current_user(&self, credential: &str) -> AuthResult<Identity>;

    /// The persisted bearer credential, if any.
    fn stored_credential(&self) -> Option<String>;

    /// Forget the persisted credential. Never fails.
    fn logout(&self);
}

/// Authenticator backed by the REST API and a durable credential store.
#[derive(Clone)]
pub struct AuthGateway {
    client: Client,
    store: Arc<dyn CredentialStore>,
}

impl AuthGateway {
    pub fn new(client: Client, store: Arc<dyn CredentialStore>) -> Self {
        Self { client, store }
    }

    /// REST client carrying the persisted bearer credential, if one exists
    pub fn authorized_client(&self) -> Client {
        let mut client = self.client.clone();
        client.set_token(self.stored_credential());
        client
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Account registration.
    ///
    /// Not wired to the backend: succeeds locally without any request.
    pub async fn register(&self, registration: &Registration) -> AuthResult<bool> {
        info!(
            "Registration for {} accepted locally; no account was created on the server",
            registration.email
        );
        Ok(true)
    }

    /// Identity snapshot written at the last login.
    ///
    /// Informational only: authentication always goes through
    /// [`Authenticator::resolve_current_user`].
    pub fn cached_identity(&self) -> Option<Identity> {
        let raw = match self.store.get(USER_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Failed to read identity snapshot: {e}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!("Ignoring unreadable identity snapshot: {e}");
                None
            }
        }
    }

    /// Write the credential and the identity snapshot. A partial write is
    /// rolled back by the caller so no usable credential outlives a failed
    /// login.
    fn persist(&self, outcome: &LoginOutcome) -> AuthResult<()> {
        let snapshot = serde_json::to_string(&outcome.identity)
            .map_err(crate::credential_store::StoreError::from)?;

        self.store.set(TOKEN_KEY, &outcome.credential)?;
        self.store.set(USER_KEY, &snapshot)?;
        Ok(())
    }
}

#[async_trait]
impl Authenticator for AuthGateway {
    async fn login(&self, email: &str, password: &str) -> AuthResult<LoginOutcome> {
        debug!("Submitting login for {email}");

        let response = self
            .client
            .login(email, password)
            .await
            .map_err(AuthError::from_login_failure)?;

        let outcome = LoginOutcome {
            credential: response.access_token,
            identity: response.user,
        };
        if let Err(e) = self.persist(&outcome) {
            self.logout();
            return Err(e);
        }

        info!(
            "Logged in as {} ({})",
            outcome.identity.email, outcome.identity.role
        );
        Ok(outcome)
    }

    async fn resolve_current_user(&self, credential: &str) -> AuthResult<Identity> {
        let identity = self
            .client
            .current_user(credential)
            .await
            .map_err(AuthError::from_resolve_failure)?;

        debug!("Credential resolved to {}", identity.email);
        Ok(identity)
    }

    fn stored_credential(&self) -> Option<String> {
        match self.store.get(TOKEN_KEY) {
            Ok(credential) => credential,
            Err(e) => {
                warn!("Failed to read stored credential: {e}");
                None
            }
        }
    }

    fn logout(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.store.remove(key) {
                warn!("Failed to clear '{key}' from credential store: {e}");
            }
        }
        debug!("Persisted credential cleared");
    }
}
