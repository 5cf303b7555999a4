
use crate::{
    AuthError, AuthResult, Authenticator, CredentialStore, LoginOutcome, MemoryCredentialStore,
    TOKEN_KEY,
};

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use fd_core::{Identity, Role};

pub(crate) fn identity(role: Role) -> Identity {
    Identity {
        id: "7".into(),
        display_name: "Dr. Martin".into(),
        email: "martin@hopital.fr".into(),
        role,
        created_at: Utc::now(),
    }
}

/// In-process authenticator that counts every backend call.
pub(crate) struct FakeAuthenticator {
    pub store: MemoryCredentialStore,
    pub role: Role,
    pub valid_token: String,
    pub valid_password: String,
    pub login_calls: AtomicUsize,
    pub resolve_calls: AtomicUsize,
}

impl FakeAuthenticator {
    pub fn new(role: Role) -> Self {
        Self {
            store: MemoryCredentialStore::new(),
            role,
            valid_token: "good-token".into(),
            valid_password: "secret".into(),
            login_calls: AtomicUsize::new(0),
            resolve_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_stored_token(self, token: &str) -> Self {
        self.store.set(TOKEN_KEY, token).unwrap();
        self
    }

    pub fn network_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst) + self.resolve_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Authenticator for FakeAuthenticator {
    async fn login(&self, _email: &str, password: &str) -> AuthResult<LoginOutcome> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        if password != self.valid_password {
            return Err(AuthError::invalid_credentials());
        }
        self.store.set(TOKEN_KEY, &self.valid_token)?;
        Ok(LoginOutcome {
            credential: self.valid_token.clone(),
            identity: identity(self.role),
        })
    }

    async fn resolve_current_user(&self, credential: &str) -> AuthResult<Identity> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        if credential == self.valid_token {
            Ok(identity(self.role))
        } else {
            Err(AuthError::invalid_token("Token invalide"))
        }
    }

    fn stored_credential(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).ok().flatten()
    }

    fn logout(&self) {
        let _ = self.store.remove(TOKEN_KEY);
    }
}
