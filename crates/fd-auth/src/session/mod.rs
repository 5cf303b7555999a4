use crate::gateway::Authenticator;

use fd_core::{Identity, Session};
use log::{debug, info, warn};
use tokio::sync::watch;

/// Owns the process-wide [`Session`] and broadcasts every change.
///
/// Consumers call [`SessionStore::subscribe`] and react to updates on the
/// returned receiver; the store itself never reaches into them.
pub struct SessionStore<A: Authenticator> {
    authenticator: A,
    sender: watch::Sender<Session>,
}

impl<A: Authenticator> SessionStore<A> {
    /// Starts anonymous. Nothing is read from storage until [`initialize`].
    ///
    /// [`initialize`]: SessionStore::initialize
    pub fn new(authenticator: A) -> Self {
        let (sender, _) = watch::channel(Session::anonymous());
        Self {
            authenticator,
            sender,
        }
    }

    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    /// Snapshot of the current session
    pub fn current(&self) -> Session {
        self.sender.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.sender.borrow().is_authenticated()
    }

    /// Receiver that observes every subsequent session change
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.sender.subscribe()
    }

    /// Restore the session from the persisted credential.
    ///
    /// Without a credential no request is made. A credential the backend
    /// refuses, or that cannot be checked, is discarded.
    pub async fn initialize(&self) -> Session {
        let Some(credential) = self.authenticator.stored_credential() else {
            debug!("No persisted credential; starting unauthenticated");
            self.publish(Session::anonymous());
            return self.current();
        };

        match self.authenticator.resolve_current_user(&credential).await {
            Ok(identity) => {
                info!("Session restored for {}", identity.email);
                self.publish(Session::authenticated(identity));
            }
            Err(e) => {
                warn!("Discarding persisted credential: {e}");
                self.authenticator.logout();
                self.publish(Session::anonymous());
            }
        }

        self.current()
    }

    pub fn set_authenticated(&self, identity: Identity) {
        self.publish(Session::authenticated(identity));
    }

    /// Drop the session and the persisted credential.
    pub fn clear(&self) {
        self.publish(Session::anonymous());
        self.authenticator.logout();
    }

    /// Log in and adopt the returned identity.
    ///
    /// Returns `false` on any failure, leaving the session untouched.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        match self.authenticator.login(email, password).await {
            Ok(outcome) => {
                self.set_authenticated(outcome.identity);
                true
            }
            Err(e) => {
                warn!("Login failed: {e}");
                false
            }
        }
    }

    fn publish(&self, session: Session) {
        self.sender.send_if_modified(|current| {
            if *current == session {
                return false;
            }
            *current = session;
            true
        });
    }
}
