//! Client-side authentication for FibroDetect.
//!
//! [`CredentialStore`] persists the bearer credential, [`AuthGateway`] talks to
//! the backend's auth endpoints, [`SessionStore`] owns the current [`Session`]
//! and notifies subscribers, and [`RoleGatedRouter`] decides which views are
//! reachable for the logged-in role.
//!
//! [`Session`]: fd_core::Session

pub mod credential_store;
pub mod gateway;
pub mod router;
pub mod session;

#[cfg(test)]
mod tests;

pub use credential_store::{
    CredentialStore, FileCredentialStore, MemoryCredentialStore, StoreError, StoreResult,
    TOKEN_KEY, USER_KEY,
};
pub use gateway::{AuthError, AuthGateway, AuthResult, Authenticator, LoginOutcome};
pub use router::{
    NavigationOutcome, RoleGatedRouter, RouterState, is_view_permitted, visible_navigation_entries,
};
pub use session::SessionStore;
