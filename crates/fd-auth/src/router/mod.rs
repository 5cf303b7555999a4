use fd_core::{Role, Session, View};
use log::debug;
use tokio::sync::watch;

/// Whether `role` may render `view`.
///
/// The login view carries no requirement; every other view needs the
/// capability it names.
pub fn is_view_permitted(view: View, role: Role) -> bool {
    view.required_capability()
        .is_none_or(|capability| role.has_capability(capability))
}

/// Navigation entries shown to `role`, in display order
pub fn visible_navigation_entries(role: Role) -> Vec<View> {
    View::NAVIGATION
        .into_iter()
        .filter(|view| is_view_permitted(*view, role))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    Unauthenticated,
    Authenticated(Role),
}

impl RouterState {
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Unauthenticated => None,
            Self::Authenticated(role) => Some(*role),
        }
    }
}

impl From<&Session> for RouterState {
    fn from(session: &Session) -> Self {
        match session.role() {
            Some(role) => Self::Authenticated(role),
            None => Self::Unauthenticated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The view is now current
    Shown(View),
    /// The role lacks the view's capability; the current view is unchanged
    Denied(View),
    /// Navigation is not possible in the current state
    Ignored,
}

/// Decides which view is on screen for the session's role.
#[derive(Debug, Clone)]
pub struct RoleGatedRouter {
    state: RouterState,
    current: View,
}

impl Default for RoleGatedRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleGatedRouter {
    pub fn new() -> Self {
        Self {
            state: RouterState::Unauthenticated,
            current: View::Login,
        }
    }

    pub fn state(&self) -> RouterState {
        self.state
    }

    pub fn current_view(&self) -> View {
        self.current
    }

    /// Apply a session snapshot.
    ///
    /// Logging in, or a change of role, lands on the dashboard. Logging out
    /// returns to the login view.
    pub fn sync(&mut self, session: &Session) -> RouterState {
        let next = RouterState::from(session);
        if next == self.state {
            return self.state;
        }

        debug!("Router transition {:?} -> {:?}", self.state, next);
        self.state = next;
        self.current = match next {
            RouterState::Unauthenticated => View::Login,
            RouterState::Authenticated(_) => View::Dashboard,
        };
        self.state
    }

    pub fn navigate(&mut self, view: View) -> NavigationOutcome {
        let RouterState::Authenticated(role) = self.state else {
            return NavigationOutcome::Ignored;
        };

        if view == View::Login {
            return NavigationOutcome::Ignored;
        }

        if !is_view_permitted(view, role) {
            debug!("View '{view}' denied for role '{role}'");
            return NavigationOutcome::Denied(view);
        }

        self.current = view;
        NavigationOutcome::Shown(view)
    }

    pub fn is_permitted(&self, view: View) -> bool {
        match self.state {
            RouterState::Unauthenticated => view == View::Login,
            RouterState::Authenticated(role) => is_view_permitted(view, role),
        }
    }

    /// Entries for the current state. Empty while unauthenticated.
    pub fn navigation_entries(&self) -> Vec<View> {
        self.state
            .role()
            .map(visible_navigation_entries)
            .unwrap_or_default()
    }

    /// Wait for the next session change and apply it.
    ///
    /// Returns `None` once the session store has been dropped.
    pub async fn follow(&mut self, receiver: &mut watch::Receiver<Session>) -> Option<RouterState> {
        receiver.changed().await.ok()?;
        let session = receiver.borrow_and_update().clone();
        Some(self.sync(&session))
    }
}
