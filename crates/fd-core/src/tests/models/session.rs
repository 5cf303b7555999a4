use crate::{Identity, Role, Session};

use chrono::Utc;

fn identity(role: Role) -> Identity {
    Identity {
        id: "1".into(),
        display_name: "Dr. Test".into(),
        email: "test@hopital.fr".into(),
        role,
        created_at: Utc::now(),
    }
}

#[test]
fn test_default_session_is_anonymous() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert!(session.identity().is_none());
    assert_eq!(session, Session::anonymous());
}

#[test]
fn test_authenticated_session_exposes_role() {
    let session = Session::authenticated(identity(Role::Admin));
    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(Role::Admin));
}
