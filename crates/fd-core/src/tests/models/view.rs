use crate::{Capability, View};

use std::str::FromStr;

#[test]
fn test_view_from_str() {
    assert_eq!(View::from_str("dashboard").unwrap(), View::Dashboard);
    assert_eq!(View::from_str("patients").unwrap(), View::PatientList);
    assert_eq!(View::from_str("patient-list").unwrap(), View::PatientList);
    assert_eq!(View::from_str("patient-form").unwrap(), View::PatientForm);
    assert_eq!(View::from_str("admin").unwrap(), View::Admin);
    assert!(View::from_str("settings").is_err());
}

#[test]
fn test_as_str_roundtrips_through_from_str() {
    for view in [
        View::Login,
        View::Dashboard,
        View::PatientList,
        View::PatientForm,
        View::Diagnostics,
        View::Admin,
    ] {
        assert_eq!(View::from_str(view.as_str()).unwrap(), view);
    }
}

#[test]
fn test_required_capabilities() {
    assert_eq!(View::Login.required_capability(), None);
    assert_eq!(
        View::PatientForm.required_capability(),
        Some(Capability::ManagePatients)
    );
    assert_eq!(
        View::Admin.required_capability(),
        Some(Capability::Administer)
    );
}

#[test]
fn test_navigation_order() {
    assert_eq!(
        View::NAVIGATION,
        [
            View::Dashboard,
            View::PatientList,
            View::Diagnostics,
            View::Admin
        ]
    );
}
