use crate::{Capability, Role};

use std::str::FromStr;

#[test]
fn test_role_from_str_accepts_wire_and_canonical_names() {
    assert_eq!(Role::from_str("medecin").unwrap(), Role::Clinician);
    assert_eq!(Role::from_str("clinician").unwrap(), Role::Clinician);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("super-admin").unwrap(), Role::SuperAdmin);
    assert!(Role::from_str("nurse").is_err());
}

#[test]
fn test_role_serializes_to_backend_value() {
    assert_eq!(
        serde_json::to_string(&Role::Clinician).unwrap(),
        "\"medecin\""
    );
    assert_eq!(
        serde_json::to_string(&Role::SuperAdmin).unwrap(),
        "\"super-admin\""
    );
    let role: Role = serde_json::from_str("\"clinician\"").unwrap();
    assert_eq!(role, Role::Clinician);
}

#[test]
fn test_only_privileged_roles_administer() {
    assert!(!Role::Clinician.has_capability(Capability::Administer));
    assert!(Role::Admin.has_capability(Capability::Administer));
    assert!(Role::SuperAdmin.has_capability(Capability::Administer));
}

#[test]
fn test_every_role_has_clinical_capabilities() {
    for role in Role::ALL {
        assert!(role.has_capability(Capability::ViewDashboard), "{role}");
        assert!(role.has_capability(Capability::ManagePatients), "{role}");
        assert!(role.has_capability(Capability::RunDiagnostics), "{role}");
    }
}

#[test]
fn test_role_display_uses_canonical_name() {
    assert_eq!(Role::Clinician.to_string(), "clinician");
    assert_eq!(Role::Clinician.wire_name(), "medecin");
}

#[test]
fn test_role_parse_result_uses_crate_alias() {
    let parsed: crate::Result<Role> = Role::from_str("super-admin");
    let aliased: crate::CoreResult<Role> = Role::from_str("nurse");

    assert_eq!(parsed.unwrap(), Role::SuperAdmin);
    assert!(matches!(aliased, Err(crate::CoreError::InvalidRole { .. })));
}
