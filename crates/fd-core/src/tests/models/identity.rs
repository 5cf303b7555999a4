use crate::{Identity, Role};

use chrono::{TimeZone, Utc};

#[test]
fn given_backend_payload_when_deserialize_then_numeric_id_becomes_text() {
    let json = r#"{
        "id": 42,
        "nom": "Dr. Martin Dubois",
        "email": "martin.dubois@hopital.fr",
        "role": "medecin",
        "created_at": "2024-01-15T10:30:00"
    }"#;

    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_eq!(identity.id, "42");
    assert_eq!(identity.display_name, "Dr. Martin Dubois");
    assert_eq!(identity.role, Role::Clinician);
    assert_eq!(
        identity.created_at,
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    );
}

#[test]
fn given_camel_case_fixture_when_deserialize_then_aliases_apply() {
    let json = r#"{
        "id": "3",
        "name": "Admin Système",
        "email": "admin@hopital.fr",
        "role": "admin",
        "createdAt": "2024-01-01"
    }"#;

    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_eq!(identity.id, "3");
    assert_eq!(identity.display_name, "Admin Système");
    assert!(identity.is_privileged());
    assert_eq!(
        identity.created_at,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    );
}

#[test]
fn given_offset_timestamp_when_deserialize_then_normalised_to_utc() {
    let json = r#"{
        "id": 7,
        "nom": "Dr. Sophie Laurent",
        "email": "sophie.laurent@hopital.fr",
        "role": "super-admin",
        "created_at": "2024-01-20T12:00:00+02:00"
    }"#;

    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_eq!(
        identity.created_at,
        Utc.with_ymd_and_hms(2024, 1, 20, 10, 0, 0).unwrap()
    );
}

#[test]
fn given_unknown_role_when_deserialize_then_error() {
    let json = r#"{"id":1,"nom":"X","email":"x@x.com","role":"nurse","created_at":"2024-01-01"}"#;
    assert!(serde_json::from_str::<Identity>(json).is_err());
}

#[test]
fn given_garbage_timestamp_when_deserialize_then_error() {
    let json = r#"{"id":1,"nom":"X","email":"x@x.com","role":"admin","created_at":"yesterday"}"#;
    assert!(serde_json::from_str::<Identity>(json).is_err());
}

#[test]
fn given_identity_when_serialized_then_reloads_identically() {
    let identity = Identity {
        id: "9".into(),
        display_name: "Dr. Test".into(),
        email: "test@hopital.fr".into(),
        role: Role::Admin,
        created_at: Utc.with_ymd_and_hms(2024, 2, 20, 14, 30, 25).unwrap(),
    };

    let json = serde_json::to_string(&identity).unwrap();
    assert!(json.contains("\"nom\":\"Dr. Test\""));

    let restored: Identity = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, identity);
}
