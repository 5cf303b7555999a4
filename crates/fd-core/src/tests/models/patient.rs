use crate::{NewPatient, PatientUpdate, Sex};

use chrono::{Duration, TimeZone, Utc};

fn new_patient() -> NewPatient {
    NewPatient {
        nom: "Durand".into(),
        prenom: "Claire".into(),
        date_naissance: Utc.with_ymd_and_hms(1975, 6, 12, 0, 0, 0).unwrap(),
        sexe: Sex::Female,
        telephone: None,
        email: Some("claire.durand@example.fr".into()),
        adresse: None,
    }
}

#[test]
fn test_valid_new_patient_passes() {
    assert!(new_patient().validate().is_ok());
}

#[test]
fn test_blank_name_is_a_field_error() {
    let mut patient = new_patient();
    patient.nom = "   ".into();

    let err = patient.validate().unwrap_err();
    assert_eq!(err.field(), Some("nom"));
}

#[test]
fn test_future_birth_date_rejected() {
    let mut patient = new_patient();
    patient.date_naissance = Utc::now() + Duration::days(2);

    let err = patient.validate().unwrap_err();
    assert_eq!(err.field(), Some("date_naissance"));
}

#[test]
fn test_bad_email_rejected() {
    let mut patient = new_patient();
    patient.email = Some("not-an-email".into());

    let err = patient.validate().unwrap_err();
    assert_eq!(err.field(), Some("email"));
}

#[test]
fn test_new_patient_skips_absent_optionals() {
    let json = serde_json::to_value(new_patient()).unwrap();
    assert_eq!(json["sexe"], "F");
    assert!(json.get("telephone").is_none());
    assert_eq!(json["email"], "claire.durand@example.fr");
}

#[test]
fn test_empty_update_is_rejected() {
    let update = PatientUpdate::default();
    assert!(update.is_empty());
    assert!(update.validate().is_err());
}

#[test]
fn test_partial_update_serializes_only_set_fields() {
    let update = PatientUpdate {
        telephone: Some("0601020304".into()),
        ..Default::default()
    };

    assert!(update.validate().is_ok());
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json, serde_json::json!({ "telephone": "0601020304" }));
}
