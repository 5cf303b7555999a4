use crate::{CoreError, Diagnostic, FibrosisStage};

#[test]
fn test_stage_try_from_range() {
    assert_eq!(FibrosisStage::try_from(0).unwrap(), FibrosisStage::F0);
    assert_eq!(FibrosisStage::try_from(4).unwrap(), FibrosisStage::F4);
    assert!(matches!(
        FibrosisStage::try_from(5),
        Err(CoreError::InvalidFibrosisStage { value: 5, .. })
    ));
    assert!(FibrosisStage::try_from(-1).is_err());
}

#[test]
fn test_stage_display() {
    assert_eq!(FibrosisStage::F3.to_string(), "F3");
    assert_eq!(FibrosisStage::F4.label(), "Cirrhosis");
}

#[test]
fn test_diagnostic_with_out_of_range_stage_is_rejected() {
    let json = r#"{
        "id": 1, "patient_id": 2, "medecin_id": 3,
        "date": "2024-02-20T09:22:17",
        "modele_utilise": "Vision Transformer v2.1",
        "resultat": 7, "probabilite": 0.91,
        "created_at": "2024-02-20T09:22:17"
    }"#;
    assert!(serde_json::from_str::<Diagnostic>(json).is_err());
}

#[test]
fn test_diagnostic_deserializes() {
    let json = r#"{
        "id": 1, "patient_id": 2, "medecin_id": 3,
        "date": "2024-02-20T09:22:17",
        "modele_utilise": "Vision Transformer v2.1",
        "resultat": 2, "probabilite": 0.85,
        "image_url": "uploads/abc.png",
        "notes": null,
        "created_at": "2024-02-20T09:22:17"
    }"#;

    let diagnostic: Diagnostic = serde_json::from_str(json).unwrap();

    assert_eq!(diagnostic.resultat, FibrosisStage::F2);
    assert!(diagnostic.is_high_confidence());
    assert!(diagnostic.notes.is_none());
}
