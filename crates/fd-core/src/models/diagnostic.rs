use crate::FibrosisStage;
use crate::models::timestamp;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Model name sent when the caller does not pick one
pub const DEFAULT_DIAGNOSTIC_MODEL: &str = "Vision Transformer v2.1";

/// A diagnostic record as returned by `/diagnostics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub id: i64,
    pub patient_id: i64,
    pub medecin_id: i64,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    pub modele_utilise: String,
    pub resultat: FibrosisStage,
    pub probabilite: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Diagnostic {
    pub fn is_high_confidence(&self) -> bool {
        self.probabilite >= 0.8
    }
}

/// Filters accepted by `GET /diagnostics/`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resultat: Option<FibrosisStage>,
}
