use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregate counters from `GET /stats/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_patients: u64,
    pub total_diagnostics: u64,
    /// Stage value (0-4) to number of diagnostics. JSON object keys are strings.
    #[serde(default)]
    pub repartition_fibrose: BTreeMap<String, u64>,
    #[serde(default)]
    pub diagnostics_par_mois: Vec<MonthlyCount>,
}

impl Statistics {
    pub fn count_for_stage(&self, stage: crate::FibrosisStage) -> u64 {
        self.repartition_fibrose
            .get(&stage.value().to_string())
            .copied()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub mois: String,
    pub count: u64,
}

/// One row of `GET /stats/medecins` (admin only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicianStats {
    pub medecin_id: i64,
    pub nom: String,
    pub patients_count: u64,
    pub diagnostics_count: u64,
}

/// One row of `GET /stats/performance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPerformance {
    pub modele: String,
    pub total_diagnostics: u64,
    pub moyenne_probabilite: f64,
    pub diagnostics_haute_confiance: u64,
}

/// Filters accepted by `GET /stats/`. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatisticsFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medecin_id: Option<i64>,
}
