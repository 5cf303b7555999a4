pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result, Result as CoreResult};
pub use models::capability::Capability;
pub use models::diagnostic::{DEFAULT_DIAGNOSTIC_MODEL, Diagnostic, DiagnosticFilter};
pub use models::fibrosis_stage::FibrosisStage;
pub use models::identity::{Identity, Registration};
pub use models::patient::{NewPatient, Patient, PatientQuery, PatientUpdate, Sex};
pub use models::role::Role;
pub use models::session::Session;
pub use models::statistics::{
    ClinicianStats, ModelPerformance, MonthlyCount, Statistics, StatisticsFilter,
};
pub use models::view::View;
