use serde::{Deserialize, Serialize};

/// Something a role may be allowed to do. See [`crate::Role::has_capability`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ViewDashboard,
    ManagePatients,
    RunDiagnostics,
    Administer,
}
