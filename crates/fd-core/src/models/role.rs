use crate::{Capability, CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Role attached to an authenticated identity.
///
/// The backend spells the clinician role `medecin`; `clinician` is accepted
/// on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "medecin", alias = "clinician")]
    Clinician,
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "super-admin")]
    SuperAdmin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Clinician, Role::Admin, Role::SuperAdmin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clinician => "clinician",
            Self::Admin => "admin",
            Self::SuperAdmin => "super-admin",
        }
    }

    /// Value the backend uses for this role
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Clinician => "medecin",
            Self::Admin => "admin",
            Self::SuperAdmin => "super-admin",
        }
    }

    /// Role x capability lookup table.
    pub fn has_capability(&self, capability: Capability) -> bool {
        matches!(
            (self, capability),
            (Self::Admin | Self::SuperAdmin, _)
                | (
                    Self::Clinician,
                    Capability::ViewDashboard
                        | Capability::ManagePatients
                        | Capability::RunDiagnostics
                )
        )
    }

    pub fn is_privileged(&self) -> bool {
        self.has_capability(Capability::Administer)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "clinician" | "medecin" => Ok(Self::Clinician),
            "admin" => Ok(Self::Admin),
            "super-admin" => Ok(Self::SuperAdmin),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
