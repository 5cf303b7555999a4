use crate::{Capability, CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Login,
    Dashboard,
    #[serde(rename = "patients", alias = "patient-list")]
    PatientList,
    PatientForm,
    Diagnostics,
    Admin,
}

impl View {
    /// Navigation entries in display order, before role filtering
    pub const NAVIGATION: [View; 4] = [
        View::Dashboard,
        View::PatientList,
        View::Diagnostics,
        View::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Dashboard => "dashboard",
            Self::PatientList => "patients",
            Self::PatientForm => "patient-form",
            Self::Diagnostics => "diagnostics",
            Self::Admin => "admin",
        }
    }

    /// Capability needed to render this view. The login view needs none.
    pub fn required_capability(&self) -> Option<Capability> {
        match self {
            Self::Login => None,
            Self::Dashboard => Some(Capability::ViewDashboard),
            Self::PatientList | Self::PatientForm => Some(Capability::ManagePatients),
            Self::Diagnostics => Some(Capability::RunDiagnostics),
            Self::Admin => Some(Capability::Administer),
        }
    }
}

impl FromStr for View {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "login" => Ok(Self::Login),
            "dashboard" => Ok(Self::Dashboard),
            "patients" | "patient-list" => Ok(Self::PatientList),
            "patient-form" => Ok(Self::PatientForm),
            "diagnostics" => Ok(Self::Diagnostics),
            "admin" => Ok(Self::Admin),
            _ => Err(CoreError::InvalidView {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
