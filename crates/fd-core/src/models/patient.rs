use crate::models::timestamp;
use crate::{CoreError, Result as CoreErrorResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// A patient record as returned by `/patients`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub nom: String,
    pub prenom: String,
    #[serde(with = "timestamp")]
    pub date_naissance: DateTime<Utc>,
    pub sexe: Sex,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub adresse: Option<String>,
    pub medecin_id: i64,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.prenom, self.nom)
    }
}

/// Body of `POST /patients/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPatient {
    pub nom: String,
    pub prenom: String,
    #[serde(with = "timestamp")]
    pub date_naissance: DateTime<Utc>,
    pub sexe: Sex,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,
}

impl NewPatient {
    /// Form-level checks done before anything is sent.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.nom.trim().is_empty() {
            return Err(CoreError::validation("nom", "last name is required"));
        }
        if self.prenom.trim().is_empty() {
            return Err(CoreError::validation("prenom", "first name is required"));
        }
        if self.date_naissance > Utc::now() {
            return Err(CoreError::validation(
                "date_naissance",
                "date of birth cannot be in the future",
            ));
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

/// Body of `PUT /patients/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prenom: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub date_naissance: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sexe: Option<Sex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,
}

impl PatientUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.is_empty() {
            return Err(CoreError::validation("patient", "no fields to update"));
        }
        if matches!(&self.nom, Some(nom) if nom.trim().is_empty()) {
            return Err(CoreError::validation("nom", "last name cannot be blank"));
        }
        if matches!(&self.prenom, Some(prenom) if prenom.trim().is_empty()) {
            return Err(CoreError::validation("prenom", "first name cannot be blank"));
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

#[track_caller]
fn validate_email(email: &str) -> CoreErrorResult<()> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(CoreError::validation("email", "not a valid email address")),
    }
}

/// Query accepted by `GET /patients/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatientQuery {
    /// Matches first or last name, case-insensitively
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
