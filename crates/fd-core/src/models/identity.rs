use crate::Role;
use crate::models::timestamp;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The authenticated user's profile, as returned by `/auth/me` and `/auth/login`.
///
/// Replaced wholesale on every login; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque identifier. The backend sends an integer; it is kept as text.
    #[serde(deserialize_with = "deserialize_opaque_id")]
    pub id: String,
    #[serde(rename = "nom", alias = "name", alias = "displayName")]
    pub display_name: String,
    pub email: String,
    pub role: Role,
    #[serde(alias = "createdAt", with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Identity {
    pub fn is_privileged(&self) -> bool {
        self.role.is_privileged()
    }
}

/// Fields supplied when registering a new account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(rename = "nom")]
    pub display_name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

fn deserialize_opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}
