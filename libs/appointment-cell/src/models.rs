// libs/appointment-cell/src/models.rs
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use shared_utils::datetime::deserialize_scheduled_at;

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateAppointmentRequest {
    #[serde(deserialize_with = "deserialize_scheduled_at")]
    pub scheduled_at: NaiveDateTime,
    pub service: String,
    /// Patient display name.
    pub notes: Option<String>,
    pub user_id: Option<i64>,
    pub professional_id: Option<i64>,
}

/// Full replacement of the writable fields; omitted references become null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateAppointmentRequest {
    #[serde(deserialize_with = "deserialize_scheduled_at")]
    pub scheduled_at: NaiveDateTime,
    pub user_id: Option<i64>,
    pub professional_id: Option<i64>,
    pub service: String,
    pub status: String,
}

// ==============================================================================
// RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedAppointment {
    pub id: i64,
    pub scheduled_at: NaiveDateTime,
    pub service: String,
    pub notes: Option<String>,
    pub user_id: Option<i64>,
    pub professional_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatedAppointment {
    pub id: i64,
    pub scheduled_at: NaiveDateTime,
    pub user_id: Option<i64>,
    pub professional_id: Option<i64>,
    pub service: String,
    pub status: String,
}

// ==============================================================================
// REFERENCES & ERRORS
// ==============================================================================

/// Tables an appointment may point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Professional,
}

impl EntityKind {
    /// Request field carrying the reference.
    pub fn field_name(&self) -> &'static str {
        match self {
            EntityKind::User => "user_id",
            EntityKind::Professional => "professional_id",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppointmentError {
    #[error("{0} no existe")]
    MissingReference(EntityKind),

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}
