//! Rows owned by the relational store and the inputs used to write them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Status stored for appointments created without one.
pub const DEFAULT_APPOINTMENT_STATUS: &str = "scheduled";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Writable user fields. Updates replace all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl NewUser {
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Professional {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProfessional {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialty: String,
}

impl NewProfessional {
    pub fn into_professional(self, id: i64) -> Professional {
        Professional {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            specialty: self.specialty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    pub id: i64,
    pub scheduled_at: NaiveDateTime,
    pub service: String,
    /// Holds the patient display name in this domain.
    pub notes: Option<String>,
    pub status: String,
    pub user_id: Option<i64>,
    pub professional_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub scheduled_at: NaiveDateTime,
    pub service: String,
    pub notes: Option<String>,
    pub status: String,
    pub user_id: Option<i64>,
    pub professional_id: Option<i64>,
}

/// Full replacement set applied by an appointment update. `notes` is not part of it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentChanges {
    pub scheduled_at: NaiveDateTime,
    pub service: String,
    pub status: String,
    pub user_id: Option<i64>,
    pub professional_id: Option<i64>,
}
