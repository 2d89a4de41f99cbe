//! In-process store used by tests and by local runs without Postgres.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

use shared_models::clinic::{
    Appointment, AppointmentChanges, NewAppointment, NewProfessional, NewUser, Professional, User,
};

use crate::store::{AppointmentStore, ProfessionalStore, UserStore};

struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Table<User>>,
    professionals: RwLock<Table<Professional>>,
    appointments: RwLock<Table<Appointment>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, every operation fails as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            bail!("storage unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.check_available()?;
        Ok(self.users.read().await.rows.values().cloned().collect())
    }

    async fn insert_user(&self, user: &NewUser) -> Result<i64> {
        self.check_available()?;
        let mut table = self.users.write().await;
        let id = table.next_id();
        table.rows.insert(id, user.clone().into_user(id));
        Ok(id)
    }

    async fn update_user(&self, id: i64, user: &NewUser) -> Result<u64> {
        self.check_available()?;
        let mut table = self.users.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = user.clone().into_user(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_user(&self, id: i64) -> Result<u64> {
        self.check_available()?;
        let removed = self.users.write().await.rows.remove(&id);
        Ok(removed.map_or(0, |_| 1))
    }

    async fn user_exists(&self, id: i64) -> Result<bool> {
        self.check_available()?;
        Ok(self.users.read().await.rows.contains_key(&id))
    }
}

#[async_trait]
impl ProfessionalStore for MemoryStore {
    async fn list_professionals(&self, specialty: Option<&str>) -> Result<Vec<Professional>> {
        self.check_available()?;
        let table = self.professionals.read().await;
        Ok(table
            .rows
            .values()
            .filter(|p| specialty.map_or(true, |s| p.specialty == s))
            .cloned()
            .collect())
    }

    async fn insert_professional(&self, professional: &NewProfessional) -> Result<i64> {
        self.check_available()?;
        let mut table = self.professionals.write().await;
        let id = table.next_id();
        table
            .rows
            .insert(id, professional.clone().into_professional(id));
        Ok(id)
    }

    async fn update_professional(&self, id: i64, professional: &NewProfessional) -> Result<u64> {
        self.check_available()?;
        let mut table = self.professionals.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = professional.clone().into_professional(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_professional(&self, id: i64) -> Result<u64> {
        self.check_available()?;
        let removed = self.professionals.write().await.rows.remove(&id);
        Ok(removed.map_or(0, |_| 1))
    }

    async fn professional_exists(&self, id: i64) -> Result<bool> {
        self.check_available()?;
        Ok(self.professionals.read().await.rows.contains_key(&id))
    }
}

#[async_trait]
impl AppointmentStore for MemoryStore {
    async fn list_appointments(&self) -> Result<Vec<Appointment>> {
        self.check_available()?;
        Ok(self.appointments.read().await.rows.values().cloned().collect())
    }

    async fn insert_appointment(&self, appointment: &NewAppointment) -> Result<i64> {
        self.check_available()?;
        let mut table = self.appointments.write().await;
        let id = table.next_id();
        table.rows.insert(
            id,
            Appointment {
                id,
                scheduled_at: appointment.scheduled_at,
                service: appointment.service.clone(),
                notes: appointment.notes.clone(),
                status: appointment.status.clone(),
                user_id: appointment.user_id,
                professional_id: appointment.professional_id,
            },
        );
        Ok(id)
    }

    async fn update_appointment(&self, id: i64, changes: &AppointmentChanges) -> Result<u64> {
        self.check_available()?;
        let mut table = self.appointments.write().await;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(0);
        };
        row.scheduled_at = changes.scheduled_at;
        row.service = changes.service.clone();
        row.status = changes.status.clone();
        row.user_id = changes.user_id;
        row.professional_id = changes.professional_id;
        Ok(1)
    }

    async fn delete_appointment(&self, id: i64) -> Result<u64> {
        self.check_available()?;
        let removed = self.appointments.write().await.rows.remove(&id);
        Ok(removed.map_or(0, |_| 1))
    }
}
