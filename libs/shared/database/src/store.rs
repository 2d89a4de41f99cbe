//! Storage capability injected into the cells.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use shared_models::clinic::{
    Appointment, AppointmentChanges, NewAppointment, NewProfessional, NewUser, Professional, User,
};

use crate::memory::MemoryStore;
use crate::postgres::PgStore;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Returns the generated id.
    async fn insert_user(&self, user: &NewUser) -> Result<i64>;

    /// Returns the number of rows affected.
    async fn update_user(&self, id: i64, user: &NewUser) -> Result<u64>;

    async fn delete_user(&self, id: i64) -> Result<u64>;

    async fn user_exists(&self, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait ProfessionalStore: Send + Sync {
    /// `specialty` narrows the result to exact matches.
    async fn list_professionals(&self, specialty: Option<&str>) -> Result<Vec<Professional>>;

    async fn insert_professional(&self, professional: &NewProfessional) -> Result<i64>;

    async fn update_professional(&self, id: i64, professional: &NewProfessional) -> Result<u64>;

    async fn delete_professional(&self, id: i64) -> Result<u64>;

    async fn professional_exists(&self, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Storage scan order; no ordering is guaranteed.
    async fn list_appointments(&self) -> Result<Vec<Appointment>>;

    async fn insert_appointment(&self, appointment: &NewAppointment) -> Result<i64>;

    async fn update_appointment(&self, id: i64, changes: &AppointmentChanges) -> Result<u64>;

    async fn delete_appointment(&self, id: i64) -> Result<u64>;
}

/// One handle per table, shared by every cell router.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub professionals: Arc<dyn ProfessionalStore>,
    pub appointments: Arc<dyn AppointmentStore>,
}

impl Stores {
    pub fn postgres(pool: PgPool) -> Self {
        let store = Arc::new(PgStore::new(pool));
        Self {
            users: store.clone(),
            professionals: store.clone(),
            appointments: store,
        }
    }

    pub fn memory() -> Self {
        Self::from_memory(Arc::new(MemoryStore::new()))
    }

    /// Keeps a handle on the backing store so tests can seed or break it.
    pub fn from_memory(store: Arc<MemoryStore>) -> Self {
        Self {
            users: store.clone(),
            professionals: store.clone(),
            appointments: store,
        }
    }
}
