use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;

use shared_models::clinic::{
    Appointment, AppointmentChanges, NewAppointment, NewProfessional, NewUser, Professional, User,
};

use crate::store::{AppointmentStore, ProfessionalStore, UserStore};

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, phone
            FROM users
            "#,
        )
        .fetch_all(&self.db)
        .await
        .context("list users")?;
        Ok(rows)
    }

    async fn insert_user(&self, user: &NewUser) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (name, email, phone)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .fetch_one(&self.db)
        .await
        .context("insert user")?;
        Ok(id)
    }

    async fn update_user(&self, id: i64, user: &NewUser) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE users
               SET name = $1, email = $2, phone = $3
             WHERE id = $4
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(id)
        .execute(&self.db)
        .await
        .context("update user")?;
        Ok(result.rows_affected())
    }

    async fn delete_user(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected())
    }

    async fn user_exists(&self, id: i64) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.db)
        .await
        .context("look up user")?;
        Ok(exists)
    }
}

#[async_trait]
impl ProfessionalStore for PgStore {
    async fn list_professionals(&self, specialty: Option<&str>) -> Result<Vec<Professional>> {
        let rows = sqlx::query_as::<_, Professional>(
            r#"
            SELECT id, name, email, phone, specialty
            FROM professionals
            WHERE $1::TEXT IS NULL OR specialty = $1
            "#,
        )
        .bind(specialty)
        .fetch_all(&self.db)
        .await
        .context("list professionals")?;
        Ok(rows)
    }

    async fn insert_professional(&self, professional: &NewProfessional) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO professionals (name, email, phone, specialty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&professional.name)
        .bind(&professional.email)
        .bind(&professional.phone)
        .bind(&professional.specialty)
        .fetch_one(&self.db)
        .await
        .context("insert professional")?;
        Ok(id)
    }

    async fn update_professional(&self, id: i64, professional: &NewProfessional) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE professionals
               SET name = $1, email = $2, phone = $3, specialty = $4
             WHERE id = $5
            "#,
        )
        .bind(&professional.name)
        .bind(&professional.email)
        .bind(&professional.phone)
        .bind(&professional.specialty)
        .bind(id)
        .execute(&self.db)
        .await
        .context("update professional")?;
        Ok(result.rows_affected())
    }

    async fn delete_professional(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM professionals WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .context("delete professional")?;
        Ok(result.rows_affected())
    }

    async fn professional_exists(&self, id: i64) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM professionals WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.db)
        .await
        .context("look up professional")?;
        Ok(exists)
    }
}

#[async_trait]
impl AppointmentStore for PgStore {
    async fn list_appointments(&self) -> Result<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT id, scheduled_at, service, notes, status, user_id, professional_id
            FROM appointments
            "#,
        )
        .fetch_all(&self.db)
        .await
        .context("list appointments")?;
        Ok(rows)
    }

    async fn insert_appointment(&self, appointment: &NewAppointment) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO appointments (scheduled_at, service, notes, status, user_id, professional_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(appointment.scheduled_at)
        .bind(&appointment.service)
        .bind(&appointment.notes)
        .bind(&appointment.status)
        .bind(appointment.user_id)
        .bind(appointment.professional_id)
        .fetch_one(&self.db)
        .await
        .context("insert appointment")?;
        Ok(id)
    }

    async fn update_appointment(&self, id: i64, changes: &AppointmentChanges) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE appointments
               SET scheduled_at = $1, user_id = $2, professional_id = $3, service = $4, status = $5
             WHERE id = $6
            "#,
        )
        .bind(changes.scheduled_at)
        .bind(changes.user_id)
        .bind(changes.professional_id)
        .bind(&changes.service)
        .bind(&changes.status)
        .bind(id)
        .execute(&self.db)
        .await
        .context("update appointment")?;
        Ok(result.rows_affected())
    }

    async fn delete_appointment(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .context("delete appointment")?;
        Ok(result.rows_affected())
    }
}
