use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use shared_database::{ProfessionalStore, UserStore};

use crate::models::{AppointmentError, EntityKind};

/// Guards writes that reference users or professionals.
#[derive(Clone)]
pub struct ReferenceValidator {
    users: Arc<dyn UserStore>,
    professionals: Arc<dyn ProfessionalStore>,
}

impl ReferenceValidator {
    pub fn new(users: Arc<dyn UserStore>, professionals: Arc<dyn ProfessionalStore>) -> Self {
        Self {
            users,
            professionals,
        }
    }

    /// Primary-key lookup. Storage faults are returned as-is.
    pub async fn exists(&self, kind: EntityKind, id: i64) -> Result<bool> {
        debug!("Checking {} {}", kind, id);
        match kind {
            EntityKind::User => self.users.user_exists(id).await,
            EntityKind::Professional => self.professionals.professional_exists(id).await,
        }
    }

    /// An absent reference is "not provided" and passes.
    pub async fn check(&self, kind: EntityKind, id: Option<i64>) -> Result<(), AppointmentError> {
        let Some(id) = id else {
            return Ok(());
        };

        if self.exists(kind, id).await? {
            Ok(())
        } else {
            warn!("Rejected write: {} {} does not exist", kind, id);
            Err(AppointmentError::MissingReference(kind))
        }
    }

    /// User first, then professional; stops at the first failure.
    pub async fn check_all(
        &self,
        user_id: Option<i64>,
        professional_id: Option<i64>,
    ) -> Result<(), AppointmentError> {
        self.check(EntityKind::User, user_id).await?;
        self.check(EntityKind::Professional, professional_id).await
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use shared_database::MemoryStore;
    use shared_models::clinic::{NewProfessional, NewUser};

    use super::*;

    async fn seeded() -> (Arc<MemoryStore>, ReferenceValidator) {
        let store = Arc::new(MemoryStore::new());
        store
            .insert_user(&NewUser {
                name: "Jane Doe".to_string(),
                email: None,
                phone: None,
            })
            .await
            .unwrap();
        store
            .insert_professional(&NewProfessional {
                name: "Dr. Paz".to_string(),
                email: None,
                phone: None,
                specialty: "cardiology".to_string(),
            })
            .await
            .unwrap();
        let validator = ReferenceValidator::new(store.clone(), store.clone());
        (store, validator)
    }

    #[tokio::test]
    async fn test_exists_by_kind() {
        let (_, validator) = seeded().await;

        assert!(validator.exists(EntityKind::User, 1).await.unwrap());
        assert!(validator.exists(EntityKind::Professional, 1).await.unwrap());
        assert!(!validator.exists(EntityKind::User, 2).await.unwrap());
        assert!(!validator.exists(EntityKind::Professional, 9999).await.unwrap());
    }

    #[tokio::test]
    async fn test_absent_reference_skips_lookup() {
        let (store, validator) = seeded().await;
        // A lookup would fail; skipping it must not.
        store.set_unavailable(true);

        assert!(validator.check(EntityKind::User, None).await.is_ok());
        assert!(validator.check_all(None, None).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_reference_names_kind() {
        let (_, validator) = seeded().await;

        assert_matches!(
            validator.check_all(Some(9999), Some(1)).await,
            Err(AppointmentError::MissingReference(EntityKind::User))
        );
        assert_matches!(
            validator.check_all(Some(1), Some(9999)).await,
            Err(AppointmentError::MissingReference(EntityKind::Professional))
        );
        assert!(validator.check_all(Some(1), Some(1)).await.is_ok());
    }

    #[tokio::test]
    async fn test_user_is_checked_before_professional() {
        let (_, validator) = seeded().await;

        assert_matches!(
            validator.check_all(Some(50), Some(60)).await,
            Err(AppointmentError::MissingReference(EntityKind::User))
        );
    }

    #[tokio::test]
    async fn test_storage_fault_propagates() {
        let (store, validator) = seeded().await;
        store.set_unavailable(true);

        assert!(validator.exists(EntityKind::User, 1).await.is_err());
        assert_matches!(
            validator.check(EntityKind::Professional, Some(1)).await,
            Err(AppointmentError::Database(_))
        );
    }
}
