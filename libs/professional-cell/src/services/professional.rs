use std::sync::Arc;

use tracing::{debug, info, warn};

use shared_database::ProfessionalStore;
use shared_models::clinic::Professional;

use crate::models::{ProfessionalError, ProfessionalRequest};

pub struct ProfessionalService {
    store: Arc<dyn ProfessionalStore>,
}

impl ProfessionalService {
    pub fn new(store: Arc<dyn ProfessionalStore>) -> Self {
        Self { store }
    }

    pub async fn list_professionals(
        &self,
        specialty: Option<&str>,
    ) -> Result<Vec<Professional>, ProfessionalError> {
        debug!("Listing professionals (specialty: {:?})", specialty);
        Ok(self.store.list_professionals(specialty).await?)
    }

    pub async fn create_professional(
        &self,
        request: ProfessionalRequest,
    ) -> Result<Professional, ProfessionalError> {
        let professional = request.validate()?;

        let id = self.store.insert_professional(&professional).await?;
        info!("Professional {} created ({})", id, professional.specialty);

        Ok(professional.into_professional(id))
    }

    pub async fn update_professional(
        &self,
        id: i64,
        request: ProfessionalRequest,
    ) -> Result<Professional, ProfessionalError> {
        let professional = request.validate()?;

        let affected = self.store.update_professional(id, &professional).await?;
        if affected == 0 {
            warn!("Update of professional {} matched no rows", id);
        }

        Ok(professional.into_professional(id))
    }

    pub async fn delete_professional(&self, id: i64) -> Result<(), ProfessionalError> {
        let affected = self.store.delete_professional(id).await?;
        if affected == 0 {
            warn!("Delete of professional {} matched no rows", id);
        }
        Ok(())
    }
}
