use std::sync::Arc;

use tracing::{debug, info, warn};

use shared_database::AppointmentStore;
use shared_models::clinic::{
    Appointment, AppointmentChanges, NewAppointment, DEFAULT_APPOINTMENT_STATUS,
};

use crate::models::{
    AppointmentError, CreateAppointmentRequest, CreatedAppointment, UpdateAppointmentRequest,
    UpdatedAppointment,
};
use crate::services::reference::ReferenceValidator;

pub struct AppointmentWriter {
    appointments: Arc<dyn AppointmentStore>,
    references: ReferenceValidator,
}

impl AppointmentWriter {
    pub fn new(appointments: Arc<dyn AppointmentStore>, references: ReferenceValidator) -> Self {
        Self {
            appointments,
            references,
        }
    }

    pub async fn list(&self) -> Result<Vec<Appointment>, AppointmentError> {
        Ok(self.appointments.list_appointments().await?)
    }

    /// Nothing is written unless every supplied reference resolves.
    pub async fn create(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<CreatedAppointment, AppointmentError> {
        debug!(
            "Creating appointment at {} for service {}",
            request.scheduled_at, request.service
        );

        self.references
            .check_all(request.user_id, request.professional_id)
            .await?;

        let appointment = NewAppointment {
            scheduled_at: request.scheduled_at,
            service: request.service,
            notes: request.notes,
            status: DEFAULT_APPOINTMENT_STATUS.to_string(),
            user_id: request.user_id,
            professional_id: request.professional_id,
        };
        let id = self.appointments.insert_appointment(&appointment).await?;
        info!("Appointment {} created", id);

        Ok(CreatedAppointment {
            id,
            scheduled_at: appointment.scheduled_at,
            service: appointment.service,
            notes: appointment.notes,
            user_id: appointment.user_id,
            professional_id: appointment.professional_id,
        })
    }

    /// Full-row replace. An unknown `id` affects nothing and still echoes the payload.
    pub async fn update(
        &self,
        id: i64,
        request: UpdateAppointmentRequest,
    ) -> Result<UpdatedAppointment, AppointmentError> {
        debug!("Updating appointment {}", id);

        self.references
            .check_all(request.user_id, request.professional_id)
            .await?;

        let changes = AppointmentChanges {
            scheduled_at: request.scheduled_at,
            service: request.service,
            status: request.status,
            user_id: request.user_id,
            professional_id: request.professional_id,
        };
        let affected = self.appointments.update_appointment(id, &changes).await?;
        if affected == 0 {
            warn!("Update of appointment {} matched no rows", id);
        } else {
            info!("Appointment {} updated", id);
        }

        Ok(UpdatedAppointment {
            id,
            scheduled_at: changes.scheduled_at,
            user_id: changes.user_id,
            professional_id: changes.professional_id,
            service: changes.service,
            status: changes.status,
        })
    }

    /// Succeeds whether or not the row existed.
    pub async fn delete(&self, id: i64) -> Result<(), AppointmentError> {
        let affected = self.appointments.delete_appointment(id).await?;
        if affected == 0 {
            warn!("Delete of appointment {} matched no rows", id);
        } else {
            info!("Appointment {} deleted", id);
        }
        Ok(())
    }
}
