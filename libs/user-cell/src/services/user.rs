use std::sync::Arc;

use tracing::{debug, info, warn};

use shared_database::UserStore;
use shared_models::clinic::User;

use crate::models::{UserError, UserRequest};

pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        Ok(self.store.list_users().await?)
    }

    pub async fn create_user(&self, request: UserRequest) -> Result<User, UserError> {
        let user = request.validate()?;
        debug!("Creating user {}", user.name);

        let id = self.store.insert_user(&user).await?;
        info!("User {} created", id);

        Ok(user.into_user(id))
    }

    /// Full replace. A missing id is not an error: the payload is echoed back.
    pub async fn update_user(&self, id: i64, request: UserRequest) -> Result<User, UserError> {
        let user = request.validate()?;

        let affected = self.store.update_user(id, &user).await?;
        if affected == 0 {
            warn!("Update of user {} matched no rows", id);
        }

        Ok(user.into_user(id))
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), UserError> {
        let affected = self.store.delete_user(id).await?;
        if affected == 0 {
            warn!("Delete of user {} matched no rows", id);
        }
        Ok(())
    }
}
