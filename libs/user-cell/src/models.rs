use serde::{Deserialize, Serialize};

use shared_models::clinic::NewUser;

/// Body of `POST /users` and `PUT /users/{id}`. Updates replace every field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserRequest {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UserRequest {
    pub fn validate(self) -> Result<NewUser, UserError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UserError::MissingName);
        }
        Ok(NewUser {
            name: name.to_string(),
            email: self.email,
            phone: self.phone,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("name es obligatorio")]
    MissingName,

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}
