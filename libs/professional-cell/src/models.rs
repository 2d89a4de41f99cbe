use serde::{Deserialize, Serialize};

use shared_models::clinic::NewProfessional;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfessionalRequest {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialty: String,
}

impl ProfessionalRequest {
    pub fn validate(self) -> Result<NewProfessional, ProfessionalError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProfessionalError::MissingName);
        }
        Ok(NewProfessional {
            name: name.to_string(),
            email: self.email,
            phone: self.phone,
            specialty: self.specialty.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfessionalSearchQuery {
    pub specialty: Option<String>,
}

impl ProfessionalSearchQuery {
    /// Blank filter means no filter.
    pub fn specialty(&self) -> Option<&str> {
        self.specialty
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProfessionalError {
    #[error("name es obligatorio")]
    MissingName,

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_blank_name_is_rejected() {
        let request = ProfessionalRequest {
            name: String::new(),
            email: None,
            phone: None,
            specialty: "cardiology".to_string(),
        };
        assert_matches!(request.validate(), Err(ProfessionalError::MissingName));
    }

    #[test]
    fn test_blank_specialty_filter_is_ignored() {
        let query = ProfessionalSearchQuery {
            specialty: Some("  ".to_string()),
        };
        assert_eq!(query.specialty(), None);

        let query = ProfessionalSearchQuery {
            specialty: Some("pediatrics".to_string()),
        };
        assert_eq!(query.specialty(), Some("pediatrics"));
    }
}
