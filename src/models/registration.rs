use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError};

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Name and email are both required: {0}")]
    Incomplete(#[from] validator::ValidationErrors),

    #[error("Registration was already submitted")]
    AlreadySubmitted,
}

/// Sign-up form. Only checks that both fields have some content.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegistrationForm {
    #[validate(custom = "validate_not_blank")]
    pub name: String,

    #[validate(custom = "validate_not_blank")]
    pub email: String,

    #[serde(skip)]
    submitted: Option<RegistrationReceipt>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    pub name: String,
    pub email: String,
    pub submitted_at: DateTime<Utc>,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted.is_some()
    }

    pub fn receipt(&self) -> Option<&RegistrationReceipt> {
        self.submitted.as_ref()
    }

    /// Records the registration and clears the input fields.
    pub fn submit(&mut self) -> Result<RegistrationReceipt, RegistrationError> {
        if self.submitted.is_some() {
            return Err(RegistrationError::AlreadySubmitted);
        }
        self.validate()?;

        let receipt = RegistrationReceipt {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            submitted_at: Utc::now(),
        };
        self.name.clear();
        self.email.clear();
        self.submitted = Some(receipt.clone());

        Ok(receipt)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
