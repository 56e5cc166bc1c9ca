//! Login and registration form checks run before the store is touched.

use crate::error::ValidationError;
use crate::types::{Identity, NewIdentity};
use serde::Deserialize;

/// Minimum number of characters in a phone number.
pub const MIN_PHONE_LEN: usize = 10;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    pub fn new(phone: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            password: password.into(),
        }
    }

    /// Both fields must be non-empty. Whitespace counts as filled in.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.phone.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub location: String,
}

impl RegistrationForm {
    /// Check the form against the already registered identities.
    ///
    /// Checks run in order: required fields, password confirmation, phone
    /// length, phone uniqueness.
    pub fn validate(&self, existing: &[Identity]) -> Result<NewIdentity, ValidationError> {
        let required = [
            &self.name,
            &self.phone,
            &self.password,
            &self.confirm_password,
            &self.location,
        ];
        if required.iter().any(|field| field.is_empty()) {
            return Err(ValidationError::MissingFields);
        }

        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        if self.phone.chars().count() < MIN_PHONE_LEN {
            return Err(ValidationError::InvalidPhone);
        }

        if existing.iter().any(|identity| identity.phone == self.phone) {
            return Err(ValidationError::PhoneTaken(self.phone.clone()));
        }

        Ok(NewIdentity::new(self.name.as_str(), self.phone.as_str(), self.password.as_str())
            .with_location(self.location.as_str()))
    }
}
