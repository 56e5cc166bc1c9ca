//! Identity records and credential policy.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// The password is present in the persisted registry and absent from
/// every copy handed out as a session or listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub name: String,
    /// Login key. Uniqueness is only checked when a registration form is validated.
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Identity {
    /// Copy of this identity with the password removed.
    pub fn without_password(&self) -> Self {
        Self {
            password: None,
            ..self.clone()
        }
    }

    /// The demo account available on a fresh install.
    pub fn demo() -> Self {
        Self {
            id: "1".into(),
            name: "अनिल यादव".into(),
            phone: "9876543210".into(),
            password: Some("password123".into()),
            location: Some("जयपुर, राजस्थान".into()),
        }
    }
}

/// Registration payload before an id has been assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewIdentity {
    pub name: String,
    pub phone: String,
    pub password: String,
    #[serde(default)]
    pub location: Option<String>,
}

impl NewIdentity {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            password: password.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Assign a time-based id. Ids are not checked against existing records.
    pub(crate) fn into_identity(self, policy: PasswordPolicy) -> Identity {
        Identity {
            id: generate_id(),
            name: self.name,
            phone: self.phone,
            password: Some(policy.encode(&self.password)),
            location: self.location,
        }
    }
}

/// How passwords are kept in the persisted registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordPolicy {
    /// Stored and compared verbatim.
    #[default]
    Plaintext,
    /// Stored as a hex SHA-256 digest.
    Sha256,
}

impl PasswordPolicy {
    /// Encode a submitted password the way it is stored.
    pub fn encode(&self, password: &str) -> String {
        match self {
            PasswordPolicy::Plaintext => password.to_string(),
            PasswordPolicy::Sha256 => hash_secret(password),
        }
    }

    /// Check a submitted password against a stored value.
    pub fn matches(&self, stored: Option<&str>, submitted: &str) -> bool {
        stored.is_some_and(|stored| stored == self.encode(submitted))
    }
}

/// Hash a secret using SHA-256.
pub fn hash_secret(secret: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Milliseconds since the epoch, as a string.
pub(crate) fn generate_id() -> String {
    Utc::now().timestamp_millis().to_string()
}
