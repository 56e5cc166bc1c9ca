//! Registered identities and the current session.

use crate::error::SessionError;
use crate::storage::KeyValueStorage;
use crate::types::*;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

/// Storage key holding the logged-in identity (password absent).
pub const CURRENT_IDENTITY_KEY: &str = "current-identity";

/// Storage key holding every registered identity (password present).
pub const REGISTERED_IDENTITIES_KEY: &str = "registered-identities";

/// Identity registry plus the single current session.
///
/// Every mutation writes the whole affected collection back to storage
/// before the loaded state changes.
pub struct SessionStore {
    storage: Box<dyn KeyValueStorage>,
    policy: PasswordPolicy,
    current: Option<Identity>,
    identities: Vec<Identity>,
}

impl SessionStore {
    /// Load state from `storage` with plaintext passwords.
    pub fn initialize(storage: impl KeyValueStorage + 'static) -> Self {
        Self::with_policy(storage, PasswordPolicy::default())
    }

    /// Load state from `storage`.
    ///
    /// Missing or malformed data yields an empty state. When no identity
    /// list exists, the demo identity is seeded and persisted.
    pub fn with_policy(storage: impl KeyValueStorage + 'static, policy: PasswordPolicy) -> Self {
        let mut store = Self {
            storage: Box::new(storage),
            policy,
            current: None,
            identities: Vec::new(),
        };

        store.current = store.load::<Identity>(CURRENT_IDENTITY_KEY);

        match store.load::<Vec<Identity>>(REGISTERED_IDENTITIES_KEY) {
            Some(identities) => store.identities = identities,
            None => {
                let mut demo = Identity::demo();
                demo.password = demo.password.as_deref().map(|p| policy.encode(p));
                let seed = vec![demo];

                if let Err(e) = store.persist_identities(&seed) {
                    warn!("Failed to persist demo identity: {}", e);
                } else {
                    info!("Seeded demo identity");
                }
                store.identities = seed;
            }
        }

        info!(
            "Session store initialized ({} identities, logged_in={})",
            store.identities.len(),
            store.current.is_some()
        );

        store
    }

    /// Read and parse a key, discarding anything unreadable.
    fn load<T: DeserializeOwned>(&mut self, key: &str) -> Option<T> {
        let raw = match self.storage.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Failed to read {}: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Discarding malformed {}: {}", key, e);
                if let Err(e) = self.storage.remove(key) {
                    warn!("Failed to remove malformed {}: {}", key, e);
                }
                None
            }
        }
    }

    /// Write `identities` to storage without touching the loaded list.
    fn persist_identities(&mut self, identities: &[Identity]) -> Result<(), SessionError> {
        let json = serde_json::to_string(identities)?;
        self.storage.set(REGISTERED_IDENTITIES_KEY, &json)?;
        debug!("Persisted {} identities", identities.len());
        Ok(())
    }

    /// Write `current` as the stored session without touching the loaded one.
    fn persist_current(&mut self, current: Option<&Identity>) -> Result<(), SessionError> {
        match current {
            Some(identity) => {
                let json = serde_json::to_string(identity)?;
                self.storage.set(CURRENT_IDENTITY_KEY, &json)?;
            }
            None => self.storage.remove(CURRENT_IDENTITY_KEY)?,
        }
        Ok(())
    }

    /// Log in with an exact phone and password match.
    ///
    /// Returns `false` when no registered identity has that pair; the
    /// current session is left untouched in that case.
    #[instrument(skip(self, password))]
    pub fn login(&mut self, phone: &str, password: &str) -> Result<bool, SessionError> {
        let found = self
            .identities
            .iter()
            .find(|i| i.phone == phone && self.policy.matches(i.password.as_deref(), password))
            .map(Identity::without_password);

        let Some(identity) = found else {
            info!("Login rejected");
            return Ok(false);
        };

        self.persist_current(Some(&identity))?;
        info!(id = %identity.id, "Logged in");
        self.current = Some(identity);
        Ok(true)
    }

    /// Register a new identity and make it the current session.
    ///
    /// Phone uniqueness is not checked here; see
    /// [`RegistrationForm::validate`](crate::RegistrationForm::validate).
    ///
    /// Loaded state only changes after the matching write succeeds. If the
    /// session write fails, the identity stays registered but not logged in.
    #[instrument(skip(self, new_identity), fields(phone = %new_identity.phone))]
    pub fn register(&mut self, new_identity: NewIdentity) -> Result<Identity, SessionError> {
        let identity = new_identity.into_identity(self.policy);
        let session = identity.without_password();

        let mut identities = self.identities.clone();
        identities.push(identity);
        self.persist_identities(&identities)?;
        self.identities = identities;

        self.persist_current(Some(&session))?;
        self.current = Some(session.clone());

        info!(id = %session.id, "Registered identity");
        Ok(session)
    }

    /// End the current session.
    #[instrument(skip(self))]
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.persist_current(None)?;
        if let Some(identity) = self.current.take() {
            info!(id = %identity.id, "Logged out");
        }
        Ok(())
    }

    /// All registered identities, passwords stripped.
    pub fn list_identities(&self) -> Vec<Identity> {
        self.identities.iter().map(Identity::without_password).collect()
    }

    /// The logged-in identity, if any.
    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Number of registered identities.
    pub fn count(&self) -> usize {
        self.identities.len()
    }

    pub fn policy(&self) -> PasswordPolicy {
        self.policy
    }
}
