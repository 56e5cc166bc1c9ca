//! Identity registry and current-session persistence.
//!
//! Registered identities and the logged-in identity are kept as JSON
//! under two keys of a [`KeyValueStorage`]. Storage is injected so tests
//! can run against [`MemoryStorage`] while the service uses
//! [`FileStorage`].

mod error;
mod storage;
mod store;
mod types;
mod validation;

pub use error::{SessionError, StorageError, ValidationError};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{SessionStore, CURRENT_IDENTITY_KEY, REGISTERED_IDENTITIES_KEY};
pub use types::*;
pub use validation::{LoginForm, RegistrationForm, MIN_PHONE_LEN};
