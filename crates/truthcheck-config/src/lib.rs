//! # truthcheck config
//!
//! Configuration file handling and the live settings store.

mod error;
mod loader;
mod schema;
mod store;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use store::SettingsStore;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
