//! Runtime configuration served by `/api/config` and the bootstrap settings that locate it.

pub mod error;
mod loader;
mod settings;
mod types;

pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use settings::BootstrapSettings;
pub use types::{Configuration, FirebaseWebConfig, Ga4Config, OAuthConfig};
