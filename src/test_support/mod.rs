//! Test utilities shared across crate-level unit tests.

#[cfg(not(target_arch = "wasm32"))]
pub mod env;
pub mod fixtures;
pub mod http;

#[cfg(not(target_arch = "wasm32"))]
pub use env::DefaultsEnv;
pub use fixtures::{channel_json, channel_summary, config_with_measurement_id, profile_json};
#[cfg(not(target_arch = "wasm32"))]
pub use http::start_mock_server;
pub use http::StubHttpClient;
