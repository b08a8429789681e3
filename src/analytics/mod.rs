mod client;
pub mod constants;
pub mod error;
mod gtag;

pub use client::{gtag_script_url, AnalyticsClient, AnalyticsEvent, AnalyticsSettings, AnalyticsState};
#[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
pub use gtag::BrowserGtag;
pub use gtag::{EventParams, GtagCommand, GtagHost, GtagRegistry, GtagState};
