use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde_json::Value;
use url::Url;

use crate::analytics::constants::{DEFAULT_DATA_LAYER_NAME, DEFAULT_GTAG_SCRIPT_URL};
use crate::analytics::error::{host_error, missing_measurement_id, AnalyticsResult};
use crate::analytics::gtag::{EventParams, GtagCommand, GtagHost};
use crate::config::Configuration;
use crate::dom::Document;

/// Where the vendor script is loaded from and which global queue it drains.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyticsSettings {
    pub script_url: String,
    pub data_layer_name: String,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            script_url: DEFAULT_GTAG_SCRIPT_URL.to_string(),
            data_layer_name: DEFAULT_DATA_LAYER_NAME.to_string(),
        }
    }
}

/// Lifecycle of the analytics tag for one page load. There is no transition back to
/// `Uninitialized`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalyticsState {
    Uninitialized,
    Initialized { measurement_id: String },
    Disabled,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsEvent {
    pub name: String,
    pub params: EventParams,
}

impl AnalyticsEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: EventParams::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// GA4 client for a single page load.
///
/// Events tracked before a successful [`initialize`](Self::initialize), or after it determined
/// analytics cannot run, are dropped with a warning. They are never queued for later delivery.
#[derive(Clone)]
pub struct AnalyticsClient {
    inner: Arc<AnalyticsInner>,
}

struct AnalyticsInner {
    document: Arc<dyn Document>,
    gtag: Arc<dyn GtagHost>,
    settings: AnalyticsSettings,
    state: Mutex<AnalyticsState>,
}

impl fmt::Debug for AnalyticsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyticsClient")
            .field("settings", &self.inner.settings)
            .field("state", &self.state())
            .finish()
    }
}

impl AnalyticsClient {
    pub fn new(document: Arc<dyn Document>, gtag: Arc<dyn GtagHost>, settings: AnalyticsSettings) -> Self {
        Self {
            inner: Arc::new(AnalyticsInner {
                document,
                gtag,
                settings,
                state: Mutex::new(AnalyticsState::Uninitialized),
            }),
        }
    }

    pub fn state(&self) -> AnalyticsState {
        self.inner.state.lock().unwrap().clone()
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.state(), AnalyticsState::Initialized { .. })
    }

    /// Loads the gtag.js script for the configured measurement ID, installs the global queue and
    /// queues the `js` timestamp and `config` commands.
    ///
    /// Without a measurement ID the client enters [`AnalyticsState::Disabled`] and touches
    /// neither the document nor the queue.
    pub fn initialize(&self, config: &Configuration) {
        let mut state = self.inner.state.lock().unwrap();
        if *state != AnalyticsState::Uninitialized {
            log::warn!("Google Analytics 4 initialize ignored; current state is {:?}", *state);
            return;
        }

        let measurement_id = match resolve_measurement_id(config) {
            Ok(id) => id,
            Err(err) => {
                log::warn!("GA4 Measurement ID not configured: {err}");
                *state = AnalyticsState::Disabled;
                return;
            }
        };

        match self.bootstrap(&measurement_id) {
            Ok(()) => {
                log::info!("Google Analytics 4 initialized");
                *state = AnalyticsState::Initialized { measurement_id };
            }
            Err(err) => {
                log::warn!("Google Analytics 4 could not be initialized: {err}");
                *state = AnalyticsState::Disabled;
            }
        }
    }

    pub fn track(&self, name: &str, params: EventParams) {
        self.track_event(AnalyticsEvent {
            name: name.to_string(),
            params,
        });
    }

    /// Forwards `event` as `gtag('event', name, params)` when initialized; otherwise logs and
    /// drops it.
    pub fn track_event(&self, event: AnalyticsEvent) {
        if !self.is_initialized() {
            log::warn!("GA4 not initialized, event not tracked: {}", event.name);
            return;
        }

        let AnalyticsEvent { name, params } = event;
        let rendered = Value::Object(params.clone().into_iter().collect());
        match self.inner.gtag.push(&GtagCommand::Event {
            name: name.clone(),
            params,
        }) {
            Ok(()) => log::info!("Event tracked: {name} {rendered}"),
            Err(err) => log::warn!("Event {name} could not be queued: {err}"),
        }
    }

    /// The script tag goes in last: if any queue step fails, the page never loads the vendor
    /// script.
    fn bootstrap(&self, measurement_id: &str) -> AnalyticsResult<()> {
        let src = gtag_script_url(&self.inner.settings.script_url, measurement_id)?;

        self.inner.gtag.install(&self.inner.settings.data_layer_name)?;
        self.inner.gtag.push(&GtagCommand::Js(Utc::now()))?;
        self.inner.gtag.push(&GtagCommand::Config {
            measurement_id: measurement_id.to_string(),
            options: EventParams::from([("send_page_view".to_string(), Value::Bool(true))]),
        })?;

        self.inner
            .document
            .append_script(&src)
            .map_err(|err| host_error(format!("failed to insert gtag script: {err}")))
    }
}

fn resolve_measurement_id(config: &Configuration) -> AnalyticsResult<String> {
    config
        .analytics
        .measurement_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| missing_measurement_id("configuration does not include ga4.measurementId"))
}

/// Builds `<script_url>?id=<measurement_id>`.
pub fn gtag_script_url(script_url: &str, measurement_id: &str) -> AnalyticsResult<String> {
    Url::parse_with_params(script_url, &[("id", measurement_id)])
        .map(String::from)
        .map_err(|err| host_error(format!("invalid gtag script URL '{script_url}': {err}")))
}
