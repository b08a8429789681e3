//! The `gtag()` command queue that the GA4 vendor script drains once it has loaded.
//!
//! Commands are buffered by the host's data layer until the script arrives; this crate never
//! waits for the script itself. [`GtagRegistry`] keeps the queue in memory, [`BrowserGtag`]
//! installs the real `window.dataLayer`/`window.gtag` pair.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::analytics::error::{host_error, AnalyticsResult};

pub type EventParams = BTreeMap<String, Value>;

/// One `gtag(kind, target, payload)` invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum GtagCommand {
    /// `gtag('js', new Date())`
    Js(DateTime<Utc>),
    /// `gtag('config', measurementId, options)`
    Config {
        measurement_id: String,
        options: EventParams,
    },
    /// `gtag('event', name, params)`
    Event { name: String, params: EventParams },
}

impl GtagCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            GtagCommand::Js(_) => "js",
            GtagCommand::Config { .. } => "config",
            GtagCommand::Event { .. } => "event",
        }
    }
}

/// Host side of the vendor contract: a global queueing function receiving command triples.
pub trait GtagHost: Send + Sync {
    /// Establishes the data layer named `data_layer_name` (reusing an existing one) and the
    /// global `gtag` function feeding it.
    fn install(&self, data_layer_name: &str) -> AnalyticsResult<()>;

    fn push(&self, command: &GtagCommand) -> AnalyticsResult<()>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GtagState {
    pub data_layer_name: Option<String>,
    pub commands: Vec<GtagCommand>,
}

impl GtagState {
    pub fn installed(&self) -> bool {
        self.data_layer_name.is_some()
    }

    /// `(name, params)` of every queued `event` command, in order.
    pub fn events(&self) -> Vec<(String, EventParams)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                GtagCommand::Event { name, params } => Some((name.clone(), params.clone())),
                _ => None,
            })
            .collect()
    }
}

/// In-memory [`GtagHost`] recording the queued commands.
#[derive(Debug, Default)]
pub struct GtagRegistry {
    state: Mutex<GtagState>,
}

impl GtagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> GtagState {
        self.state.lock().unwrap().clone()
    }

    pub fn reset(&self) {
        *self.state.lock().unwrap() = GtagState::default();
    }
}

impl GtagHost for GtagRegistry {
    fn install(&self, data_layer_name: &str) -> AnalyticsResult<()> {
        self.state.lock().unwrap().data_layer_name = Some(data_layer_name.to_string());
        Ok(())
    }

    fn push(&self, command: &GtagCommand) -> AnalyticsResult<()> {
        let mut guard = self.state.lock().unwrap();
        if !guard.installed() {
            return Err(host_error("gtag has not been installed"));
        }
        guard.commands.push(command.clone());
        Ok(())
    }
}

#[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
pub use web::BrowserGtag;

#[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
mod web {
    use js_sys::{Array, Date, Function, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    use super::{EventParams, GtagCommand, GtagHost};
    use crate::analytics::error::{host_error, internal_error, AnalyticsResult};
    use crate::platform::js::js_error_message;

    const GTAG_GLOBAL: &str = "gtag";

    /// [`GtagHost`] bound to `window.dataLayer` and `window.gtag`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserGtag;

    impl BrowserGtag {
        pub fn new() -> Self {
            Self
        }
    }

    impl GtagHost for BrowserGtag {
        fn install(&self, data_layer_name: &str) -> AnalyticsResult<()> {
            let window = window()?;
            let key = JsValue::from_str(data_layer_name);
            let existing = Reflect::get(&window, &key).map_err(host_failure)?;
            if !Array::is_array(&existing) {
                Reflect::set(&window, &key, &Array::new()).map_err(host_failure)?;
            }

            // gtag.js only accepts `arguments` objects, so the queue function is plain JS.
            let quoted = serde_json::to_string(data_layer_name)
                .map_err(|err| internal_error(format!("invalid data layer name: {err}")))?;
            let gtag = Function::new_no_args(&format!("window[{quoted}].push(arguments);"));
            Reflect::set(&window, &JsValue::from_str(GTAG_GLOBAL), &gtag).map_err(host_failure)?;
            Ok(())
        }

        fn push(&self, command: &GtagCommand) -> AnalyticsResult<()> {
            let window = window()?;
            let gtag = Reflect::get(&window, &JsValue::from_str(GTAG_GLOBAL))
                .map_err(host_failure)?
                .dyn_into::<Function>()
                .map_err(|_| host_error("window.gtag is not a function"))?;

            let args = Array::new();
            args.push(&JsValue::from_str(command.kind()));
            match command {
                GtagCommand::Js(timestamp) => {
                    args.push(&Date::new(&JsValue::from_f64(timestamp.timestamp_millis() as f64)));
                }
                GtagCommand::Config {
                    measurement_id,
                    options,
                } => {
                    args.push(&JsValue::from_str(measurement_id));
                    args.push(&to_js(options)?);
                }
                GtagCommand::Event { name, params } => {
                    args.push(&JsValue::from_str(name));
                    args.push(&to_js(params)?);
                }
            }

            gtag.apply(&window, &args).map_err(host_failure)?;
            Ok(())
        }
    }

    fn window() -> AnalyticsResult<web_sys::Window> {
        web_sys::window().ok_or_else(|| host_error("Window not available"))
    }

    fn to_js(params: &EventParams) -> AnalyticsResult<JsValue> {
        let serialized = serde_json::to_string(params)
            .map_err(|err| internal_error(format!("failed to serialize gtag parameters: {err}")))?;
        js_sys::JSON::parse(&serialized).map_err(host_failure)
    }

    fn host_failure(value: JsValue) -> crate::analytics::error::AnalyticsError {
        host_error(js_error_message(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_requires_install() {
        let registry = GtagRegistry::new();
        let err = registry.push(&GtagCommand::Js(Utc::now())).unwrap_err();
        assert_eq!(err.code_str(), "analytics/host");

        registry.install("dataLayer").unwrap();
        registry
            .push(&GtagCommand::Event {
                name: "x".into(),
                params: EventParams::new(),
            })
            .unwrap();

        let state = registry.snapshot();
        assert_eq!(state.data_layer_name.as_deref(), Some("dataLayer"));
        assert_eq!(state.events(), vec![("x".to_string(), EventParams::new())]);
    }

    #[test]
    fn reset_clears_queue() {
        let registry = GtagRegistry::new();
        registry.install("dataLayer").unwrap();
        registry.push(&GtagCommand::Js(Utc::now())).unwrap();
        registry.reset();
        assert_eq!(registry.snapshot(), GtagState::default());
    }
}
