//! Browser entry point (`wasm-web`).

use std::sync::Arc;

use wasm_bindgen::prelude::*;

use crate::analytics::BrowserGtag;
use crate::config::BootstrapSettings;
use crate::dom::{BrowserDocument, BrowserLocation, Location};
use crate::http::ReqwestHttpClient;
use crate::logger::init_logging;
use crate::page::{PageController, PageHosts};

/// Starts the bootstrap for the page that loaded the module. Call once, after the DOM is ready.
#[wasm_bindgen]
pub fn bootstrap() -> Result<(), JsValue> {
    let settings = BootstrapSettings::from_environment();
    init_logging(settings.log_level());

    let location = Arc::new(BrowserLocation::new());
    let http = ReqwestHttpClient::new(&location.origin()).map_err(|err| JsValue::from_str(&err.to_string()))?;
    let hosts = PageHosts {
        document: Arc::new(BrowserDocument::new()),
        location,
        http: Arc::new(http),
        gtag: Arc::new(BrowserGtag::new()),
    };

    PageController::new(hosts, settings).start();
    Ok(())
}
