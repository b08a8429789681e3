//! Lookup of bootstrap defaults supplied by the hosting environment.

use std::env;
use std::fs;

use serde_json::Value;

pub const DEFAULTS_VARIABLE: &str = "__WEB_LOGIN_DEFAULTS__";
pub const DEFAULTS_PATH_VARIABLE: &str = "__WEB_LOGIN_DEFAULTS_PATH";

/// Returns the first JSON object found in the `__WEB_LOGIN_DEFAULTS__` environment variable, the
/// file named by `__WEB_LOGIN_DEFAULTS_PATH`, or a `__WEB_LOGIN_DEFAULTS__` global on the page.
pub fn bootstrap_defaults() -> Option<Value> {
    defaults_from_env()
        .or_else(defaults_from_path)
        .or_else(defaults_from_global)
}

fn defaults_from_env() -> Option<Value> {
    let raw = env::var(DEFAULTS_VARIABLE).ok()?;
    parse_json_object(&raw, DEFAULTS_VARIABLE)
}

fn defaults_from_path() -> Option<Value> {
    let path = env::var(DEFAULTS_PATH_VARIABLE).ok()?;
    match fs::read_to_string(&path) {
        Ok(content) => parse_json_object(&content, &path),
        Err(err) => {
            log::warn!("Ignoring bootstrap defaults file {path}: {err}");
            None
        }
    }
}

#[cfg(all(target_arch = "wasm32", feature = "wasm-web"))]
fn defaults_from_global() -> Option<Value> {
    use wasm_bindgen::JsValue;

    let global = js_sys::global();
    let value = js_sys::Reflect::get(&global, &JsValue::from_str(DEFAULTS_VARIABLE)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let serialized = js_sys::JSON::stringify(&value).ok()?.as_string()?;
    parse_json_object(&serialized, DEFAULTS_VARIABLE)
}

#[cfg(not(all(target_arch = "wasm32", feature = "wasm-web")))]
fn defaults_from_global() -> Option<Value> {
    None
}

pub(crate) fn parse_json_object(raw: &str, source: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) if value.is_object() => Some(value),
        Ok(_) => {
            log::warn!("Ignoring bootstrap defaults from {source}: not a JSON object");
            None
        }
        Err(err) => {
            log::warn!("Ignoring bootstrap defaults from {source}: {err}");
            None
        }
    }
}
