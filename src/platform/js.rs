use wasm_bindgen::{JsCast, JsValue};

pub(crate) fn js_error_message(value: JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        format!("{}", error.message())
    } else if let Some(string) = value.as_string() {
        string
    } else {
        format!("{value:?}")
    }
}
