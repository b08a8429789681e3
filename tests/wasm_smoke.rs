#![cfg(all(target_arch = "wasm32", feature = "wasm-web"))]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use js_sys::{Array, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_login_demo::analytics::{AnalyticsClient, AnalyticsSettings, BrowserGtag, EventParams, GtagCommand, GtagHost};
use web_login_demo::config::Configuration;
use web_login_demo::dom::{element_ids, BrowserDocument, Display, Document};
use web_login_demo::page::PageKind;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(id: &str, tag: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(existing) = document.get_element_by_id(id) {
        existing.remove();
    }
    let element = document.create_element(tag).unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn data_layer(name: &str) -> Array {
    let window = web_sys::window().unwrap();
    Reflect::get(&window, &JsValue::from_str(name))
        .unwrap()
        .dyn_into::<Array>()
        .unwrap()
}

#[wasm_bindgen_test]
fn browser_document_updates_elements() {
    let element = mount(element_ids::USER_NAME, "span");
    let document = BrowserDocument::new();

    assert!(document.has_element(element_ids::USER_NAME));
    document.set_text(element_ids::USER_NAME, "<b>Ada</b>").unwrap();
    document.set_display(element_ids::USER_NAME, Display::Flex).unwrap();

    assert_eq!(element.text_content().as_deref(), Some("<b>Ada</b>"));
    let html: web_sys::HtmlElement = element.dyn_into().unwrap();
    assert_eq!(html.style().get_property_value("display").unwrap(), "flex");
}

#[wasm_bindgen_test]
fn missing_elements_are_reported() {
    let document = BrowserDocument::new();
    let err = document.set_text("not-on-this-page", "x").unwrap_err();
    assert!(err.to_string().contains("not-on-this-page"));
}

#[wasm_bindgen_test]
fn image_source_requires_an_image() {
    mount(element_ids::USER_PHOTO, "img");
    mount(element_ids::USER_EMAIL, "span");
    let document = BrowserDocument::new();

    document
        .set_image_source(element_ids::USER_PHOTO, "https://example.com/a.png")
        .unwrap();
    assert!(document
        .set_image_source(element_ids::USER_EMAIL, "https://example.com/a.png")
        .is_err());
}

#[wasm_bindgen_test]
fn click_handlers_fire() {
    let element = mount(element_ids::LOGIN_BUTTON, "button");
    let document = BrowserDocument::new();
    let clicks = Arc::new(AtomicUsize::new(0));
    let counter = clicks.clone();
    document
        .on_click(
            element_ids::LOGIN_BUTTON,
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .unwrap();

    element.dyn_into::<web_sys::HtmlElement>().unwrap().click();
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert_eq!(PageKind::resolve(&document), PageKind::Login);
}

#[wasm_bindgen_test]
fn gtag_pushes_arguments_to_the_data_layer() {
    let gtag = BrowserGtag::new();
    gtag.install("smokeDataLayer").unwrap();
    gtag.push(&GtagCommand::Event {
        name: "page_view".into(),
        params: EventParams::new(),
    })
    .unwrap();

    let layer = data_layer("smokeDataLayer");
    assert_eq!(layer.length(), 1);
    let entry = layer.get(0);
    assert_eq!(Reflect::get(&entry, &JsValue::from_f64(0.0)).unwrap(), "event");
    assert_eq!(Reflect::get(&entry, &JsValue::from_f64(1.0)).unwrap(), "page_view");
}

#[wasm_bindgen_test]
fn analytics_client_initializes_against_the_page() {
    let settings = AnalyticsSettings {
        data_layer_name: "clientDataLayer".into(),
        ..AnalyticsSettings::default()
    };
    let client = AnalyticsClient::new(Arc::new(BrowserDocument::new()), Arc::new(BrowserGtag::new()), settings);
    let config: Configuration =
        serde_json::from_value(serde_json::json!({ "ga4": { "measurementId": "G-SMOKE" } })).unwrap();

    client.initialize(&config);
    assert!(client.is_initialized());
    client.track("login_initiated", EventParams::new());

    // js, config, event
    assert_eq!(data_layer("clientDataLayer").length(), 3);
}
