use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::dom::document::{ClickHandler, Display, Document, Location};
use crate::dom::error::{host_error, missing_element, DomError, DomResult};
use crate::platform::js::js_error_message;

/// [`Document`] backed by the live page through `web-sys`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocument;

impl BrowserDocument {
    pub fn new() -> Self {
        Self
    }

    fn document(&self) -> DomResult<web_sys::Document> {
        let window = web_sys::window().ok_or(DomError::Unavailable {
            message: "Window not available".into(),
        })?;
        window.document().ok_or(DomError::Unavailable {
            message: "Document not available".into(),
        })
    }

    fn element(&self, id: &str) -> DomResult<web_sys::Element> {
        self.document()?
            .get_element_by_id(id)
            .ok_or_else(|| missing_element(id))
    }

    fn html_element(&self, id: &str) -> DomResult<web_sys::HtmlElement> {
        self.element(id)?
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| DomError::WrongElementType {
                id: id.to_string(),
                expected: "HTML element",
            })
    }
}

impl Document for BrowserDocument {
    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_ok()
    }

    fn set_display(&self, id: &str, display: Display) -> DomResult<()> {
        self.html_element(id)?
            .style()
            .set_property("display", display.as_css())
            .map_err(|err| host_error(format!("Failed to set display on '#{id}': {}", js_error_message(err))))
    }

    fn set_text(&self, id: &str, text: &str) -> DomResult<()> {
        self.element(id)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_image_source(&self, id: &str, url: &str) -> DomResult<()> {
        let image = self
            .element(id)?
            .dyn_into::<web_sys::HtmlImageElement>()
            .map_err(|_| DomError::WrongElementType {
                id: id.to_string(),
                expected: "image element",
            })?;
        image.set_src(url);
        Ok(())
    }

    fn set_inner_html(&self, id: &str, html: &str) -> DomResult<()> {
        self.element(id)?.set_inner_html(html);
        Ok(())
    }

    fn append_script(&self, src: &str) -> DomResult<()> {
        let document = self.document()?;
        let script = document
            .create_element("script")
            .map_err(|err| host_error(format!("Failed to create script: {}", js_error_message(err))))?
            .dyn_into::<web_sys::HtmlScriptElement>()
            .map_err(|_| host_error("Script element has wrong type"))?;
        script.set_async(true);
        script.set_src(src);

        if let Some(head) = document.head() {
            head.append_child(&script)
                .map_err(|err| host_error(format!("Failed to append script to <head>: {}", js_error_message(err))))?;
        } else if let Some(body) = document.body() {
            body.append_child(&script)
                .map_err(|err| host_error(format!("Failed to append script to <body>: {}", js_error_message(err))))?;
        } else {
            return Err(host_error("No <head> or <body> element found"));
        }
        Ok(())
    }

    fn on_click(&self, id: &str, handler: ClickHandler) -> DomResult<()> {
        let element = self.element(id)?;
        let callback = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        element
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .map_err(|err| host_error(format!("Failed to attach click handler: {}", js_error_message(err))))?;
        // Listener lives as long as the page.
        callback.forget();
        Ok(())
    }
}

/// [`Location`] backed by `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLocation;

impl BrowserLocation {
    pub fn new() -> Self {
        Self
    }

    fn location(&self) -> DomResult<web_sys::Location> {
        web_sys::window()
            .map(|window| window.location())
            .ok_or(DomError::Unavailable {
                message: "Window not available".into(),
            })
    }
}

impl Location for BrowserLocation {
    fn href(&self) -> String {
        self.location()
            .ok()
            .and_then(|location| location.href().ok())
            .unwrap_or_default()
    }

    fn origin(&self) -> String {
        self.location()
            .ok()
            .and_then(|location| location.origin().ok())
            .unwrap_or_default()
    }

    fn assign(&self, url: &str) -> DomResult<()> {
        self.location()?
            .set_href(url)
            .map_err(|err| host_error(format!("Failed to navigate to {url}: {}", js_error_message(err))))
    }
}
