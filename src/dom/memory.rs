use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

use crate::dom::document::{element_ids, ClickHandler, Display, Document, Location};
use crate::dom::error::{missing_element, DomResult};

/// Observable state of a single element held by [`MemoryDocument`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementSnapshot {
    pub display: Option<Display>,
    pub text: Option<String>,
    pub image_source: Option<String>,
    pub inner_html: Option<String>,
    pub click_handlers: usize,
}

#[derive(Default)]
struct MemoryElement {
    display: Option<Display>,
    text: Option<String>,
    image_source: Option<String>,
    inner_html: Option<String>,
    click_handlers: Vec<ClickHandler>,
}

impl MemoryElement {
    fn snapshot(&self) -> ElementSnapshot {
        ElementSnapshot {
            display: self.display,
            text: self.text.clone(),
            image_source: self.image_source.clone(),
            inner_html: self.inner_html.clone(),
            click_handlers: self.click_handlers.len(),
        }
    }
}

/// In-process document that records every mutation.
///
/// Used for native runs and tests; element ids must be declared up front, mirroring the static
/// markup of the real pages.
#[derive(Default)]
pub struct MemoryDocument {
    elements: Mutex<HashMap<String, MemoryElement>>,
    scripts: Mutex<Vec<String>>,
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<String> = self.elements.lock().unwrap().keys().cloned().collect();
        ids.sort();
        f.debug_struct("MemoryDocument")
            .field("elements", &ids)
            .field("scripts", &self.scripts.lock().unwrap())
            .finish()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let document = Self::new();
        for id in ids {
            document.add_element(id);
        }
        document
    }

    /// Markup anchors of the login page.
    pub fn login_page() -> Self {
        Self::with_elements([element_ids::LOGIN_BUTTON])
    }

    /// Markup anchors and regions of the post-login success page.
    pub fn success_page() -> Self {
        Self::with_elements([
            element_ids::LOADING_STATE,
            element_ids::USER_INFO,
            element_ids::ERROR_STATE,
            element_ids::USER_PHOTO,
            element_ids::USER_NAME,
            element_ids::USER_EMAIL,
            element_ids::USER_ID,
            element_ids::EMAIL_VERIFIED,
            element_ids::YOUTUBE_DATA,
            element_ids::YOUTUBE_EVENT,
        ])
    }

    pub fn add_element(&self, id: impl Into<String>) {
        self.elements
            .lock()
            .unwrap()
            .entry(id.into())
            .or_default();
    }

    pub fn element(&self, id: &str) -> Option<ElementSnapshot> {
        self.elements.lock().unwrap().get(id).map(MemoryElement::snapshot)
    }

    pub fn display_of(&self, id: &str) -> Option<Display> {
        self.element(id).and_then(|element| element.display)
    }

    pub fn text_of(&self, id: &str) -> Option<String> {
        self.element(id).and_then(|element| element.text)
    }

    pub fn inner_html_of(&self, id: &str) -> Option<String> {
        self.element(id).and_then(|element| element.inner_html)
    }

    /// Script sources appended so far, in insertion order.
    pub fn scripts(&self) -> Vec<String> {
        self.scripts.lock().unwrap().clone()
    }

    /// Fires the click handlers registered on `id`.
    pub fn click(&self, id: &str) -> DomResult<()> {
        // Handlers run outside the lock so they may mutate the document themselves.
        let handlers = {
            let guard = self.elements.lock().unwrap();
            let element = guard.get(id).ok_or_else(|| missing_element(id))?;
            element.click_handlers.clone()
        };
        for handler in handlers {
            handler();
        }
        Ok(())
    }

    fn with_element<F>(&self, id: &str, apply: F) -> DomResult<()>
    where
        F: FnOnce(&mut MemoryElement),
    {
        let mut guard = self.elements.lock().unwrap();
        let element = guard.get_mut(id).ok_or_else(|| missing_element(id))?;
        apply(element);
        Ok(())
    }
}

impl Document for MemoryDocument {
    fn has_element(&self, id: &str) -> bool {
        self.elements.lock().unwrap().contains_key(id)
    }

    fn set_display(&self, id: &str, display: Display) -> DomResult<()> {
        self.with_element(id, |element| element.display = Some(display))
    }

    fn set_text(&self, id: &str, text: &str) -> DomResult<()> {
        self.with_element(id, |element| element.text = Some(text.to_string()))
    }

    fn set_image_source(&self, id: &str, url: &str) -> DomResult<()> {
        self.with_element(id, |element| element.image_source = Some(url.to_string()))
    }

    fn set_inner_html(&self, id: &str, html: &str) -> DomResult<()> {
        self.with_element(id, |element| element.inner_html = Some(html.to_string()))
    }

    fn append_script(&self, src: &str) -> DomResult<()> {
        self.scripts.lock().unwrap().push(src.to_string());
        Ok(())
    }

    fn on_click(&self, id: &str, handler: ClickHandler) -> DomResult<()> {
        self.with_element(id, |element| element.click_handlers.push(handler))
    }
}

/// In-process location that records navigations instead of performing them.
#[derive(Debug)]
pub struct MemoryLocation {
    href: Mutex<String>,
    navigations: Mutex<Vec<String>>,
}

impl MemoryLocation {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Mutex::new(href.into()),
            navigations: Mutex::new(Vec::new()),
        }
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }
}

impl Location for MemoryLocation {
    fn href(&self) -> String {
        self.href.lock().unwrap().clone()
    }

    fn origin(&self) -> String {
        let href = self.href();
        match url::Url::parse(&href) {
            Ok(parsed) => parsed.origin().ascii_serialization(),
            Err(_) => href,
        }
    }

    fn assign(&self, url: &str) -> DomResult<()> {
        let resolved = url::Url::parse(&self.href())
            .and_then(|base| base.join(url))
            .map(|joined| joined.to_string())
            .unwrap_or_else(|_| url.to_string());
        self.navigations.lock().unwrap().push(url.to_string());
        *self.href.lock().unwrap() = resolved;
        Ok(())
    }
}
