use std::fmt;

use crate::dom::{element_ids, Document};

/// Which page variant is loaded, decided once from the anchor elements present at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Login,
    Success,
    Other,
}

impl PageKind {
    /// The login anchor wins when both anchors are present.
    pub fn resolve(document: &dyn Document) -> Self {
        if document.has_element(element_ids::LOGIN_BUTTON) {
            PageKind::Login
        } else if document.has_element(element_ids::USER_INFO) {
            PageKind::Success
        } else {
            PageKind::Other
        }
    }

    /// `page_title` reported with the `page_view` event.
    pub fn page_title(self) -> Option<&'static str> {
        match self {
            PageKind::Login => Some("Login Page"),
            PageKind::Success => Some("Success Page"),
            PageKind::Other => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PageKind::Login => "login",
            PageKind::Success => "success",
            PageKind::Other => "other",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
