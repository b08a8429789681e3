use std::fmt;
use std::sync::Arc;

use crate::dom::error::DomResult;

/// Ids of the anchor and region elements the login and success pages ship with.
pub mod element_ids {
    pub const LOGIN_BUTTON: &str = "loginButton";
    pub const USER_INFO: &str = "userInfo";
    pub const LOADING_STATE: &str = "loadingState";
    pub const ERROR_STATE: &str = "errorState";
    pub const USER_PHOTO: &str = "userPhoto";
    pub const USER_NAME: &str = "userName";
    pub const USER_EMAIL: &str = "userEmail";
    pub const USER_ID: &str = "userId";
    pub const EMAIL_VERIFIED: &str = "emailVerified";
    pub const YOUTUBE_DATA: &str = "youtubeData";
    pub const YOUTUBE_EVENT: &str = "youtubeEvent";
}

/// CSS `display` values the flows toggle between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Display {
    None,
    Block,
    Flex,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
            Display::Flex => "flex",
        }
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

pub type ClickHandler = Arc<dyn Fn() + Send + Sync + 'static>;

/// Element-level view of the page document.
pub trait Document: Send + Sync {
    fn has_element(&self, id: &str) -> bool;

    fn set_display(&self, id: &str, display: Display) -> DomResult<()>;

    fn set_text(&self, id: &str, text: &str) -> DomResult<()>;

    fn set_image_source(&self, id: &str, url: &str) -> DomResult<()>;

    fn set_inner_html(&self, id: &str, html: &str) -> DomResult<()>;

    /// Appends an `async` script tag loading `src` to the document head.
    fn append_script(&self, src: &str) -> DomResult<()>;

    /// Registers `handler` for click events on the element. Handlers stay attached for the
    /// lifetime of the page.
    fn on_click(&self, id: &str, handler: ClickHandler) -> DomResult<()>;
}

/// The page's current address and the navigation primitive.
pub trait Location: Send + Sync {
    fn href(&self) -> String;

    fn origin(&self) -> String;

    /// Navigates the page to `url` (absolute or relative to the current page).
    fn assign(&self, url: &str) -> DomResult<()>;
}
