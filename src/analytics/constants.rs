/// Default base URL of the gtag.js loader; the measurement ID is appended as `?id=`.
pub const DEFAULT_GTAG_SCRIPT_URL: &str = "https://www.googletagmanager.com/gtag/js";
pub const DEFAULT_DATA_LAYER_NAME: &str = "dataLayer";

pub const EVENT_PAGE_VIEW: &str = "page_view";
pub const EVENT_LOGIN_INITIATED: &str = "login_initiated";
pub const EVENT_LOGIN_SUCCESS: &str = "login_success";
pub const EVENT_USER_PROFILE_LOADED: &str = "user_profile_loaded";
pub const EVENT_YOUTUBE_DATA_COLLECTED: &str = "youtube_data_collected";
pub const EVENT_ERROR: &str = "error";
