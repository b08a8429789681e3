//! Signed-in profile page: fetches `/api/user-info`, fills the result region and reports the
//! outcome to analytics.

pub mod error;
pub mod formatters;
mod model;
mod presenter;
mod render;

pub use error::{UserInfoError, UserInfoResult};
pub use formatters::{format_date, format_number};
pub use model::{ChannelLookup, ChannelSummary, Count, UserInfoResponse, UserProfile};
pub use presenter::UserInfoPresenter;
pub use render::{channel_markup, escape_html, NO_CHANNEL_MARKUP};
