use std::sync::Arc;

use crate::analytics::constants::{EVENT_ERROR, EVENT_USER_PROFILE_LOADED, EVENT_YOUTUBE_DATA_COLLECTED};
use crate::analytics::{AnalyticsClient, AnalyticsEvent};
use crate::dom::{element_ids, Display, Document, DomResult};
use crate::http::HttpClient;
use crate::user_info::error::{UserInfoError, UserInfoResult};
use crate::user_info::model::{ChannelLookup, ChannelSummary, UserInfoResponse, UserProfile};
use crate::user_info::render::{channel_markup, NO_CHANNEL_MARKUP};

const ERROR_LOCATION: &str = "user_info_load";

/// Drives the loading, result and error regions of the success page.
#[derive(Clone)]
pub struct UserInfoPresenter {
    http: Arc<dyn HttpClient>,
    document: Arc<dyn Document>,
    analytics: AnalyticsClient,
    endpoint: String,
}

impl UserInfoPresenter {
    pub fn new(
        http: Arc<dyn HttpClient>,
        document: Arc<dyn Document>,
        analytics: AnalyticsClient,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            http,
            document,
            analytics,
            endpoint: endpoint.into(),
        }
    }

    /// Fetches the profile and renders it, or shows the error region.
    ///
    /// Outcomes are only observable through the document and analytics events. There is no
    /// timeout: a request that never settles leaves the loading region up.
    pub async fn load_and_render(&self) {
        self.show_loading();
        match self.fetch_and_render().await {
            Ok(ChannelLookup::Found(channel)) => {
                log::debug!("Rendered user info with channel {}", channel.channel_id);
            }
            Ok(ChannelLookup::Unavailable { reason }) => {
                log::debug!(
                    "Rendered user info without channel ({})",
                    reason.as_deref().unwrap_or("none linked")
                );
            }
            Err(err) => self.render_failure(&err),
        }
    }

    fn show_loading(&self) {
        self.apply_display(element_ids::LOADING_STATE, Display::Block);
        self.apply_display(element_ids::USER_INFO, Display::None);
        self.apply_display(element_ids::ERROR_STATE, Display::None);
    }

    async fn fetch_and_render(&self) -> UserInfoResult<ChannelLookup> {
        let body = self.http.get_json(&self.endpoint).await?;
        let response = UserInfoResponse::from_value(body)?;
        if let Some(message) = response.backend_error() {
            return Err(UserInfoError::Backend { message });
        }
        let profile = response.user.as_ref().ok_or(UserInfoError::MissingProfile)?;

        self.render_profile(profile)?;
        self.analytics.track_event(
            AnalyticsEvent::new(EVENT_USER_PROFILE_LOADED)
                .with_param("user_id", profile.id.as_str())
                .with_param("email_verified", profile.email_verified),
        );

        let channel = response.channel();
        match &channel {
            ChannelLookup::Found(summary) => {
                self.render_channel(summary)?;
                self.analytics.track_event(channel_event(summary));
            }
            ChannelLookup::Unavailable { .. } => {
                self.document
                    .set_inner_html(element_ids::YOUTUBE_DATA, NO_CHANNEL_MARKUP)?;
            }
        }
        Ok(channel)
    }

    fn render_profile(&self, profile: &UserProfile) -> DomResult<()> {
        let document = &self.document;
        document.set_display(element_ids::LOADING_STATE, Display::None)?;
        document.set_display(element_ids::USER_INFO, Display::Block)?;

        document.set_image_source(element_ids::USER_PHOTO, &profile.picture_url)?;
        document.set_text(element_ids::USER_NAME, &profile.name)?;
        document.set_text(element_ids::USER_EMAIL, &profile.email)?;
        document.set_text(element_ids::USER_ID, &profile.id)?;
        document.set_text(
            element_ids::EMAIL_VERIFIED,
            if profile.email_verified { "Yes" } else { "No" },
        )
    }

    fn render_channel(&self, channel: &ChannelSummary) -> DomResult<()> {
        self.document
            .set_inner_html(element_ids::YOUTUBE_DATA, &channel_markup(channel))?;
        self.document
            .set_display(element_ids::YOUTUBE_EVENT, Display::Flex)
    }

    fn render_failure(&self, err: &UserInfoError) {
        log::error!("Error loading user info: {err}");
        self.apply_display(element_ids::LOADING_STATE, Display::None);
        self.apply_display(element_ids::USER_INFO, Display::None);
        self.apply_display(element_ids::ERROR_STATE, Display::Block);

        self.analytics.track_event(
            AnalyticsEvent::new(EVENT_ERROR)
                .with_param("error_message", err.event_message())
                .with_param("error_location", ERROR_LOCATION),
        );
    }

    fn apply_display(&self, id: &str, display: Display) {
        if let Err(err) = self.document.set_display(id, display) {
            log::warn!("Could not set display of '#{id}' to {display}: {err}");
        }
    }
}

fn channel_event(channel: &ChannelSummary) -> AnalyticsEvent {
    AnalyticsEvent::new(EVENT_YOUTUBE_DATA_COLLECTED)
        .with_param("channel_id", channel.channel_id.as_str())
        .with_param("subscriber_count", channel.subscriber_count.to_json())
        .with_param("video_count", channel.video_count.to_json())
        .with_param("view_count", channel.view_count.to_json())
}
