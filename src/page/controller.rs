use std::fmt;
use std::sync::Arc;

use crate::analytics::constants::{EVENT_LOGIN_INITIATED, EVENT_LOGIN_SUCCESS, EVENT_PAGE_VIEW};
use crate::analytics::{AnalyticsClient, AnalyticsEvent, GtagHost};
use crate::config::{BootstrapSettings, ConfigLoader, Configuration};
use crate::dom::{element_ids, ClickHandler, Document, Location};
use crate::http::HttpClient;
use crate::page::kind::PageKind;
use crate::platform::runtime::spawn_detached;
use crate::user_info::UserInfoPresenter;

const LOGIN_METHOD: &str = "google";

/// The host bindings one page load runs against.
#[derive(Clone)]
pub struct PageHosts {
    pub document: Arc<dyn Document>,
    pub location: Arc<dyn Location>,
    pub http: Arc<dyn HttpClient>,
    pub gtag: Arc<dyn GtagHost>,
}

/// Entry point of a page load: resolves the [`PageKind`] and runs its sequence
/// (config, then analytics, then the page action).
pub struct PageController {
    hosts: PageHosts,
    settings: BootstrapSettings,
    loader: ConfigLoader,
    analytics: AnalyticsClient,
}

impl fmt::Debug for PageController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageController")
            .field("settings", &self.settings)
            .field("analytics", &self.analytics)
            .finish()
    }
}

impl PageController {
    pub fn new(hosts: PageHosts, settings: BootstrapSettings) -> Self {
        let loader = ConfigLoader::new(hosts.http.clone(), settings.config_endpoint.clone());
        let analytics = AnalyticsClient::new(
            hosts.document.clone(),
            hosts.gtag.clone(),
            settings.analytics_settings(),
        );
        Self {
            hosts,
            settings,
            loader,
            analytics,
        }
    }

    pub fn analytics(&self) -> &AnalyticsClient {
        &self.analytics
    }

    /// Runs the flow for the current page to completion and reports which page it was.
    pub async fn run(&self) -> PageKind {
        let kind = PageKind::resolve(self.hosts.document.as_ref());
        log::debug!("Detected {kind} page");
        match kind {
            PageKind::Login => self.run_login().await,
            PageKind::Success => self.run_success().await,
            PageKind::Other => {}
        }
        kind
    }

    /// Runs the flow in the background.
    pub fn start(self) {
        spawn_detached(async move {
            self.run().await;
        });
    }

    async fn run_login(&self) {
        let Some(config) = self.loader.load_config().await else {
            return;
        };
        self.begin(&config, PageKind::Login);

        let analytics = self.analytics.clone();
        let location = self.hosts.location.clone();
        let target = self.settings.auth_redirect.clone();
        let handler: ClickHandler = Arc::new(move || {
            analytics.track_event(AnalyticsEvent::new(EVENT_LOGIN_INITIATED).with_param("method", LOGIN_METHOD));
            if let Err(err) = location.assign(&target) {
                log::error!("Could not navigate to {target}: {err}");
            }
        });
        if let Err(err) = self.hosts.document.on_click(element_ids::LOGIN_BUTTON, handler) {
            log::error!("Could not wire the login button: {err}");
        }
    }

    async fn run_success(&self) {
        let Some(config) = self.loader.load_config().await else {
            return;
        };
        self.begin(&config, PageKind::Success);
        self.analytics
            .track_event(AnalyticsEvent::new(EVENT_LOGIN_SUCCESS).with_param("method", LOGIN_METHOD));

        let presenter = UserInfoPresenter::new(
            self.hosts.http.clone(),
            self.hosts.document.clone(),
            self.analytics.clone(),
            self.settings.user_info_endpoint.clone(),
        );
        presenter.load_and_render().await;
    }

    fn begin(&self, config: &Configuration, kind: PageKind) {
        self.analytics.initialize(config);
        let mut page_view = AnalyticsEvent::new(EVENT_PAGE_VIEW);
        if let Some(title) = kind.page_title() {
            page_view = page_view.with_param("page_title", title);
        }
        self.analytics
            .track_event(page_view.with_param("page_location", self.hosts.location.href()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::constants::{EVENT_USER_PROFILE_LOADED, EVENT_YOUTUBE_DATA_COLLECTED};
    use crate::analytics::{AnalyticsState, EventParams, GtagRegistry};
    use crate::dom::{Display, MemoryDocument, MemoryLocation};
    use crate::test_support::fixtures::config_json;
    use crate::test_support::{channel_json, profile_json, StubHttpClient};
    use serde_json::json;

    const LOGIN_URL: &str = "http://localhost:5000/";
    const SUCCESS_URL: &str = "http://localhost:5000/success";

    struct Harness {
        document: Arc<MemoryDocument>,
        location: Arc<MemoryLocation>,
        http: Arc<StubHttpClient>,
        gtag: Arc<GtagRegistry>,
        controller: PageController,
    }

    fn harness(document: MemoryDocument, href: &str, http: StubHttpClient, settings: BootstrapSettings) -> Harness {
        let document = Arc::new(document);
        let location = Arc::new(MemoryLocation::new(href));
        let http = Arc::new(http);
        let gtag = Arc::new(GtagRegistry::new());
        let controller = PageController::new(
            PageHosts {
                document: document.clone(),
                location: location.clone(),
                http: http.clone(),
                gtag: gtag.clone(),
            },
            settings,
        );
        Harness {
            document,
            location,
            http,
            gtag,
            controller,
        }
    }

    fn events(gtag: &GtagRegistry) -> Vec<(String, EventParams)> {
        gtag.snapshot().events()
    }

    fn names(gtag: &GtagRegistry) -> Vec<String> {
        events(gtag).into_iter().map(|(name, _)| name).collect()
    }

    #[tokio::test(flavor = "current_thread")]
    async fn login_page_tracks_and_wires_redirect() {
        let h = harness(
            MemoryDocument::login_page(),
            LOGIN_URL,
            StubHttpClient::new().with_json("/api/config", config_json("G-LOGIN")),
            BootstrapSettings::default(),
        );

        assert_eq!(h.controller.run().await, PageKind::Login);
        assert_eq!(
            h.document.scripts(),
            vec!["https://www.googletagmanager.com/gtag/js?id=G-LOGIN".to_string()]
        );
        assert_eq!(
            events(&h.gtag),
            vec![(
                EVENT_PAGE_VIEW.to_string(),
                EventParams::from([
                    ("page_title".to_string(), json!("Login Page")),
                    ("page_location".to_string(), json!(LOGIN_URL)),
                ])
            )]
        );
        assert!(h.location.navigations().is_empty());

        h.document.click(element_ids::LOGIN_BUTTON).unwrap();

        let recorded = events(&h.gtag);
        assert_eq!(
            recorded.last().unwrap(),
            &(
                EVENT_LOGIN_INITIATED.to_string(),
                EventParams::from([("method".to_string(), json!("google"))])
            )
        );
        assert_eq!(h.location.navigations(), vec!["/auth/google".to_string()]);
        assert_eq!(h.http.requests(), vec!["/api/config".to_string()]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn login_page_without_config_stays_inert() {
        let h = harness(
            MemoryDocument::login_page(),
            LOGIN_URL,
            StubHttpClient::new().with_invalid_json("/api/config"),
            BootstrapSettings::default(),
        );

        assert_eq!(h.controller.run().await, PageKind::Login);
        assert!(h.document.scripts().is_empty());
        assert_eq!(h.document.element(element_ids::LOGIN_BUTTON).unwrap().click_handlers, 0);
        assert_eq!(h.controller.analytics().state(), AnalyticsState::Uninitialized);
        assert!(h.gtag.snapshot().commands.is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn login_redirect_works_with_analytics_disabled() {
        let mut config = config_json("unused");
        config["ga4"] = json!({ "measurementId": null });
        let h = harness(
            MemoryDocument::login_page(),
            LOGIN_URL,
            StubHttpClient::new().with_json("/api/config", config),
            BootstrapSettings::default(),
        );

        h.controller.run().await;
        assert_eq!(h.controller.analytics().state(), AnalyticsState::Disabled);

        h.document.click(element_ids::LOGIN_BUTTON).unwrap();
        assert_eq!(h.location.navigations(), vec!["/auth/google".to_string()]);
        assert!(h.document.scripts().is_empty());
        assert!(h.gtag.snapshot().commands.is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn login_redirect_follows_settings() {
        let settings = BootstrapSettings {
            config_endpoint: "/cfg".into(),
            auth_redirect: "/login/start".into(),
            ..Default::default()
        };
        let h = harness(
            MemoryDocument::login_page(),
            LOGIN_URL,
            StubHttpClient::new().with_json("/cfg", config_json("G-CUSTOM")),
            settings,
        );

        h.controller.run().await;
        h.document.click(element_ids::LOGIN_BUTTON).unwrap();
        assert_eq!(h.location.navigations(), vec!["/login/start".to_string()]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn success_page_runs_full_sequence() {
        let h = harness(
            MemoryDocument::success_page(),
            SUCCESS_URL,
            StubHttpClient::new()
                .with_json("/api/config", config_json("G-SUCCESS"))
                .with_json("/api/user-info", json!({ "user": profile_json(), "youtube": channel_json() })),
            BootstrapSettings::default(),
        );

        assert_eq!(h.controller.run().await, PageKind::Success);
        assert_eq!(
            names(&h.gtag),
            vec![
                EVENT_PAGE_VIEW.to_string(),
                EVENT_LOGIN_SUCCESS.to_string(),
                EVENT_USER_PROFILE_LOADED.to_string(),
                EVENT_YOUTUBE_DATA_COLLECTED.to_string(),
            ]
        );
        let recorded = events(&h.gtag);
        assert_eq!(recorded[0].1.get("page_title"), Some(&json!("Success Page")));
        assert_eq!(recorded[1].1.get("method"), Some(&json!("google")));

        assert_eq!(h.document.display_of(element_ids::USER_INFO), Some(Display::Block));
        assert_eq!(
            h.http.requests(),
            vec!["/api/config".to_string(), "/api/user-info".to_string()]
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn success_page_without_config_skips_user_info() {
        let h = harness(
            MemoryDocument::success_page(),
            SUCCESS_URL,
            StubHttpClient::new().with_network_error("/api/config"),
            BootstrapSettings::default(),
        );

        assert_eq!(h.controller.run().await, PageKind::Success);
        assert_eq!(h.http.requests(), vec!["/api/config".to_string()]);
        assert_eq!(h.document.display_of(element_ids::LOADING_STATE), None);
        assert!(h.gtag.snapshot().commands.is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn unrelated_page_does_nothing() {
        let h = harness(
            MemoryDocument::with_elements(["header"]),
            LOGIN_URL,
            StubHttpClient::new().with_json("/api/config", config_json("G-NONE")),
            BootstrapSettings::default(),
        );

        assert_eq!(h.controller.run().await, PageKind::Other);
        assert!(h.http.requests().is_empty());
        assert!(h.document.scripts().is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn only_one_branch_runs_when_both_anchors_exist() {
        let document = MemoryDocument::success_page();
        document.add_element(element_ids::LOGIN_BUTTON);
        let h = harness(
            document,
            LOGIN_URL,
            StubHttpClient::new()
                .with_json("/api/config", config_json("G-BOTH"))
                .with_json("/api/user-info", json!({ "user": profile_json() })),
            BootstrapSettings::default(),
        );

        assert_eq!(h.controller.run().await, PageKind::Login);
        assert_eq!(h.http.requests(), vec!["/api/config".to_string()]);
        assert_eq!(h.document.scripts().len(), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn start_runs_in_the_background() {
        let h = harness(
            MemoryDocument::login_page(),
            LOGIN_URL,
            StubHttpClient::new().with_json("/api/config", config_json("G-BG")),
            BootstrapSettings::default(),
        );
        let document = h.document.clone();
        h.controller.start();

        for _ in 0..50 {
            if !document.scripts().is_empty() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(document.scripts().len(), 1);
    }
}
