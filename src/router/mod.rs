//! Engine event routing
//!
//! Wires engine callbacks to session mutations and blocklist enforcement.
//! For one navigation event the order is fixed: blocklist check, then
//! history recording, then URL-bar refresh — a blocked page is never
//! recorded and never shown in the URL bar.

use crate::engine::{DownloadRequest, ViewId};
use crate::navigation::{self, BLANK_PAGE};
use crate::policy::BlockedDomainSet;
use crate::session::SessionState;
use crate::ui::TabManager;

/// What the shell should do after a navigation-changed event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Destination was on the blocklist; the view was sent to the neutral
    /// page and the shell must surface a warning naming the host
    Blocked { host: String },
    /// Navigation went through; `refresh_url_bar` is set when the emitting
    /// tab is the active one
    Allowed { url: String, refresh_url_bar: bool },
}

/// A download awaiting the user's save-path decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDownload {
    pub view: ViewId,
    pub request: DownloadRequest,
}

/// Routes engine callbacks into policy checks and session bookkeeping
pub struct EventRouter {
    policy: BlockedDomainSet,
}

impl EventRouter {
    pub fn new(policy: BlockedDomainSet) -> Self {
        Self { policy }
    }

    /// The blocklist this router enforces
    pub fn policy(&self) -> &BlockedDomainSet {
        &self.policy
    }

    /// Handle a navigation-changed callback from the engine
    pub fn on_navigation_changed(
        &self,
        tabs: &mut TabManager,
        session: &mut SessionState,
        view: ViewId,
        url: &str,
    ) -> NavigationOutcome {
        if let Some(host) = navigation::host_of(url) {
            if self.policy.is_blocked(&host) {
                log::warn!("blocked navigation to {host}, redirecting to {BLANK_PAGE}");
                if let Some(tab) = tabs.tab_by_view_mut(view) {
                    tab.view_mut().navigate(BLANK_PAGE);
                }
                return NavigationOutcome::Blocked { host };
            }
        }

        session.record_visit(url);

        NavigationOutcome::Allowed {
            url: url.to_string(),
            refresh_url_bar: tabs.is_active_view(view),
        }
    }

    /// Handle a download-requested callback; the shell prompts for a path
    pub fn on_download_requested(
        &self,
        view: ViewId,
        request: DownloadRequest,
    ) -> PendingDownload {
        log::info!("download requested: {}", request.suggested_path);
        PendingDownload { view, request }
    }

    /// Apply the user's save-path decision
    ///
    /// `Some(path)` accepts the download at that path and records it;
    /// `None` cancels it at the engine and leaves no trace. Returns the
    /// resolved path on accept.
    pub fn resolve_download(
        &self,
        tabs: &mut TabManager,
        session: &mut SessionState,
        pending: &PendingDownload,
        choice: Option<String>,
    ) -> Option<String> {
        let tab = tabs.tab_by_view_mut(pending.view)?;
        match choice {
            Some(path) => {
                tab.view_mut().accept_download(&pending.request, &path);
                session.record_download(&path);
                Some(path)
            }
            None => {
                tab.view_mut().cancel_download(&pending.request);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{HeadlessEngine, MockWebEngine, MockWebView, ViewId};
    use mockall::predicate::eq;
    use std::sync::mpsc::channel;

    fn router() -> EventRouter {
        EventRouter::new(BlockedDomainSet::new(["example.com", "test.com"]))
    }

    fn headless_tabs() -> (TabManager, crate::engine::HeadlessHandle) {
        let (tx, _rx) = channel();
        let engine = HeadlessEngine::new(tx);
        let handle = engine.handle();
        (
            TabManager::new(Box::new(engine), "http://www.google.com"),
            handle,
        )
    }

    #[test]
    fn test_blocked_host_redirects_and_skips_history() {
        let router = router();
        let mut session = SessionState::new();
        let (mut tabs, handle) = headless_tabs();
        tabs.open_tab(Some("http://openai.com"), "Home");
        let view = tabs.active_tab().unwrap().view_id();

        let outcome =
            router.on_navigation_changed(&mut tabs, &mut session, view, "http://example.com");
        assert_eq!(
            outcome,
            NavigationOutcome::Blocked {
                host: "example.com".to_string()
            }
        );
        assert_eq!(handle.view_url(view).unwrap(), BLANK_PAGE);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_blocked_redirect_issued_against_emitting_view() {
        // Mock engine so the redirect call itself is asserted
        let mut engine = MockWebEngine::new();
        engine.expect_create_view().times(1).returning(|| {
            let mut view = MockWebView::new();
            view.expect_id().return_const(ViewId::new(7));
            view.expect_navigate()
                .with(eq("http://example.com"))
                .times(1)
                .return_const(());
            view.expect_navigate()
                .with(eq(BLANK_PAGE))
                .times(1)
                .return_const(());
            Box::new(view)
        });

        let mut tabs = TabManager::new(Box::new(engine), "http://www.google.com");
        tabs.open_tab(Some("http://example.com"), "Home");

        let router = router();
        let mut session = SessionState::new();
        router.on_navigation_changed(
            &mut tabs,
            &mut session,
            ViewId::new(7),
            "http://example.com",
        );
    }

    #[test]
    fn test_allowed_host_records_and_refreshes_active() {
        let router = router();
        let mut session = SessionState::new();
        let (mut tabs, _handle) = headless_tabs();
        tabs.open_tab(None, "Home");
        let view = tabs.active_tab().unwrap().view_id();

        let outcome =
            router.on_navigation_changed(&mut tabs, &mut session, view, "http://openai.com");
        assert_eq!(
            outcome,
            NavigationOutcome::Allowed {
                url: "http://openai.com".to_string(),
                refresh_url_bar: true,
            }
        );
        assert_eq!(session.history(), ["http://openai.com"]);
    }

    #[test]
    fn test_background_tab_does_not_refresh_url_bar() {
        let router = router();
        let mut session = SessionState::new();
        let (mut tabs, _handle) = headless_tabs();
        tabs.open_tab(None, "Home");
        let background = tabs.active_tab().unwrap().view_id();
        tabs.open_tab(None, "New Tab");

        let outcome =
            router.on_navigation_changed(&mut tabs, &mut session, background, "http://a.com");
        assert_eq!(
            outcome,
            NavigationOutcome::Allowed {
                url: "http://a.com".to_string(),
                refresh_url_bar: false,
            }
        );
    }

    #[test]
    fn test_subdomain_of_blocked_host_passes() {
        let router = router();
        let mut session = SessionState::new();
        let (mut tabs, _handle) = headless_tabs();
        tabs.open_tab(None, "Home");
        let view = tabs.active_tab().unwrap().view_id();

        let outcome =
            router.on_navigation_changed(&mut tabs, &mut session, view, "http://sub.example.com");
        assert!(matches!(outcome, NavigationOutcome::Allowed { .. }));
        assert_eq!(session.history(), ["http://sub.example.com"]);
    }

    #[test]
    fn test_download_accept_records_resolved_path() {
        let router = router();
        let mut session = SessionState::new();
        let (mut tabs, handle) = headless_tabs();
        tabs.open_tab(None, "Home");
        let view = tabs.active_tab().unwrap().view_id();

        let request = handle.request_download(view, "/tmp/a.pdf");
        let pending = router.on_download_requested(view, request);
        let resolved = router.resolve_download(
            &mut tabs,
            &mut session,
            &pending,
            Some("/home/user/a.pdf".to_string()),
        );

        assert_eq!(resolved.as_deref(), Some("/home/user/a.pdf"));
        assert_eq!(session.downloads(), ["/home/user/a.pdf"]);
        assert_eq!(
            handle.accepted_downloads(view),
            [(pending.request.id, "/home/user/a.pdf".to_string())]
        );
    }

    #[test]
    fn test_download_decline_leaves_no_state() {
        let router = router();
        let mut session = SessionState::new();
        let (mut tabs, handle) = headless_tabs();
        tabs.open_tab(None, "Home");
        let view = tabs.active_tab().unwrap().view_id();

        let request = handle.request_download(view, "/tmp/a.pdf");
        let pending = router.on_download_requested(view, request);
        let resolved = router.resolve_download(&mut tabs, &mut session, &pending, None);

        assert!(resolved.is_none());
        assert!(session.downloads().is_empty());
        assert_eq!(handle.cancelled_downloads(view), [pending.request.id]);
    }
}
