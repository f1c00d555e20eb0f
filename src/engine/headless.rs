//! In-process engine double
//!
//! Stands in for a real embedded engine during development and in the test
//! suite. Each view tracks its displayed URL plus back/forward stacks and
//! reports every change through the shared event sink, which is how real
//! engines surface `urlChanged`-style callbacks. View state sits behind an
//! `Arc<Mutex<..>>` because real engines emit from worker threads.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{DownloadRequest, EngineEvent, EventSink, ViewId, WebEngine, WebView};

#[derive(Debug, Default)]
struct ViewState {
    current: String,
    back: Vec<String>,
    forward: Vec<String>,
    accepted: Vec<(u64, String)>,
    cancelled: Vec<u64>,
    cache_clears: u32,
}

type SharedViews = Arc<Mutex<HashMap<ViewId, ViewState>>>;

/// Engine double backing development builds and tests
pub struct HeadlessEngine {
    views: SharedViews,
    events: EventSink,
    next_view: u64,
    next_request: Arc<Mutex<u64>>,
}

impl HeadlessEngine {
    /// Create an engine reporting into `events`
    pub fn new(events: EventSink) -> Self {
        Self {
            views: Arc::new(Mutex::new(HashMap::new())),
            events,
            next_view: 1,
            next_request: Arc::new(Mutex::new(1)),
        }
    }

    /// Handle for injecting engine-initiated events and inspecting views
    pub fn handle(&self) -> HeadlessHandle {
        HeadlessHandle {
            views: Arc::clone(&self.views),
            events: self.events.clone(),
            next_request: Arc::clone(&self.next_request),
        }
    }
}

impl WebEngine for HeadlessEngine {
    fn create_view(&mut self) -> Box<dyn WebView> {
        let id = ViewId::new(self.next_view);
        self.next_view += 1;

        self.views
            .lock()
            .expect("engine state poisoned")
            .insert(id, ViewState::default());

        Box::new(HeadlessView {
            id,
            views: Arc::clone(&self.views),
            events: self.events.clone(),
        })
    }
}

/// Test/inspection seam shared with a [`HeadlessEngine`]
#[derive(Clone)]
pub struct HeadlessHandle {
    views: SharedViews,
    events: EventSink,
    next_request: Arc<Mutex<u64>>,
}

impl HeadlessHandle {
    /// Simulate the engine asking where to save a file
    pub fn request_download(&self, view: ViewId, suggested_path: &str) -> DownloadRequest {
        let mut next = self.next_request.lock().expect("engine state poisoned");
        let request = DownloadRequest {
            id: *next,
            suggested_path: suggested_path.to_string(),
        };
        *next += 1;

        let _ = self.events.send(EngineEvent::DownloadRequested {
            view,
            request: request.clone(),
        });
        request
    }

    /// URL a view is currently displaying
    pub fn view_url(&self, view: ViewId) -> Option<String> {
        self.views
            .lock()
            .expect("engine state poisoned")
            .get(&view)
            .map(|s| s.current.clone())
    }

    /// Downloads a view accepted, as (request id, save path)
    pub fn accepted_downloads(&self, view: ViewId) -> Vec<(u64, String)> {
        self.views
            .lock()
            .expect("engine state poisoned")
            .get(&view)
            .map(|s| s.accepted.clone())
            .unwrap_or_default()
    }

    /// Request ids a view cancelled
    pub fn cancelled_downloads(&self, view: ViewId) -> Vec<u64> {
        self.views
            .lock()
            .expect("engine state poisoned")
            .get(&view)
            .map(|s| s.cancelled.clone())
            .unwrap_or_default()
    }

    /// How many times a view's HTTP cache was cleared
    pub fn cache_clears(&self, view: ViewId) -> u32 {
        self.views
            .lock()
            .expect("engine state poisoned")
            .get(&view)
            .map(|s| s.cache_clears)
            .unwrap_or(0)
    }
}

struct HeadlessView {
    id: ViewId,
    views: SharedViews,
    events: EventSink,
}

impl HeadlessView {
    fn emit_navigation(&self, url: String) {
        let _ = self.events.send(EngineEvent::NavigationChanged {
            view: self.id,
            url,
        });
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        let mut views = self.views.lock().expect("engine state poisoned");
        let state = views.entry(self.id).or_default();
        f(state)
    }
}

impl WebView for HeadlessView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn url(&self) -> String {
        self.with_state(|s| s.current.clone())
    }

    fn navigate(&mut self, destination: &str) {
        self.with_state(|s| {
            if !s.current.is_empty() {
                s.back.push(std::mem::take(&mut s.current));
            }
            s.current = destination.to_string();
            s.forward.clear();
        });
        self.emit_navigation(destination.to_string());
    }

    fn go_back(&mut self) {
        let moved = self.with_state(|s| {
            let previous = s.back.pop()?;
            s.forward.push(std::mem::replace(&mut s.current, previous));
            Some(s.current.clone())
        });
        if let Some(url) = moved {
            self.emit_navigation(url);
        }
    }

    fn go_forward(&mut self) {
        let moved = self.with_state(|s| {
            let next = s.forward.pop()?;
            s.back.push(std::mem::replace(&mut s.current, next));
            Some(s.current.clone())
        });
        if let Some(url) = moved {
            self.emit_navigation(url);
        }
    }

    fn reload(&mut self) {
        let current = self.with_state(|s| s.current.clone());
        if !current.is_empty() {
            self.emit_navigation(current);
        }
    }

    fn clear_http_cache(&mut self) {
        self.with_state(|s| s.cache_clears += 1);
    }

    fn accept_download(&mut self, request: &DownloadRequest, path: &str) {
        self.with_state(|s| s.accepted.push((request.id, path.to_string())));
    }

    fn cancel_download(&mut self, request: &DownloadRequest) {
        self.with_state(|s| s.cancelled.push(request.id));
    }
}
