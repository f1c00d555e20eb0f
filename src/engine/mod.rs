//! Embedded web-engine boundary
//!
//! The shell never fetches, parses, or renders anything itself; all of that
//! is delegated to an engine living behind these traits. Outbound calls are
//! trait methods, inbound callbacks arrive as [`EngineEvent`] values on an
//! `mpsc` channel drained by the UI thread each frame, so all session
//! mutations stay on one thread.

mod headless;

pub use headless::{HeadlessEngine, HeadlessHandle};

use std::sync::mpsc::Sender;

/// Unique identifier of one engine view instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(u64);

impl ViewId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// A download surfaced by the engine, awaiting an accept/cancel decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Engine-assigned request identifier
    pub id: u64,
    /// Path the engine proposes to save to
    pub suggested_path: String,
}

/// Callbacks emitted by the engine, delivered as channel messages
///
/// Each event names the emitting view explicitly; handlers must not rely on
/// closure capture to know which tab produced an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The view's displayed URL changed (navigation, redirect, history move)
    NavigationChanged { view: ViewId, url: String },
    /// The view wants to download a file and needs a save path
    DownloadRequested { view: ViewId, request: DownloadRequest },
}

/// Channel on which an engine reports its events
pub type EventSink = Sender<EngineEvent>;

/// Factory for engine view instances
///
/// Instantiation failure is an unrecoverable process error; implementations
/// panic rather than return a `Result`.
#[cfg_attr(test, mockall::automock)]
pub trait WebEngine {
    /// Create a new rendering view wired to the engine's event sink
    fn create_view(&mut self) -> Box<dyn WebView>;
}

/// One rendering view instance (the engine side of a tab)
#[cfg_attr(test, mockall::automock)]
pub trait WebView {
    /// Identity of this view, echoed back in engine events
    fn id(&self) -> ViewId;

    /// URL currently displayed by the view
    fn url(&self) -> String;

    /// Load a destination
    fn navigate(&mut self, destination: &str);

    /// Go back one entry in the view's own history
    fn go_back(&mut self);

    /// Go forward one entry in the view's own history
    fn go_forward(&mut self);

    /// Reload the current page
    fn reload(&mut self);

    /// Drop the engine's HTTP cache for this view
    fn clear_http_cache(&mut self);

    /// Let a pending download proceed, saving to `path`
    fn accept_download(&mut self, request: &DownloadRequest, path: &str);

    /// Cancel a pending download; no partial state remains
    fn cancel_download(&mut self, request: &DownloadRequest);
}
