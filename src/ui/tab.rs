//! Tab management

use crate::engine::{ViewId, WebEngine, WebView};

/// Unique tab identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(u64);

impl TabId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// A browser tab: one engine view plus UI metadata
pub struct Tab {
    id: TabId,
    title: String,
    view: Box<dyn WebView>,
}

impl Tab {
    fn new(id: TabId, title: impl Into<String>, view: Box<dyn WebView>) -> Self {
        Self {
            id,
            title: title.into(),
            view,
        }
    }

    /// Get the tab ID
    pub fn id(&self) -> TabId {
        self.id
    }

    /// Get the tab title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the tab title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Identity of the engine view backing this tab
    pub fn view_id(&self) -> ViewId {
        self.view.id()
    }

    /// URL the backing view currently displays
    pub fn url(&self) -> String {
        self.view.url()
    }

    /// The engine view backing this tab
    pub fn view_mut(&mut self) -> &mut dyn WebView {
        self.view.as_mut()
    }
}

/// Manages the tab collection and the engine views behind it
///
/// Invariant: once the first tab is open the collection never becomes
/// empty — closing the sole remaining tab is a silent no-op.
pub struct TabManager {
    engine: Box<dyn WebEngine>,
    home_url: String,
    tabs: Vec<Tab>,
    active_tab: Option<TabId>,
    next_id: u64,
}

impl TabManager {
    /// Create a manager that opens views on `engine` and falls back to
    /// `home_url` when a tab is opened without a destination
    pub fn new(engine: Box<dyn WebEngine>, home_url: impl Into<String>) -> Self {
        Self {
            engine,
            home_url: home_url.into(),
            tabs: Vec::new(),
            active_tab: None,
            next_id: 1,
        }
    }

    /// Open a new tab, navigate it, and make it active
    ///
    /// With no destination the tab loads the home URL.
    pub fn open_tab(&mut self, destination: Option<&str>, label: &str) -> TabId {
        let id = TabId::new(self.next_id);
        self.next_id += 1;

        let mut view = self.engine.create_view();
        let destination = destination.unwrap_or(&self.home_url);
        view.navigate(destination);
        log::info!("opened tab {id:?} at {destination}");

        self.tabs.push(Tab::new(id, label, view));
        self.active_tab = Some(id);
        id
    }

    /// Close a tab
    ///
    /// Silent no-op while only one tab remains, for any `id`. Closing the
    /// active tab activates the first survivor.
    pub fn close_tab(&mut self, id: TabId) {
        if self.tabs.len() < 2 {
            return;
        }
        self.tabs.retain(|t| t.id != id);

        if self.active_tab == Some(id) {
            self.active_tab = self.tabs.first().map(|t| t.id);
        }
    }

    /// The active tab's id; `Some` from the first open onward
    pub fn current(&self) -> Option<TabId> {
        self.active_tab
    }

    /// Set the active tab
    pub fn set_active(&mut self, id: TabId) {
        if self.tabs.iter().any(|t| t.id == id) {
            self.active_tab = Some(id);
        }
    }

    /// Get the active tab
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab
            .and_then(|id| self.tabs.iter().find(|t| t.id == id))
    }

    /// Get mutable reference to active tab
    pub fn active_tab_mut(&mut self) -> Option<&mut Tab> {
        self.active_tab
            .and_then(|id| self.tabs.iter_mut().find(|t| t.id == id))
    }

    /// Find the tab backed by a given engine view
    pub fn tab_by_view_mut(&mut self, view: ViewId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.view_id() == view)
    }

    /// Whether `view` backs the active tab
    pub fn is_active_view(&self, view: ViewId) -> bool {
        self.active_tab().is_some_and(|t| t.view_id() == view)
    }

    /// Get all tabs
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Get tab count
    pub fn count(&self) -> usize {
        self.tabs.len()
    }
}
