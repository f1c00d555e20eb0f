//! Per-process browsing session state
//!
//! In-memory only: history, downloads, and mode flags do not survive a
//! restart. One instance is owned by the shell window and mutated solely
//! from the UI thread.

/// Browsing session state: history, downloads, and mode flags
#[derive(Debug, Default)]
pub struct SessionState {
    /// Visited URLs, insertion order, no duplicates
    history: Vec<String>,
    /// Saved download paths, insertion order, duplicates allowed
    downloads: Vec<String>,
    dark_mode: bool,
    incognito: bool,
}

impl SessionState {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visited URL
    ///
    /// First-seen-wins ordered set: appended iff not already present.
    /// Suppressed entirely while incognito is active. Neutral `about:`
    /// destinations are never recorded, so a blocklist redirect leaves no
    /// trace.
    pub fn record_visit(&mut self, url: &str) {
        if self.incognito || url.starts_with("about:") {
            return;
        }
        if !self.history.iter().any(|h| h == url) {
            log::debug!("history: {url}");
            self.history.push(url.to_string());
        }
    }

    /// Record a completed download save path (duplicates permitted)
    pub fn record_download(&mut self, path: &str) {
        log::debug!("download recorded: {path}");
        self.downloads.push(path.to_string());
    }

    /// Empty the visit history
    ///
    /// The engine-side cache clear is delegated by the shell's command
    /// dispatch; this only touches session bookkeeping.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Toggle private browsing
    ///
    /// Enabling clears any existing history; disabling restores nothing.
    pub fn set_incognito(&mut self, enabled: bool) {
        self.incognito = enabled;
        if enabled {
            log::info!("incognito enabled, history cleared");
            self.history.clear();
        }
    }

    /// Flip the dark-mode flag; the shell derives styling from it
    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.dark_mode = enabled;
    }

    /// Visited URLs in first-seen order
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Recorded download paths in order
    pub fn downloads(&self) -> &[String] {
        &self.downloads
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn incognito(&self) -> bool {
        self.incognito
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_dedup_preserves_first_seen_order() {
        let mut session = SessionState::new();
        session.record_visit("http://a.com");
        session.record_visit("http://b.com");
        session.record_visit("http://a.com");
        session.record_visit("http://c.com");
        session.record_visit("http://b.com");
        assert_eq!(session.history(), ["http://a.com", "http://b.com", "http://c.com"]);
    }

    #[test]
    fn test_incognito_suppresses_recording() {
        let mut session = SessionState::new();
        session.set_incognito(true);
        session.record_visit("http://a.com");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_incognito_enable_clears_history() {
        let mut session = SessionState::new();
        session.record_visit("http://a.com");
        session.record_visit("http://b.com");
        session.set_incognito(true);
        assert!(session.history().is_empty());

        // Leaving incognito restores nothing
        session.set_incognito(false);
        assert!(session.history().is_empty());
        session.record_visit("http://c.com");
        assert_eq!(session.history(), ["http://c.com"]);
    }

    #[test]
    fn test_about_pages_never_recorded() {
        let mut session = SessionState::new();
        session.record_visit("about:blank");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_downloads_keep_duplicates_in_order() {
        let mut session = SessionState::new();
        session.record_download("/tmp/a.pdf");
        session.record_download("/tmp/b.pdf");
        session.record_download("/tmp/a.pdf");
        assert_eq!(session.downloads(), ["/tmp/a.pdf", "/tmp/b.pdf", "/tmp/a.pdf"]);
    }

    #[test]
    fn test_downloads_recorded_during_incognito() {
        let mut session = SessionState::new();
        session.set_incognito(true);
        session.record_download("/tmp/a.pdf");
        assert_eq!(session.downloads(), ["/tmp/a.pdf"]);
    }

    #[test]
    fn test_clear_history() {
        let mut session = SessionState::new();
        session.record_visit("http://a.com");
        session.clear_history();
        assert!(session.history().is_empty());
    }
}
