//! Main browser application using eframe/egui
//!
//! Composes the tab manager, session state, and event router into the
//! visible shell: toolbar, tab strip, URL bar, status bar, and the
//! transient dialogs (history, downloads, save prompt, notices). Engine
//! events are drained at the top of every frame, so all state mutations
//! happen serially on the UI thread.

use std::sync::mpsc::{Receiver, channel};

use eframe::egui;

use crate::config::BrowserConfig;
use crate::engine::{EngineEvent, HeadlessEngine, WebEngine};
use crate::navigation;
use crate::policy::BlockedDomainSet;
use crate::router::{EventRouter, NavigationOutcome, PendingDownload};
use crate::session::SessionState;
use crate::ui::{TabId, TabManager};

/// Named shell commands; each one invokes exactly one collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Back,
    Forward,
    Reload,
    Home,
    NewTab,
    CloseTab(TabId),
    SwitchTab(TabId),
    Navigate(String),
    ShowHistory,
    ShowDownloads,
    ClearData,
    ToggleFullscreen,
    ToggleIncognito,
    ToggleDarkMode,
}

/// Transient user-facing notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Navigation to a blocklisted host was refused
    Blocked(String),
    /// Cache and history were cleared
    DataCleared,
    /// A download was accepted and started
    DownloadStarted(String),
}

impl Notice {
    fn title(&self) -> &'static str {
        match self {
            Self::Blocked(_) => "Blocked",
            Self::DataCleared => "Data Cleared",
            Self::DownloadStarted(_) => "Download Started",
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Blocked(host) => format!("Access to {host} is restricted."),
            Self::DataCleared => "Cache and history have been cleared.".to_string(),
            Self::DownloadStarted(path) => format!("Downloading to: {path}"),
        }
    }
}

/// Main browser application
pub struct BrowserApp {
    config: BrowserConfig,
    session: SessionState,
    router: EventRouter,
    tabs: TabManager,
    /// Engine callbacks, drained each frame
    events: Receiver<EngineEvent>,
    /// URL bar content
    url_input: String,
    show_history: bool,
    show_downloads: bool,
    /// Download awaiting the save-path decision; blocks nothing else but
    /// stays up until answered
    pending_download: Option<PendingDownload>,
    download_path_input: String,
    notice: Option<Notice>,
    fullscreen: bool,
}

impl BrowserApp {
    /// Create the application with the built-in headless engine
    pub fn new(_cc: &eframe::CreationContext<'_>, config: BrowserConfig) -> Self {
        let (tx, rx) = channel();
        let engine = HeadlessEngine::new(tx);
        Self::with_engine(config, Box::new(engine), rx)
    }

    /// Create the application over an explicit engine (test seam)
    pub fn with_engine(
        config: BrowserConfig,
        engine: Box<dyn WebEngine>,
        events: Receiver<EngineEvent>,
    ) -> Self {
        let router = EventRouter::new(BlockedDomainSet::new(config.blocked_domains.clone()));
        let mut tabs = TabManager::new(engine, config.home_url.clone());
        tabs.open_tab(None, "Home");

        Self {
            url_input: config.home_url.clone(),
            config,
            session: SessionState::new(),
            router,
            tabs,
            events,
            show_history: false,
            show_downloads: false,
            pending_download: None,
            download_path_input: String::new(),
            notice: None,
            fullscreen: false,
        }
    }

    /// Drain engine callbacks through the router
    ///
    /// Blocklist enforcement happens before history recording, which
    /// happens before any URL-bar refresh.
    pub fn pump_engine_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                EngineEvent::NavigationChanged { view, url } => {
                    let outcome = self.router.on_navigation_changed(
                        &mut self.tabs,
                        &mut self.session,
                        view,
                        &url,
                    );
                    match outcome {
                        NavigationOutcome::Blocked { host } => {
                            self.notice = Some(Notice::Blocked(host));
                        }
                        NavigationOutcome::Allowed {
                            url,
                            refresh_url_bar,
                        } => {
                            if refresh_url_bar {
                                self.url_input = url;
                            }
                        }
                    }
                }
                EngineEvent::DownloadRequested { view, request } => {
                    // A newer request supersedes an unanswered prompt; the
                    // superseded one still gets an explicit cancel at the
                    // engine so no request is left dangling.
                    if self.pending_download.is_some() {
                        self.resolve_pending_download(false);
                    }
                    let pending = self.router.on_download_requested(view, request);
                    self.download_path_input = pending.request.suggested_path.clone();
                    self.pending_download = Some(pending);
                }
            }
        }
    }

    /// Execute one shell command
    ///
    /// No command reports an error: failures are either absorbed
    /// (close-last-tab) or surfaced as a notice dialog.
    pub fn dispatch(&mut self, ctx: &egui::Context, command: Command) {
        match command {
            Command::Back => {
                if let Some(tab) = self.tabs.active_tab_mut() {
                    tab.view_mut().go_back();
                }
            }
            Command::Forward => {
                if let Some(tab) = self.tabs.active_tab_mut() {
                    tab.view_mut().go_forward();
                }
            }
            Command::Reload => {
                if let Some(tab) = self.tabs.active_tab_mut() {
                    tab.view_mut().reload();
                }
            }
            Command::Home => {
                let home = self.config.home_url.clone();
                if let Some(tab) = self.tabs.active_tab_mut() {
                    tab.view_mut().navigate(&home);
                }
            }
            Command::NewTab => {
                self.tabs.open_tab(None, "New Tab");
                self.url_input.clear();
            }
            Command::CloseTab(id) => {
                self.tabs.close_tab(id);
                self.refresh_url_bar();
            }
            Command::SwitchTab(id) => {
                self.tabs.set_active(id);
                self.refresh_url_bar();
            }
            Command::Navigate(input) => {
                let destination = navigation::normalize(&input);
                if let Some(tab) = self.tabs.active_tab_mut() {
                    tab.view_mut().navigate(&destination);
                }
            }
            Command::ShowHistory => {
                self.show_history = !self.show_history;
            }
            Command::ShowDownloads => {
                self.show_downloads = !self.show_downloads;
            }
            Command::ClearData => {
                self.session.clear_history();
                // Engine-side cache clear is delegated, not modeled here
                if let Some(tab) = self.tabs.active_tab_mut() {
                    tab.view_mut().clear_http_cache();
                }
                self.notice = Some(Notice::DataCleared);
            }
            Command::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.fullscreen));
            }
            Command::ToggleIncognito => {
                let enabled = !self.session.incognito();
                self.session.set_incognito(enabled);
                let title = if enabled {
                    "Breezy (Incognito)"
                } else {
                    "Breezy"
                };
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.to_string()));
            }
            Command::ToggleDarkMode => {
                let enabled = !self.session.dark_mode();
                self.session.set_dark_mode(enabled);
            }
        }
    }

    /// Re-display the active tab's destination in the URL bar
    fn refresh_url_bar(&mut self) {
        if let Some(tab) = self.tabs.active_tab() {
            self.url_input = tab.url();
        }
    }

    /// Answer the pending save-path prompt
    fn resolve_pending_download(&mut self, accepted: bool) {
        if let Some(pending) = self.pending_download.take() {
            let choice = accepted.then(|| self.download_path_input.clone());
            let resolved =
                self.router
                    .resolve_download(&mut self.tabs, &mut self.session, &pending, choice);
            if let Some(path) = resolved {
                self.notice = Some(Notice::DownloadStarted(path));
            }
            self.download_path_input.clear();
        }
    }

    /// Render the toolbar; returns the commands the user triggered
    fn render_toolbar(&mut self, ui: &mut egui::Ui) -> Vec<Command> {
        let mut commands = Vec::new();

        ui.horizontal(|ui| {
            if ui.button("←").on_hover_text("Go back").clicked() {
                commands.push(Command::Back);
            }
            if ui.button("→").on_hover_text("Go forward").clicked() {
                commands.push(Command::Forward);
            }
            if ui.button("⟳").on_hover_text("Reload").clicked() {
                commands.push(Command::Reload);
            }
            if ui.button("🏠").on_hover_text("Home").clicked() {
                commands.push(Command::Home);
            }

            // URL bar
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.url_input)
                    .desired_width(ui.available_width() - 260.0)
                    .hint_text("Enter URL..."),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                commands.push(Command::Navigate(self.url_input.clone()));
            }

            if ui.button("🕒").on_hover_text("History").clicked() {
                commands.push(Command::ShowHistory);
            }
            if ui.button("📥").on_hover_text("Downloads").clicked() {
                commands.push(Command::ShowDownloads);
            }
            if ui.button("🗑").on_hover_text("Clear browsing data").clicked() {
                commands.push(Command::ClearData);
            }
            if ui.button("🖥").on_hover_text("Toggle fullscreen").clicked() {
                commands.push(Command::ToggleFullscreen);
            }
            if ui.button("🕶").on_hover_text("Toggle incognito").clicked() {
                commands.push(Command::ToggleIncognito);
            }
            if ui.button("🌙").on_hover_text("Toggle dark mode").clicked() {
                commands.push(Command::ToggleDarkMode);
            }
        });

        commands
    }

    /// Render the tab strip; returns the commands the user triggered
    fn render_tab_bar(&mut self, ui: &mut egui::Ui) -> Vec<Command> {
        let mut commands = Vec::new();

        ui.horizontal(|ui| {
            let tabs: Vec<_> = self
                .tabs
                .tabs()
                .iter()
                .map(|t| (t.id(), t.title().to_string()))
                .collect();
            let active = self.tabs.current();

            for (id, title) in tabs {
                let is_active = active == Some(id);
                let text = tab_label(&title);

                let button = egui::Button::new(&text).fill(if is_active {
                    ui.style().visuals.selection.bg_fill
                } else {
                    ui.style().visuals.widgets.inactive.bg_fill
                });
                if ui.add(button).clicked() {
                    commands.push(Command::SwitchTab(id));
                }

                if ui.small_button("×").clicked() {
                    commands.push(Command::CloseTab(id));
                }

                ui.separator();
            }

            if ui.button("+").on_hover_text("Open a new tab").clicked() {
                commands.push(Command::NewTab);
            }
        });

        commands
    }

    /// Render the content area placeholder for the active tab
    fn render_content(&mut self, ui: &mut egui::Ui) {
        if let Some(tab) = self.tabs.active_tab() {
            let url = tab.url();
            if url.is_empty() || url == navigation::BLANK_PAGE {
                self.render_new_tab_page(ui);
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label(format!("Page: {url}"));
                });
            }
        } else {
            self.render_new_tab_page(ui);
        }
    }

    fn render_new_tab_page(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);
            ui.heading("🌐 Breezy");
            ui.add_space(20.0);
            ui.label("A minimal tabbed browser shell");
        });
    }

    /// Render history, downloads, save-prompt, and notice dialogs
    fn render_dialogs(&mut self, ctx: &egui::Context) {
        egui::Window::new("Browsing History")
            .open(&mut self.show_history)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if self.session.history().is_empty() {
                        ui.label("No history yet.");
                    }
                    for url in self.session.history() {
                        ui.label(url);
                    }
                });
            });

        egui::Window::new("Downloads")
            .open(&mut self.show_downloads)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if self.session.downloads().is_empty() {
                        ui.label("No downloads yet.");
                    }
                    for path in self.session.downloads() {
                        ui.label(path);
                    }
                });
            });

        if self.pending_download.is_some() {
            let mut decision = None;
            egui::Window::new("Save File As")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label("Save download to:");
                    ui.text_edit_singleline(&mut self.download_path_input);
                    ui.horizontal(|ui| {
                        if ui.button("Save").clicked() {
                            decision = Some(true);
                        }
                        if ui.button("Cancel").clicked() {
                            decision = Some(false);
                        }
                    });
                });
            if let Some(accepted) = decision {
                self.resolve_pending_download(accepted);
            }
        }

        if let Some(notice) = self.notice.clone() {
            let mut dismissed = false;
            egui::Window::new(notice.title())
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label(notice.message());
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            if dismissed {
                self.notice = None;
            }
        }
    }

    /// Session bookkeeping (history, downloads, mode flags)
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// The tab collection
    pub fn tabs(&self) -> &TabManager {
        &self.tabs
    }

    /// Currently displayed notice, if any
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Current URL bar text
    pub fn url_bar(&self) -> &str {
        &self.url_input
    }
}

impl eframe::App for BrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Engine callbacks first, then paint from the updated state
        self.pump_engine_events();

        if self.session.dark_mode() {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        let mut commands = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            commands.extend(self.render_toolbar(ui));
        });

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            commands.extend(self.render_tab_bar(ui));
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match self.tabs.active_tab() {
                    Some(tab) if !tab.url().is_empty() => {
                        ui.label(format!("Ready - {}", tab.url()));
                    }
                    _ => {
                        ui.label("Ready");
                    }
                }
                if self.session.incognito() {
                    ui.separator();
                    ui.label("🕶 Incognito");
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_content(ui);
        });

        self.render_dialogs(ctx);

        for command in commands {
            self.dispatch(ctx, command);
        }
    }
}

/// Tab strip label, truncated on character boundaries to keep the strip
/// compact with arbitrary (possibly non-ASCII) titles
fn tab_label(title: &str) -> String {
    if title.chars().count() > 20 {
        let short: String = title.chars().take(17).collect();
        format!("{short}...")
    } else {
        title.to_string()
    }
}

/// Run the browser application
pub fn run(config: BrowserConfig) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width as f32, config.window_height as f32])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Breezy"),
        ..Default::default()
    };

    eframe::run_native(
        "Breezy",
        options,
        Box::new(move |cc| Ok(Box::new(BrowserApp::new(cc, config)))),
    )
}
