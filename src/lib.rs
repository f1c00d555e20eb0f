//! # Breezy - Minimal tabbed browser shell
//!
//! A thin coordination layer over an embedded web-rendering engine. All
//! heavy lifting — networking, rendering, download I/O — belongs to the
//! engine behind the `engine` trait boundary; this crate owns tab
//! lifecycle, URL normalization, history and download bookkeeping, and
//! blocklist enforcement.
//!
//! ## Architecture
//!
//! - **policy**: static domain blocklist, consulted on every navigation
//! - **navigation**: URL bar input normalization and hostname extraction
//! - **session**: in-memory history, downloads, and mode flags
//! - **engine**: the rendering-engine contract plus a headless double
//! - **router**: engine callbacks → policy checks and session mutations
//! - **ui**: tab manager and the eframe shell window
//! - **config**: startup configuration
//! - **utils**: shared error types

pub mod config;
pub mod engine;
pub mod navigation;
pub mod policy;
pub mod router;
pub mod session;
pub mod ui;
pub mod utils;

// Re-export main types for convenience
pub use config::BrowserConfig;
pub use policy::BlockedDomainSet;
pub use session::SessionState;
pub use utils::{BreezyError, Result};

/// Browser version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = "Breezy";
