//! User interface components for the Breezy shell

mod app;
mod tab;

pub use app::{BrowserApp, Command, Notice, run};
pub use tab::{Tab, TabId, TabManager};
