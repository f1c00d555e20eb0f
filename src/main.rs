//! Breezy - Minimal tabbed browser shell
//!
//! Entry point for the Breezy application.

use breezy::config::BrowserConfig;
use breezy::{NAME, VERSION};

fn main() {
    env_logger::init();

    log::info!("{NAME} v{VERSION} starting");
    let config = BrowserConfig::load_or_default();

    if let Err(e) = breezy::ui::run(config) {
        eprintln!("Failed to start browser: {e}");
        std::process::exit(1);
    }
}
