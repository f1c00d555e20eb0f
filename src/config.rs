//! Startup configuration
//!
//! Read once at launch from an optional `breezy.json` in the working
//! directory. Anything missing falls back to defaults matching the
//! reference behavior; a malformed file logs a warning and is ignored
//! rather than aborting startup.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::utils::Result;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "breezy.json";

/// Browser startup configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Destination loaded by the home button and destination-less tabs
    pub home_url: String,
    /// Hostnames navigation is refused to (exact literal matches)
    pub blocked_domains: Vec<String>,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            home_url: "http://www.google.com".to_string(),
            blocked_domains: vec!["example.com".to_string(), "test.com".to_string()],
            window_width: 1280,
            window_height: 720,
        }
    }
}

impl BrowserConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Load `breezy.json` if present, falling back to defaults
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("loaded configuration from {CONFIG_FILE}");
                config
            }
            Err(e) => {
                log::warn!("ignoring {CONFIG_FILE}: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_behavior() {
        let config = BrowserConfig::default();
        assert_eq!(config.home_url, "http://www.google.com");
        assert_eq!(config.blocked_domains, ["example.com", "test.com"]);
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.window_height, 720);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: BrowserConfig =
            serde_json::from_str(r#"{ "home_url": "https://duckduckgo.com" }"#).unwrap();
        assert_eq!(config.home_url, "https://duckduckgo.com");
        assert_eq!(config.blocked_domains, ["example.com", "test.com"]);
    }

    #[test]
    fn test_full_json() {
        let config: BrowserConfig = serde_json::from_str(
            r#"{
                "home_url": "http://start.page",
                "blocked_domains": ["evil.org"],
                "window_width": 800,
                "window_height": 600
            }"#,
        )
        .unwrap();
        assert_eq!(config.blocked_domains, ["evil.org"]);
        assert_eq!(config.window_width, 800);
    }
}
