//! Application Configuration
//!
//! Defaults can be overridden by a JSON object embedded in `index.html`:
//! `<script id="app-config" type="application/json">{ ... }</script>`.

use log::LevelFilter;
use serde::Deserialize;

use crate::constants::{DOCUMENTS_ENDPOINT, LOCAL_STORAGE_KEY};

/// Element id of the embedded config block
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path the API client reads from and writes to
    pub endpoint: String,
    /// Local storage key used by the mock backend
    pub storage_key: String,
    /// Delay before the first fetch, so the spinner is visible
    pub initial_fetch_delay_ms: u32,
    /// Autosave tick period
    pub autosave_interval_ms: u32,
    /// Serve the endpoint from local storage instead of the network
    pub use_mock_backend: bool,
    /// One of off/error/warn/info/debug/trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DOCUMENTS_ENDPOINT.to_string(),
            storage_key: LOCAL_STORAGE_KEY.to_string(),
            initial_fetch_delay_ms: 2000,
            autosave_interval_ms: 5000,
            use_mock_backend: cfg!(debug_assertions),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the embedded config block.
    ///
    /// Returns the config plus a parse error message when the block exists but
    /// is invalid; the caller logs it once logging is up.
    pub fn load() -> (Self, Option<String>) {
        let text = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => match Self::from_json(&json) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e.to_string())),
            },
            _ => (Self::default(), None),
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
