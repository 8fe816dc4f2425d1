//! App Configuration
//!
//! Optional overrides read from an inline JSON block in `index.html`:
//!
//! ```html
//! <script id="app-config" type="application/json">{"currency_label": "USD"}</script>
//! ```

use log::LevelFilter;
use serde::Deserialize;

/// Id of the element holding the JSON overrides
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// localStorage key holding the todo array
    pub storage_key: String,
    /// Label printed before prices
    pub currency_label: String,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "todos".to_string(),
            currency_label: "RM".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read overrides from the page. Missing element means defaults.
    ///
    /// Also returns the parse error, if any, so it can be logged once the
    /// logger is up.
    pub fn load() -> (Self, Option<String>) {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(format!("ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e))),
            },
            _ => (Self::default(), None),
        }
    }

    /// Parsed log level, `info` when unrecognized
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
