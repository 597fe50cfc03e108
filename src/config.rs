//! Configuration System
//!
//! Handles loading configuration from the served page. An optional embedded
//! JSON block provides a base config and `data-mingle-*` attributes on
//! `<body>` override individual values.

use serde::Deserialize;
use web_sys::Document;

/// Element id of the optional embedded JSON config block
pub const CONFIG_BLOCK_ID: &str = "mingle-config";

/// Attribute prefix for per-page overrides on `<body>`
const OVERRIDE_PREFIX: &str = "data-mingle-";

/// Override keys recognized on `<body>`
const OVERRIDE_KEYS: &[&str] = &[
    "like-path",
    "follow-path",
    "csrf-cookie",
    "toast-ms",
    "exit-ms",
    "typing-ms",
    "submit-delay-ms",
    "presence-ms",
    "char-limit",
    "char-warn",
];

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoints: EndpointConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub composer: ComposerConfig,
}

/// Backend endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_like_path")]
    pub like_path: String,

    #[serde(default = "default_follow_path")]
    pub follow_path: String,

    #[serde(default = "default_csrf_cookie")]
    pub csrf_cookie: String,
}

fn default_like_path() -> String {
    "/like_post".to_string()
}

fn default_follow_path() -> String {
    "/follow".to_string()
}

fn default_csrf_cookie() -> String {
    "csrftoken".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            like_path: default_like_path(),
            follow_path: default_follow_path(),
            csrf_cookie: default_csrf_cookie(),
        }
    }
}

/// Timer durations, all in milliseconds
#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    /// How long a toast stays on screen
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u32,

    /// Length of the toast exit transition
    #[serde(default = "default_exit_ms")]
    pub exit_ms: u32,

    /// Quiet period before the typing indicator clears
    #[serde(default = "default_typing_ms")]
    pub typing_ms: u32,

    /// Delay between accepting a comment and submitting its form
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u32,

    /// Interval between presence feed updates
    #[serde(default = "default_presence_ms")]
    pub presence_ms: u32,
}

fn default_toast_ms() -> u32 {
    5000
}

fn default_exit_ms() -> u32 {
    300
}

fn default_typing_ms() -> u32 {
    1000
}

fn default_submit_delay_ms() -> u32 {
    500
}

fn default_presence_ms() -> u32 {
    30000 // 30 seconds
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            toast_ms: default_toast_ms(),
            exit_ms: default_exit_ms(),
            typing_ms: default_typing_ms(),
            submit_delay_ms: default_submit_delay_ms(),
            presence_ms: default_presence_ms(),
        }
    }
}

/// Post composer limits
#[derive(Debug, Clone, Deserialize)]
pub struct ComposerConfig {
    /// Advertised character limit (not enforced)
    #[serde(default = "default_char_limit")]
    pub char_limit: usize,

    /// Counts above this show the warning color
    #[serde(default = "default_warn_above")]
    pub warn_above: usize,
}

fn default_char_limit() -> usize {
    500
}

fn default_warn_above() -> usize {
    400
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            char_limit: default_char_limit(),
            warn_above: default_warn_above(),
        }
    }
}

impl Config {
    /// Parse a config from embedded JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            error: e.to_string(),
        })
    }

    /// Load configuration from the document.
    ///
    /// Reads the optional `#mingle-config` JSON block, then applies
    /// `data-mingle-*` attribute overrides from `<body>`. A malformed block
    /// is logged and ignored so the page still boots on defaults.
    pub fn load(document: &Document) -> Self {
        let mut config = match embedded_json(document) {
            Some(json) => match Self::from_json(&json) {
                Ok(config) => config,
                Err(e) => {
                    web_sys::console::warn_1(&format!("{}", e).into());
                    Config::default()
                }
            },
            None => Config::default(),
        };

        config.apply_document_overrides(document);
        config
    }

    /// Apply `data-mingle-*` attribute overrides from `<body>`
    fn apply_document_overrides(&mut self, document: &Document) {
        if let Some(body) = document.body() {
            for key in OVERRIDE_KEYS {
                if let Some(value) = body.get_attribute(&format!("{}{}", OVERRIDE_PREFIX, key)) {
                    self.apply_override(key, &value);
                }
            }
        }
    }

    /// Apply a single named override. Unparseable numeric values are
    /// ignored and the current value stands.
    fn apply_override(&mut self, key: &str, value: &str) {
        match key {
            "like-path" => self.endpoints.like_path = value.to_string(),
            "follow-path" => self.endpoints.follow_path = value.to_string(),
            "csrf-cookie" => self.endpoints.csrf_cookie = value.to_string(),
            "toast-ms" => {
                if let Ok(v) = value.parse() {
                    self.timing.toast_ms = v;
                }
            }
            "exit-ms" => {
                if let Ok(v) = value.parse() {
                    self.timing.exit_ms = v;
                }
            }
            "typing-ms" => {
                if let Ok(v) = value.parse() {
                    self.timing.typing_ms = v;
                }
            }
            "submit-delay-ms" => {
                if let Ok(v) = value.parse() {
                    self.timing.submit_delay_ms = v;
                }
            }
            "presence-ms" => {
                if let Ok(v) = value.parse() {
                    self.timing.presence_ms = v;
                }
            }
            "char-limit" => {
                if let Ok(v) = value.parse() {
                    self.composer.char_limit = v;
                }
            }
            "char-warn" => {
                if let Ok(v) = value.parse() {
                    self.composer.warn_above = v;
                }
            }
            _ => {}
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints: EndpointConfig::default(),
            timing: TimingConfig::default(),
            composer: ComposerConfig::default(),
        }
    }
}

/// Read the text of the embedded config block, if the page carries one
fn embedded_json(document: &Document) -> Option<String> {
    document
        .get_element_by_id(CONFIG_BLOCK_ID)
        .and_then(|block| block.text_content())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Ignoring malformed embedded config: {error}")]
    Parse { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.endpoints.like_path, "/like_post");
        assert_eq!(config.endpoints.follow_path, "/follow");
        assert_eq!(config.endpoints.csrf_cookie, "csrftoken");
        assert_eq!(config.timing.toast_ms, 5000);
        assert_eq!(config.timing.exit_ms, 300);
        assert_eq!(config.timing.typing_ms, 1000);
        assert_eq!(config.timing.submit_delay_ms, 500);
        assert_eq!(config.timing.presence_ms, 30000);
        assert_eq!(config.composer.char_limit, 500);
        assert_eq!(config.composer.warn_above, 400);
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{"timing": {"toast_ms": 2500}}"#).unwrap();
        assert_eq!(config.timing.toast_ms, 2500);
        // Untouched fields keep their defaults
        assert_eq!(config.timing.exit_ms, 300);
        assert_eq!(config.endpoints.like_path, "/like_post");
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Config::from_json("not json").is_err());
    }

    #[test]
    fn test_apply_override_paths() {
        let mut config = Config::default();
        config.apply_override("like-path", "/api/like");
        config.apply_override("csrf-cookie", "token");
        assert_eq!(config.endpoints.like_path, "/api/like");
        assert_eq!(config.endpoints.csrf_cookie, "token");
    }

    #[test]
    fn test_apply_override_numeric() {
        let mut config = Config::default();
        config.apply_override("toast-ms", "1200");
        config.apply_override("char-limit", "280");
        assert_eq!(config.timing.toast_ms, 1200);
        assert_eq!(config.composer.char_limit, 280);
    }

    #[test]
    fn test_apply_override_unparseable_ignored() {
        let mut config = Config::default();
        config.apply_override("toast-ms", "soon");
        config.apply_override("char-limit", "-5");
        assert_eq!(config.timing.toast_ms, 5000);
        assert_eq!(config.composer.char_limit, 500);
    }

    #[test]
    fn test_apply_override_unknown_key() {
        let mut config = Config::default();
        config.apply_override("volume", "11");
        assert_eq!(config.timing.toast_ms, 5000);
    }
}
