//! # Client configuration — `roster.toml`
//!
//! Settings for the roster client, read from a TOML file named
//! [`RosterConfig::filename`] (`"roster.toml"`).
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080/students"
//! ```
//!
//! Every field has a default, so a missing or empty file behaves like
//! [`RosterConfig::default`].

use serde::{Deserialize, Serialize};

/// Default location of the students collection.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/students";

/// Top-level configuration stored in `roster.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// REST service settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// URL of the students collection. Item URLs are `{base_url}/{id}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl RosterConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
        }
    }

    /// Replace the base URL when an override is present and non-empty.
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "roster.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
