use serde::{Deserialize, Serialize};

/// Campaigns per page when the config names none.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Daily briefs fetched when the config names none.
pub const DEFAULT_BRIEF_LIMIT: u32 = 7;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub views: ViewConfig,
}

/// Connection settings for the REST backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme + host + port (+ optional path prefix) of the backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Settings shared by the list views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Campaigns per page (default: 20, backend maximum: 100).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Number of daily briefs fetched (default: 7).
    #[serde(default = "default_brief_limit")]
    pub brief_limit: u32,
    /// `type` attached to advice composed by hand (default: "custom").
    #[serde(default = "default_advice_type")]
    pub advice_type: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_brief_limit() -> u32 {
    DEFAULT_BRIEF_LIMIT
}

fn default_advice_type() -> String {
    "custom".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            brief_limit: default_brief_limit(),
            advice_type: default_advice_type(),
        }
    }
}
