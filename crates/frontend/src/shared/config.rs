//! Runtime configuration of the dashboard.
//!
//! Defaults are embedded as TOML. The Metrics API base URL can be overridden
//! at build time (`SALES_API_BASE`) and at runtime with
//! `<meta name="sales-api-base" content="...">` in the host page.

use contracts::dashboards::d100_sales_overview::{Granularity, DEFAULT_TOP_CUSTOMERS_LIMIT};
use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "http://localhost:5001/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Name of the `<meta>` tag that overrides the API base URL.
pub const API_BASE_META: &str = "sales-api-base";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:5001/api"
request_timeout_ms = 10000

[dashboard]
top_customers_limit = 5
default_granularity = "month"
"#;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardSettings {
    #[serde(default = "default_top_customers_limit")]
    pub top_customers_limit: u32,
    #[serde(default)]
    pub default_granularity: Granularity,
}

fn default_request_timeout_ms() -> u32 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

fn default_top_customers_limit() -> u32 {
    DEFAULT_TOP_CUSTOMERS_LIMIT
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_API_BASE.to_string(),
                request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            },
            dashboard: DashboardSettings::default(),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            top_customers_limit: DEFAULT_TOP_CUSTOMERS_LIMIT,
            default_granularity: Granularity::default(),
        }
    }
}

impl AppConfig {
    /// Replace the API base URL when `value` is present and not blank.
    pub fn with_base_url_override(mut self, value: Option<&str>) -> Self {
        if let Some(base) = value.map(normalize_base_url).filter(|b| !b.is_empty()) {
            self.api.base_url = base;
        }
        self
    }
}

impl ApiConfig {
    /// Full URL of an endpoint path such as `/kpis`.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", normalize_base_url(&self.base_url), path)
    }
}

fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

pub fn parse_config(source: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(source)?;
    if config.dashboard.top_customers_limit == 0 {
        anyhow::bail!("dashboard.top_customers_limit must be positive");
    }
    if config.api.request_timeout_ms == 0 {
        anyhow::bail!("api.request_timeout_ms must be positive");
    }
    Ok(config)
}

/// Load configuration
///
/// Override order (last wins):
/// 1. Embedded defaults
/// 2. `SALES_API_BASE` at build time
/// 3. `<meta name="sales-api-base">` in the host page
pub fn load_config() -> anyhow::Result<AppConfig> {
    let config = parse_config(DEFAULT_CONFIG)?
        .with_base_url_override(option_env!("SALES_API_BASE"))
        .with_base_url_override(meta_content(API_BASE_META).as_deref());
    Ok(config)
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    let element = document.query_selector(&selector).ok()??;
    element.get_attribute("content")
}
