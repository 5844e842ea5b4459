use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default)]
    pub version_prefix: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api-vscodeportfolio.vercel.app".to_string(),
            version_prefix: String::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub name: String,
    pub github_url: String,
    #[serde(default = "default_pages_path")]
    pub pages_path: String,
}

fn default_pages_path() -> String {
    "/pages".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Portfolio".to_string(),
            github_url: String::new(),
            pages_path: default_pages_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TerminalConfig {
    pub prompt: String,
    pub error_color: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: ">".to_string(),
            error_color: "#ed4337".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CacheConfig {
    pub home_ttl_hours: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { home_ttl_hours: 24 }
    }
}

/// Configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);

pub fn parse_config(text: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Parses the embedded config.toml, falling back to built-in defaults.
pub fn load_config() -> AppConfig {
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid embedded config.toml, using defaults: {}", e);
            AppConfig::default()
        }
    }
}

pub fn config() -> &'static AppConfig {
    &CONFIG
}
