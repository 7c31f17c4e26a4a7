//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the scrape
//! run or the lookup server starts.
//!
//! ## Example
//!
//! ```bash
//! export MENU_URL="https://www.mcdonalds.com/ua/uk-ua/eat/fullmenu.html"
//! export SNAPSHOT_PATH="data/menu_data.json"
//! export LISTEN="127.0.0.1:5000"
//! ```
//!
//! ## Optional Variables
//!
//! - `MENU_URL` - Listing page to scrape (default: the UA full menu)
//! - `BASE_URL` - Origin prepended to relative detail links (default: `https://www.mcdonalds.com`)
//! - `NUTRITION_API_URL` - Nutrition endpoint template containing `{item_id}`
//! - `SNAPSHOT_PATH` - Snapshot file location (default: `menu_data.json`)
//! - `LISTEN` - Bind address of the lookup service (default: `0.0.0.0:5000`)
//! - `HTTP_TIMEOUT_SECS` - Per-request timeout (default: 30)
//! - `USER_AGENT` - User agent sent upstream (default: `menu-scraper/<version>`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::application::services::{ITEM_ID_PLACEHOLDER, ScrapeSettings};

pub const DEFAULT_MENU_URL: &str = "https://www.mcdonalds.com/ua/uk-ua/eat/fullmenu.html";
pub const DEFAULT_BASE_URL: &str = "https://www.mcdonalds.com";
pub const DEFAULT_NUTRITION_API_URL: &str = "https://www.mcdonalds.com/dnaapp/itemDetails?country=UA&language=uk&showLiveData=true&item={item_id}";
pub const DEFAULT_SNAPSHOT_PATH: &str = "menu_data.json";
pub const DEFAULT_LISTEN: &str = "0.0.0.0:5000";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub menu_url: String,
    pub base_url: String,
    /// Nutrition endpoint with an `{item_id}` placeholder.
    pub nutrition_api_url: String,
    pub snapshot_path: PathBuf,
    pub listen_addr: String,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_url: DEFAULT_MENU_URL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            nutrition_api_url: DEFAULT_NUTRITION_API_URL.to_string(),
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            listen_addr: DEFAULT_LISTEN.to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            user_agent: default_user_agent(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_TIMEOUT_SECS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let http_timeout_secs = match env::var("HTTP_TIMEOUT_SECS") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("HTTP_TIMEOUT_SECS must be a number, got '{}'", value))?,
            Err(_) => defaults.http_timeout_secs,
        };

        Ok(Self {
            menu_url: env::var("MENU_URL").unwrap_or(defaults.menu_url),
            base_url: env::var("BASE_URL").unwrap_or(defaults.base_url),
            nutrition_api_url: env::var("NUTRITION_API_URL").unwrap_or(defaults.nutrition_api_url),
            snapshot_path: env::var("SNAPSHOT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.snapshot_path),
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            http_timeout_secs,
            user_agent: env::var("USER_AGENT").unwrap_or(defaults.user_agent),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a URL is not absolute `http`/`https`
    /// - `NUTRITION_API_URL` lacks the `{item_id}` placeholder
    /// - `LISTEN` is not `host:port`
    /// - `HTTP_TIMEOUT_SECS` is 0
    /// - `LOG_FORMAT` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        validate_http_url("MENU_URL", &self.menu_url)?;
        validate_http_url("BASE_URL", &self.base_url)?;

        if !self.nutrition_api_url.contains(ITEM_ID_PLACEHOLDER) {
            anyhow::bail!(
                "NUTRITION_API_URL must contain '{}', got '{}'",
                ITEM_ID_PLACEHOLDER,
                self.nutrition_api_url
            );
        }
        validate_http_url(
            "NUTRITION_API_URL",
            &self.nutrition_api_url.replace(ITEM_ID_PLACEHOLDER, "0"),
        )?;

        if self.snapshot_path.as_os_str().is_empty() {
            anyhow::bail!("SNAPSHOT_PATH must not be empty");
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.http_timeout_secs == 0 {
            anyhow::bail!("HTTP_TIMEOUT_SECS must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Source locations handed to the scrape pipeline.
    pub fn scrape_settings(&self) -> ScrapeSettings {
        ScrapeSettings {
            menu_url: self.menu_url.clone(),
            base_url: self.base_url.clone(),
            nutrition_url_template: self.nutrition_api_url.clone(),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Menu URL: {}", self.menu_url);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Nutrition API: {}", self.nutrition_api_url);
        tracing::info!("  Snapshot: {}", self.snapshot_path.display());
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  HTTP timeout: {}s", self.http_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn validate_http_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{} is not a valid URL: '{}'", name, value))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!(
            "{} must start with 'http://' or 'https://', got '{}'",
            name,
            value
        );
    }

    Ok(())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
