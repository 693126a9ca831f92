use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{AisError, Result};

/// Default AISWEB root URL.
pub const DEFAULT_BASE_URL: &str = "https://aisweb.decea.mil.br/";

/// Default Selenium-compatible remote endpoint.
pub const DEFAULT_WEBDRIVER_URL: &str = "http://chrome:4444/wd/hub";

/// Chrome flags the remote session is always started with.
const DEFAULT_BROWSER_ARGS: &[&str] = &[
    "--no-sandbox",
    "--headless",
    "--disable-gpu",
    "--disable-extensions",
    "--disable-infobars",
    "--start-maximized",
    "--disable-notifications",
    "--disable-dev-shm-usage",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root URL of the target site; endpoints are appended verbatim.
    pub base_url: String,
    /// Remote browser control endpoint.
    pub webdriver_url: String,
    /// Flags passed to the remote Chrome session.
    pub browser_args: Vec<String>,
    /// Directory the per-run log file is written to.
    pub log_dir: PathBuf,
    /// Pause after every successful accessor operation, throttling the
    /// interaction rate against the site.
    #[serde(with = "humantime_serde")]
    pub action_delay: Duration,
    /// Navigation attempts before the session is torn down.
    pub max_navigation_retries: u32,
    pub timeouts: Timeouts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Timeouts {
    /// Reachability precheck against the site root.
    #[serde(with = "humantime_serde")]
    pub connectivity: Duration,
    /// Bound on waiting for the readiness marker after navigation.
    #[serde(with = "humantime_serde")]
    pub page_load: Duration,
    /// Bound on waiting for an individual element.
    #[serde(with = "humantime_serde")]
    pub element: Duration,
    /// Poll interval for the bounded waits.
    #[serde(with = "humantime_serde")]
    pub poll: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connectivity: Duration::from_secs(10),
            page_load: Duration::from_secs(30),
            element: Duration::from_secs(3),
            poll: Duration::from_millis(500),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            browser_args: DEFAULT_BROWSER_ARGS.iter().map(|s| s.to_string()).collect(),
            log_dir: PathBuf::from("."),
            action_delay: Duration::ZERO,
            max_navigation_retries: 3,
            timeouts: Timeouts::default(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AisError::config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&raw).map_err(|e| {
            AisError::config(format!("Invalid config {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url)
            .map_err(|e| AisError::config(format!("base_url '{}': {}", self.base_url, e)))?;
        Url::parse(&self.webdriver_url).map_err(|e| {
            AisError::config(format!("webdriver_url '{}': {}", self.webdriver_url, e))
        })?;
        if self.max_navigation_retries == 0 {
            return Err(AisError::config("max_navigation_retries must be at least 1"));
        }
        Ok(())
    }
}
