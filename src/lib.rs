//! AISWEB Scraper Library
//!
//! Retrieves aeronautical information for an airport ICAO code from the
//! AISWEB site by driving a remote browser session: METAR/TAF weather
//! reports, sunrise/sunset times, and the list of published charts.
//!
//! # Module Overview
//!
//! - [`browser`] - Remote browser capability traits, WebDriver implementation,
//!   session manager and element accessor
//! - [`scrape`] - Orchestrator sequencing the two page flows for one ICAO code
//! - [`table`] - HTML table extraction
//! - [`types`] - ICAO code and aerodrome info types
//! - [`config`] - Configuration and TOML file support
//! - [`logging`] - Per-run timestamped log file
//!
//! # Example
//!
//! ```no_run
//! use aisweb_lib::{AisScraper, Config, WebDriverConnector};
//!
//! # async fn example() -> aisweb_lib::Result<()> {
//! let config = Config::default();
//! let icao = "SBSP".parse()?;
//! let mut scraper = AisScraper::connect(icao, &config, &WebDriverConnector).await?;
//! let info = scraper.fetch_aerodrome_info().await?;
//! let charts = scraper.fetch_chart_listing().await?;
//! println!("{:?} {:?}", info.metar, charts);
//! scraper.end().await?;
//! # Ok(())
//! # }
//! ```

pub mod browser;
pub mod config;
pub mod error;
pub mod logging;
pub mod scrape;
pub mod table;
pub mod types;

pub use browser::{
    BrowserConnector, BrowserElement, ElementAccessor, Locator, RemoteBrowser, SessionManager,
    WebDriverConnector,
};
pub use config::{Config, Timeouts, DEFAULT_BASE_URL, DEFAULT_WEBDRIVER_URL};
pub use error::{AisError, Result};
pub use scrape::{check_site_connection, AisScraper};
pub use table::{parse_table, TableExtract};
pub use types::{AerodromeInfo, Icao};
