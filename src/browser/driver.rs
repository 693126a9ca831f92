//! Capability seam over the remote browser.
//!
//! The scraper never talks to the wire protocol directly; it goes through
//! these traits. Production code implements them on a `thirtyfour` session
//! (see [`super::webdriver`]); tests substitute scripted fakes.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::{Config, Result};

/// Element selector, limited to the strategies the site contract needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    Id(String),
    XPath(String),
}

impl Locator {
    pub fn id(value: impl Into<String>) -> Self {
        Locator::Id(value.into())
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        Locator::XPath(value.into())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Id(value) => write!(f, "id={}", value),
            Locator::XPath(value) => write!(f, "xpath={}", value),
        }
    }
}

/// Handle to a located page element.
#[async_trait]
pub trait BrowserElement: Send + Sync {
    async fn text(&self) -> Result<String>;

    async fn attr(&self, name: &str) -> Result<Option<String>>;

    async fn click(&self) -> Result<()>;

    async fn send_keys(&self, keys: &str) -> Result<()>;
}

/// One remote browser session: navigate, bounded waits, teardown.
#[async_trait]
pub trait RemoteBrowser: Send + Sync {
    type Element: BrowserElement;

    async fn goto(&self, url: &str) -> Result<()>;

    /// Block until the element is present and visible, or time out.
    async fn wait_visible(&self, locator: &Locator, timeout: Duration, poll: Duration)
        -> Result<()>;

    /// Block until the element is present, or time out.
    async fn wait_present(
        &self,
        locator: &Locator,
        timeout: Duration,
        poll: Duration,
    ) -> Result<Self::Element>;

    /// End the remote session. Not guaranteed idempotent.
    async fn quit(&self) -> Result<()>;
}

/// Dials the remote endpoint and produces a configured session.
#[async_trait]
pub trait BrowserConnector: Send + Sync {
    type Browser: RemoteBrowser;

    async fn connect(&self, config: &Config) -> Result<Self::Browser>;
}
