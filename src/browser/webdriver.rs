//! `thirtyfour`-backed implementation of the browser capability traits.
//!
//! Talks to a Selenium-compatible remote endpoint (`http://<host>:4444/wd/hub`)
//! and drives one Chrome session configured with the fixed flag set from
//! [`Config::browser_args`].

use std::time::Duration;

use async_trait::async_trait;
use thirtyfour::prelude::*;
use thirtyfour::ChromiumLikeCapabilities;
use tracing::info;

use super::driver::{BrowserConnector, BrowserElement, Locator, RemoteBrowser};
use crate::{Config, Result};

/// Connects to the configured WebDriver endpoint.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebDriverConnector;

impl Locator {
    fn to_by(&self) -> By {
        match self {
            Locator::Id(value) => By::Id(value.as_str()),
            Locator::XPath(value) => By::XPath(value.as_str()),
        }
    }
}

#[async_trait]
impl BrowserConnector for WebDriverConnector {
    type Browser = WebDriver;

    async fn connect(&self, config: &Config) -> Result<WebDriver> {
        let mut caps = DesiredCapabilities::chrome();
        for arg in &config.browser_args {
            caps.add_arg(arg)?;
        }
        let driver = WebDriver::new(&config.webdriver_url, caps).await?;
        info!(endpoint = %config.webdriver_url, "remote browser session acquired");
        Ok(driver)
    }
}

#[async_trait]
impl RemoteBrowser for WebDriver {
    type Element = WebElement;

    async fn goto(&self, url: &str) -> Result<()> {
        WebDriver::goto(self, url).await?;
        Ok(())
    }

    async fn wait_visible(
        &self,
        locator: &Locator,
        timeout: Duration,
        poll: Duration,
    ) -> Result<()> {
        let element = self
            .query(locator.to_by())
            .wait(timeout, poll)
            .first()
            .await?;
        element
            .wait_until()
            .wait(timeout, poll)
            .displayed()
            .await?;
        Ok(())
    }

    async fn wait_present(
        &self,
        locator: &Locator,
        timeout: Duration,
        poll: Duration,
    ) -> Result<WebElement> {
        let element = self
            .query(locator.to_by())
            .wait(timeout, poll)
            .first()
            .await?;
        Ok(element)
    }

    async fn quit(&self) -> Result<()> {
        WebDriver::quit(self.clone()).await?;
        Ok(())
    }
}

#[async_trait]
impl BrowserElement for WebElement {
    async fn text(&self) -> Result<String> {
        Ok(WebElement::text(self).await?)
    }

    async fn attr(&self, name: &str) -> Result<Option<String>> {
        Ok(WebElement::attr(self, name).await?)
    }

    async fn click(&self) -> Result<()> {
        WebElement::click(self).await?;
        Ok(())
    }

    async fn send_keys(&self, keys: &str) -> Result<()> {
        WebElement::send_keys(self, keys).await?;
        Ok(())
    }
}
