//! Session manager: one remote browser session, navigation with a readiness
//! wait, and teardown.

use std::time::Duration;

use tracing::{error, info, warn};

use super::driver::{BrowserConnector, Locator, RemoteBrowser};
use crate::{AisError, Config, Result};

/// Element whose visibility marks a page as fully loaded.
const READINESS_MARKER: &str = "header";

/// Owns the remote browser session for its whole lifetime.
///
/// Lifecycle is `OPEN -> CLOSED`: only an open session accepts `navigate`,
/// and exhausting the navigation retry budget force-closes the session as a
/// side effect.
pub struct SessionManager<B: RemoteBrowser> {
    browser: Option<B>,
    base_url: String,
    page_load_timeout: Duration,
    poll_interval: Duration,
    max_retries: u32,
}

impl<B: RemoteBrowser> SessionManager<B> {
    /// Acquire a remote session through the connector. Fails without retry if
    /// the WebDriver endpoint is unreachable.
    pub async fn open<C>(connector: &C, config: &Config) -> Result<Self>
    where
        C: BrowserConnector<Browser = B>,
    {
        let browser = connector.connect(config).await?;
        Ok(Self {
            browser: Some(browser),
            base_url: config.base_url.clone(),
            page_load_timeout: config.timeouts.page_load,
            poll_interval: config.timeouts.poll,
            max_retries: config.max_navigation_retries,
        })
    }

    pub fn is_open(&self) -> bool {
        self.browser.is_some()
    }

    /// Borrow the live session handle for element access.
    pub fn browser(&self) -> Result<&B> {
        self.browser.as_ref().ok_or(AisError::SessionClosed)
    }

    /// Load `base_url + endpoint` and block until the readiness marker is
    /// visible. Each failed wait costs one attempt from the retry budget;
    /// once the budget is spent the browser is quit and a fatal error is
    /// returned — navigation failure ends the whole run.
    pub async fn navigate(&mut self, endpoint: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, endpoint);
        let marker = Locator::id(READINESS_MARKER);

        for attempt in 1..=self.max_retries {
            let browser = self.browser()?;
            browser.goto(&url).await?;
            match browser
                .wait_visible(&marker, self.page_load_timeout, self.poll_interval)
                .await
            {
                Ok(()) => {
                    info!(%url, attempt, "page ready");
                    return Ok(());
                }
                Err(err) => {
                    warn!(%url, attempt, max = self.max_retries, error = %err,
                        "readiness marker did not appear");
                }
            }
        }

        error!(%url, attempts = self.max_retries, "navigation retries exhausted, closing session");
        if let Err(close_err) = self.close().await {
            warn!(error = %close_err, "session teardown after failed navigation also failed");
        }
        Err(AisError::Navigation {
            endpoint: endpoint.to_string(),
            attempts: self.max_retries,
        })
    }

    /// Quit the remote session. At most one close per open; a second call
    /// reports `SessionClosed`.
    pub async fn close(&mut self) -> Result<()> {
        let browser = self.browser.take().ok_or(AisError::SessionClosed)?;
        browser.quit().await?;
        info!("browser session closed");
        Ok(())
    }
}
