//! Element accessor: locate elements and materialize tables, with one
//! uniform post-action policy around every operation.

use std::time::Duration;

use tracing::{debug, error, warn};

use super::driver::{BrowserElement, Locator, RemoteBrowser};
use crate::table::{parse_table, TableExtract};
use crate::{AisError, Result};

/// Read-only view over the live session handle.
///
/// Every operation settles through the same policy: sleep `action_delay`
/// after success, and on any error quit the browser session outright and
/// surface an `ElementAccess` error. There is no softer "not found" outcome.
pub struct ElementAccessor<'a, B: RemoteBrowser> {
    browser: &'a B,
    action_delay: Duration,
    element_timeout: Duration,
    poll_interval: Duration,
}

impl<'a, B: RemoteBrowser> ElementAccessor<'a, B> {
    pub fn new(
        browser: &'a B,
        action_delay: Duration,
        element_timeout: Duration,
        poll_interval: Duration,
    ) -> Self {
        Self {
            browser,
            action_delay,
            element_timeout,
            poll_interval,
        }
    }

    /// Wait for the element to be present and return its handle.
    pub async fn locate(&self, locator: &Locator) -> Result<B::Element> {
        debug!(%locator, "locating element");
        let outcome = self
            .browser
            .wait_present(locator, self.element_timeout, self.poll_interval)
            .await;
        self.settle(locator, outcome).await
    }

    /// Wait for the element and return its text content.
    pub async fn read_text(&self, locator: &Locator) -> Result<String> {
        let outcome = async {
            let element = self
                .browser
                .wait_present(locator, self.element_timeout, self.poll_interval)
                .await?;
            element.text().await
        }
        .await;
        self.settle(locator, outcome).await
    }

    /// Wait for a table-like element, serialize its rendered markup and parse
    /// it into a [`TableExtract`]. Malformed grids come back empty; only the
    /// element access itself can fail.
    pub async fn extract_table(&self, locator: &Locator) -> Result<TableExtract> {
        let outcome = async {
            let element = self
                .browser
                .wait_present(locator, self.element_timeout, self.poll_interval)
                .await?;
            let html = element
                .attr("outerHTML")
                .await?
                .ok_or_else(|| AisError::element_access(format!("{} has no outerHTML", locator)))?;
            Ok(parse_table(&html))
        }
        .await;
        self.settle(locator, outcome).await
    }

    /// The cross-cutting policy applied to every accessor operation.
    async fn settle<T>(&self, locator: &Locator, outcome: Result<T>) -> Result<T> {
        match outcome {
            Ok(value) => {
                tokio::time::sleep(self.action_delay).await;
                Ok(value)
            }
            Err(err) => {
                error!(%locator, error = %err, "element access failed, tearing down browser session");
                if let Err(quit_err) = self.browser.quit().await {
                    warn!(error = %quit_err, "browser teardown after failure also failed");
                }
                Err(AisError::element_access(format!("{}: {}", locator, err)))
            }
        }
    }
}
