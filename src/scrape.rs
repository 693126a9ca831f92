//! Scrape orchestrator: sequences the two AISWEB queries for one ICAO code.

use std::time::Duration;

use tracing::info;

use crate::browser::{BrowserConnector, BrowserElement, ElementAccessor, Locator, RemoteBrowser, SessionManager};
use crate::types::{AerodromeInfo, Icao};
use crate::{AisError, Config, Result};

/// Charts listing page.
const CHARTS_ENDPOINT: &str = "?i=cartas";
/// Name of the table column holding chart identifiers.
const CHART_COLUMN: &str = "Carta";

/// Drives one browser session through the aerodrome-info and chart-listing
/// pages for a single ICAO code.
pub struct AisScraper<B: RemoteBrowser> {
    session: SessionManager<B>,
    icao: Icao,
    action_delay: Duration,
    element_timeout: Duration,
    poll_interval: Duration,
}

impl<B: RemoteBrowser> AisScraper<B> {
    /// Check that the site root answers over plain HTTP, then open the
    /// browser session. The reachability check runs first: when it fails no
    /// session is ever opened.
    pub async fn connect<C>(icao: Icao, config: &Config, connector: &C) -> Result<Self>
    where
        C: BrowserConnector<Browser = B>,
    {
        check_site_connection(&config.base_url, config.timeouts.connectivity).await?;
        let session = SessionManager::open(connector, config).await?;
        info!(icao = %icao, "scrape session ready");
        Ok(Self {
            session,
            icao,
            action_delay: config.action_delay,
            element_timeout: config.timeouts.element,
            poll_interval: config.timeouts.poll,
        })
    }

    pub fn icao(&self) -> &Icao {
        &self.icao
    }

    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }

    /// Fetch METAR, TAF and sun times from the aerodrome info page.
    ///
    /// Any of the four elements failing to appear tears down the whole
    /// session per the accessor policy; there is no partial record.
    pub async fn fetch_aerodrome_info(&mut self) -> Result<AerodromeInfo> {
        let endpoint = format!("?i=aerodromos&codigo={}", self.icao);
        self.session.navigate(&endpoint).await?;
        let accessor = self.accessor()?;

        let metar = accessor
            .read_text(&Locator::xpath("//h5[text()='METAR']/following-sibling::p[1]"))
            .await?;
        let taf = accessor
            .read_text(&Locator::xpath("//h5[text()='TAF']/following-sibling::p[1]"))
            .await?;
        let sunset = accessor.read_text(&Locator::xpath("//sunset")).await?;
        let sunrise = accessor.read_text(&Locator::xpath("//sunrise")).await?;

        Ok(AerodromeInfo {
            metar: non_empty(metar),
            taf: non_empty(taf),
            sunrise: non_empty(sunrise),
            sunset: non_empty(sunset),
        })
    }

    /// Fetch the chart names listed for the ICAO code, in site order. An
    /// empty results table yields an empty vector.
    pub async fn fetch_chart_listing(&mut self) -> Result<Vec<String>> {
        self.session.navigate(CHARTS_ENDPOINT).await?;
        let accessor = self.accessor()?;

        let icao_input = accessor
            .locate(&Locator::xpath("//input[contains(@name, 'icaocode')]"))
            .await?;
        let filter_button = accessor
            .locate(&Locator::xpath("//input[contains(@value, 'Filtrar')]"))
            .await?;
        icao_input.send_keys(self.icao.as_str()).await?;
        filter_button.click().await?;

        let table = accessor
            .extract_table(&Locator::xpath("//table[contains(@id, 'datatable')]"))
            .await?;
        Ok(table.column(CHART_COLUMN).unwrap_or_default())
    }

    /// Release the browser session.
    pub async fn end(&mut self) -> Result<()> {
        self.session.close().await
    }

    fn accessor(&self) -> Result<ElementAccessor<'_, B>> {
        Ok(ElementAccessor::new(
            self.session.browser()?,
            self.action_delay,
            self.element_timeout,
            self.poll_interval,
        ))
    }
}

/// Reachability precheck against the site root. HTTP error statuses count as
/// unreachable, same as a refused connection.
pub async fn check_site_connection(base_url: &str, timeout: Duration) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AisError::Connectivity(e.to_string()))?;
    client
        .get(base_url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| AisError::Connectivity(format!("{}: {}", base_url, e)))?;
    Ok(())
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
