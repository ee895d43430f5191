//! Signal acquisition from public RSS feeds.
//!
//! Feeds are polled in a fixed order; entries become [`Signal`]s after
//! whitespace normalization, deduplication by source URL and
//! timestamping. When every feed comes back empty the acquirer falls
//! back to scraping two known listing pages (see [`crate::scrape`]).

use std::collections::HashSet;
use std::time::Duration;

use reqwest::header::ACCEPT;
use tracing::{debug, warn};

use signal_graph_core::config::AcquireConfig;
use signal_graph_core::types::Signal;

use crate::error::IngestResult;
use crate::scrape::{self, FALLBACK_PAGES};

/// Public agribusiness feeds polled on every refresh.
pub const RSS_SOURCES: &[&str] = &[
    "https://www.embrapa.br/busca-de-noticias/-/busca/feed/rss/1/noticias",
    "https://www.gov.br/agricultura/pt-br/assuntos/noticias/@@RSS",
    "https://valor.globo.com/agronegocios/rss.xml",
    "https://revistagloborural.globo.com/rss/ultimas/feed.xml",
    "https://www.canalrural.com.br/feed/",
    "https://www.noticiasagricolas.com.br/rss",
    "https://www.agrolink.com.br/rss/ultimas.xml",
];

const FEED_ACCEPT: &str = "application/rss+xml,application/xml,text/xml;q=0.9,*/*;q=0.8";

/// Collapse runs of whitespace and trim, preserving word order.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop signals with an already-seen source URL and cap the batch size.
///
/// The first occurrence of each URL wins, preserving feed order.
pub fn dedup_and_cap(signals: Vec<Signal>, max_items: usize) -> Vec<Signal> {
    let mut seen: HashSet<String> = HashSet::with_capacity(signals.len());
    let mut kept = Vec::new();
    for signal in signals {
        if seen.insert(signal.source.clone()) {
            kept.push(signal);
            if kept.len() >= max_items {
                break;
            }
        }
    }
    kept
}

/// Polls the configured feeds and produces deduplicated, timestamped signals.
pub struct Acquirer {
    client: reqwest::Client,
    config: AcquireConfig,
}

impl Acquirer {
    /// Build an acquirer with the configured timeout and User-Agent.
    pub fn new(config: &AcquireConfig) -> IngestResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Fetch and parse one feed into signals.
    ///
    /// Entries without a title or link are skipped; titles are
    /// whitespace-normalized. No deduplication happens at this level.
    async fn fetch_feed(&self, url: &str) -> IngestResult<Vec<Signal>> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, FEED_ACCEPT)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;

        let feed = feed_rs::parser::parse(body.as_ref())
            .map_err(|e| crate::error::IngestError::Feed(e.to_string()))?;

        let mut signals = Vec::new();
        for entry in feed.entries {
            let title = entry
                .title
                .map(|t| normalize_whitespace(&t.content))
                .unwrap_or_default();
            let link = entry.links.first().map(|l| l.href.clone()).unwrap_or_default();
            if !title.is_empty() && !link.is_empty() {
                signals.push(Signal::new(title, link));
            }
        }
        Ok(signals)
    }

    /// Collect signals from every feed, falling back to HTML scraping
    /// when the feeds yield nothing.
    ///
    /// Failures are logged per source and degrade to fewer signals; the
    /// result may be empty and the caller hands it to the core as-is.
    pub async fn collect(&self) -> Vec<Signal> {
        let mut collected = Vec::new();
        for url in RSS_SOURCES {
            match self.fetch_feed(url).await {
                Ok(mut signals) => {
                    debug!(url, count = signals.len(), "feed fetched");
                    collected.append(&mut signals);
                }
                Err(e) => warn!(url, error = %e, "feed fetch failed"),
            }
            if collected.len() >= self.config.max_items {
                break;
            }
        }

        if collected.is_empty() {
            collected = self.collect_fallback().await;
        }

        dedup_and_cap(collected, self.config.max_items)
    }

    /// Scrape the fallback listing pages for headline anchors.
    async fn collect_fallback(&self) -> Vec<Signal> {
        let mut collected = Vec::new();
        for page in FALLBACK_PAGES {
            let body = match self.fetch_page(page.url).await {
                Ok(body) => body,
                Err(e) => {
                    warn!(url = page.url, error = %e, "fallback fetch failed");
                    continue;
                }
            };
            match scrape::extract_headlines(&body, page.selector) {
                Ok(items) => {
                    debug!(url = page.url, count = items.len(), "fallback scraped");
                    collected.extend(
                        items
                            .into_iter()
                            .map(|(title, link)| Signal::new(title, link)),
                    );
                }
                Err(e) => warn!(url = page.url, error = %e, "fallback scrape failed"),
            }
        }
        collected
    }

    async fn fetch_page(&self, url: &str) -> IngestResult<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
