//! Scrape orchestration
//!
//! Ties the pieces together: route the URL to a site profile, fetch the
//! page, parse it, run the extraction engine. One fetch per call, no
//! retries; the timeout on the HTTP client is the only cancellation.

use scraper::Html;
use tracing::{debug, info};

use crate::domain::cigar::CigarRecord;
use crate::error::ScrapeError;
use crate::infrastructure::http_client::{HttpClient, HttpClientConfig};
use crate::infrastructure::parsing;
use crate::infrastructure::routing;

/// Scrapes cigar information from retailer and review sites.
pub struct CigarScraper {
    client: HttpClient,
}

impl CigarScraper {
    /// Create a scraper with the default HTTP configuration.
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_config(&HttpClientConfig::default())
    }

    /// Create a scraper with a custom HTTP configuration.
    pub fn with_config(config: &HttpClientConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            client: HttpClient::new(config)?,
        })
    }

    /// Scrape a product URL into a cigar record.
    ///
    /// Transport problems, non-success statuses and attribute-free pages
    /// all surface as distinct [`ScrapeError`] variants.
    pub async fn scrape(&self, url: &str) -> Result<CigarRecord, ScrapeError> {
        let profile = routing::select(url);
        debug!(url, site = profile.name, "selected extraction profile");

        let html = self.client.get_text(url).await?;
        let document = Html::parse_document(&html);

        parsing::extract(&document, profile).ok_or_else(|| ScrapeError::NoAttributes {
            url: url.to_string(),
        })
    }
}

/// Scrape `url` with a default-configured scraper.
pub async fn scrape_cigar_url(url: &str) -> Result<CigarRecord, ScrapeError> {
    let scraper = CigarScraper::new()?;
    let record = scraper.scrape(url).await?;

    info!(
        brand = ?record.brand,
        name = ?record.name,
        length = ?record.length,
        ring_gauge = ?record.ring_gauge,
        size = ?record.size,
        strength = ?record.strength,
        origin = ?record.origin,
        wrapper = ?record.wrapper,
        "cigar scrape completed"
    );

    Ok(record)
}
