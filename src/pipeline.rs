use scraper::Html;
use tracing::info;

use crate::config::AppConfig;
use crate::error::ScrapeResult;
use crate::export::{self, ProductsEnvelope, SiteDataEnvelope};
use crate::fallback;
use crate::fetch::PageFetcher;
use crate::sites::{
    CatalogExtractor, CatalogItem, Listing, ListingExtractor, Quote, QuoteExtractor, TeamStat,
    TeamStatExtractor,
};

/// Demo records requested for the practice sites (larger than every
/// fixed set, so the full sequence is substituted)
const PRACTICE_DEMO_COUNT: usize = 10;

/// Whether a collection came from live extraction or the demo tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Live,
    Demo,
}

/// A scraped collection together with its origin
#[derive(Debug)]
pub struct ScrapeOutcome<T> {
    pub records: Vec<T>,
    pub origin: DataOrigin,
}

/// Substitute the demo set when extraction produced nothing.
///
/// This is the single place the fallback policy is applied; the
/// per-stage code below only reports what it got.
fn apply_fallback<T, F>(records: Vec<T>, demo: F) -> ScrapeOutcome<T>
where
    F: FnOnce() -> Vec<T>,
{
    if records.is_empty() {
        let records = demo();
        info!("No records extracted, substituting {} demo records", records.len());
        ScrapeOutcome { records, origin: DataOrigin::Demo }
    } else {
        ScrapeOutcome { records, origin: DataOrigin::Live }
    }
}

/// Sequential scraper over all configured sites
pub struct Scraper {
    fetcher: PageFetcher,
    config: AppConfig,
}

impl Scraper {
    pub fn new(config: AppConfig) -> ScrapeResult<Self> {
        let fetcher = PageFetcher::new(&config.fetch)?;
        Ok(Self { fetcher, config })
    }

    /// Fetch a page, returning `None` (not an error) when the fetch
    /// fails in a way the fallback policy covers.
    async fn fetch_page(&self, url: &str) -> Option<Html> {
        match self.fetcher.fetch_html(url).await {
            Ok(body) => Some(Html::parse_document(&body)),
            Err(e) => {
                info!("Fetch failed ({}): {} - switching to demo data", e.category(), e);
                None
            }
        }
    }

    /// Scrape marketplace search results for the configured query
    pub async fn scrape_marketplace(&self) -> ScrapeResult<ScrapeOutcome<Listing>> {
        let extractor = ListingExtractor::new()?;
        let query = self.config.targets.search_query.clone();
        let max = self.config.targets.max_products;

        info!("Searching marketplace for: {}", query);

        let records = match self.fetch_page(&self.config.search_url()).await {
            Some(document) => {
                extractor.extract_all(&document, &self.config.targets.marketplace_base, max)
            }
            None => Vec::new(),
        };

        Ok(apply_fallback(records, || fallback::demo_listings(&query, max)))
    }

    /// Scrape the catalog listing page
    pub async fn scrape_catalog(&self) -> ScrapeResult<ScrapeOutcome<CatalogItem>> {
        let extractor = CatalogExtractor::new()?;
        let base = self.config.targets.catalog_base.clone();

        info!("Scraping catalog: {}", base);

        let records = match self.fetch_page(&base).await {
            Some(document) => extractor.extract_all(&document, &base),
            None => Vec::new(),
        };

        Ok(apply_fallback(records, || fallback::demo_catalog(PRACTICE_DEMO_COUNT)))
    }

    /// Scrape the quotations page
    pub async fn scrape_quotes(&self) -> ScrapeResult<ScrapeOutcome<Quote>> {
        let extractor = QuoteExtractor::new()?;
        let url = self.config.targets.quotes_url.clone();

        info!("Scraping quotes: {}", url);

        let records = match self.fetch_page(&url).await {
            Some(document) => extractor.extract_all(&document),
            None => Vec::new(),
        };

        Ok(apply_fallback(records, || fallback::demo_quotes(PRACTICE_DEMO_COUNT)))
    }

    /// Scrape the team-statistics page
    pub async fn scrape_teams(&self) -> ScrapeResult<ScrapeOutcome<TeamStat>> {
        let extractor = TeamStatExtractor::new()?;
        let url = self.config.targets.teams_url.clone();

        info!("Scraping team statistics: {}", url);

        let records = match self.fetch_page(&url).await {
            Some(document) => extractor.extract_all(&document),
            None => Vec::new(),
        };

        Ok(apply_fallback(records, || fallback::demo_teams(PRACTICE_DEMO_COUNT)))
    }

    /// Run the marketplace scrape and write its envelope
    pub async fn run_marketplace(&self, output_path: &str) -> ScrapeResult<usize> {
        let outcome = self.scrape_marketplace().await?;
        log_outcome("marketplace", &outcome.origin, outcome.records.len());

        let envelope = ProductsEnvelope::new(outcome.records);
        export::write_json(output_path, &envelope)?;
        Ok(envelope.total_products)
    }

    /// Run the practice-site scrapes and write their shared envelope
    pub async fn run_sites(&self, output_path: &str) -> ScrapeResult<usize> {
        let books = self.scrape_catalog().await?;
        log_outcome("catalog", &books.origin, books.records.len());

        let quotes = self.scrape_quotes().await?;
        log_outcome("quotes", &quotes.origin, quotes.records.len());

        let teams = self.scrape_teams().await?;
        log_outcome("teams", &teams.origin, teams.records.len());

        let envelope = SiteDataEnvelope::new(books.records, quotes.records, teams.records);
        export::write_json(output_path, &envelope)?;
        Ok(envelope.total_items)
    }
}

fn log_outcome(site: &str, origin: &DataOrigin, count: usize) {
    match origin {
        DataOrigin::Live => info!("{}: extracted {} live records", site, count),
        DataOrigin::Demo => info!("{}: using {} demo records", site, count),
    }
}
