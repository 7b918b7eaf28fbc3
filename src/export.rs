use serde::Serialize;
use serde_json::to_writer_pretty;
use std::fs::File;
use tracing::info;

use crate::error::{ScrapeError, ScrapeResult};
use crate::sites::{CatalogItem, Listing, Quote, TeamStat};

/// Generation timestamp for result envelopes
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Envelope written for the marketplace scrape
#[derive(Debug, Serialize)]
pub struct ProductsEnvelope {
    pub scraped_at: String,
    pub total_products: usize,
    pub products: Vec<Listing>,
}

impl ProductsEnvelope {
    pub fn new(products: Vec<Listing>) -> Self {
        Self { scraped_at: timestamp(), total_products: products.len(), products }
    }
}

/// Envelope written for the practice-site scrape
#[derive(Debug, Serialize)]
pub struct SiteDataEnvelope {
    pub scraped_at: String,
    pub total_items: usize,
    pub books: Vec<CatalogItem>,
    pub quotes: Vec<Quote>,
    pub teams: Vec<TeamStat>,
}

impl SiteDataEnvelope {
    pub fn new(books: Vec<CatalogItem>, quotes: Vec<Quote>, teams: Vec<TeamStat>) -> Self {
        Self {
            scraped_at: timestamp(),
            total_items: books.len() + quotes.len() + teams.len(),
            books,
            quotes,
            teams,
        }
    }
}

/// Write an envelope as pretty-printed UTF-8 JSON, overwriting the file
pub fn write_json<T: Serialize>(path: &str, envelope: &T) -> ScrapeResult<()> {
    let file = File::create(path)?;
    to_writer_pretty(file, envelope).map_err(|e| ScrapeError::export(e.to_string()))?;

    info!("Results written to {}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;
    use serde_json::Value;
    use tempfile::NamedTempFile;

    #[test]
    fn test_products_envelope_roundtrip() {
        let envelope = ProductsEnvelope::new(fallback::demo_listings("dog toys", 3));

        let temp_file = NamedTempFile::new().unwrap();
        let output_path = temp_file.path().to_str().unwrap();
        write_json(output_path, &envelope).unwrap();

        let contents = std::fs::read_to_string(output_path).unwrap();
        let parsed: Value = serde_json::from_str(&contents).unwrap();

        assert!(parsed.get("scraped_at").is_some());
        assert_eq!(parsed["total_products"], 3);
        assert_eq!(parsed["products"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["products"][0]["demo_data"], true);
        assert_eq!(parsed["products"][0]["search_query"], "dog toys");
    }

    #[test]
    fn test_site_data_envelope_counts() {
        let envelope = SiteDataEnvelope::new(
            fallback::demo_catalog(5),
            fallback::demo_quotes(4),
            fallback::demo_teams(3),
        );
        assert_eq!(envelope.total_items, 12);

        let temp_file = NamedTempFile::new().unwrap();
        let output_path = temp_file.path().to_str().unwrap();
        write_json(output_path, &envelope).unwrap();

        let contents = std::fs::read_to_string(output_path).unwrap();
        let parsed: Value = serde_json::from_str(&contents).unwrap();

        assert_eq!(parsed["total_items"], 12);
        assert_eq!(parsed["books"].as_array().unwrap().len(), 5);
        assert_eq!(parsed["quotes"].as_array().unwrap().len(), 4);
        assert_eq!(parsed["teams"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp();
        // "YYYY-MM-DD HH:MM:SS"
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
    }
}
