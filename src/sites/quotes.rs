use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::error::ScrapeResult;
use crate::extract::{extract_records, parse_selector, FieldRule};

/// Source tag stamped on every quotation record
pub const SOURCE: &str = "quotes.toscrape.com";

/// One quotation block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub tags: Vec<String>,
    pub source: String,
}

/// Extractor for quotation blocks
pub struct QuoteExtractor {
    container: Selector,
    text: FieldRule,
    author: FieldRule,
    tags: Selector,
}

impl QuoteExtractor {
    pub fn new() -> ScrapeResult<Self> {
        Ok(Self {
            container: parse_selector("div.quote")?,
            text: FieldRule::text("span.text", "")?,
            author: FieldRule::text("small.author", "Unknown")?,
            tags: parse_selector("div.tags a.tag")?,
        })
    }

    /// Extract all quotes from a parsed page
    pub fn extract_all(&self, document: &Html) -> Vec<Quote> {
        extract_records(document, &self.container, None, |block| self.extract_one(block))
    }

    fn extract_one(&self, block: ElementRef<'_>) -> ScrapeResult<Quote> {
        let tags = block
            .select(&self.tags)
            .map(|tag| tag.text().collect::<String>().trim().to_string())
            .collect();

        Ok(Quote {
            text: self.text.value(block),
            author: self.author.value(block),
            tags,
            source: SOURCE.to_string(),
        })
    }
}
