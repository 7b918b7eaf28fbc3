use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::error::ScrapeResult;
use crate::extract::{extract_records, parse_selector, FieldRule};
use crate::normalize::{assemble_price, join_url, truncate_title};

/// Default literal when no price node is present
pub const PRICE_UNAVAILABLE: &str = "Price not available";

/// One marketplace search-result listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub asin: String,
    pub title: String,
    pub price: String,
    pub rating: String,
    pub reviews: String,
    pub image_url: String,
    pub product_url: String,
    /// Present on demo records only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    /// Present on demo records only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_data: Option<bool>,
}

/// Extractor for marketplace search-result cards
pub struct ListingExtractor {
    container: Selector,
    title: FieldRule,
    price_whole: FieldRule,
    price_fraction: FieldRule,
    rating: FieldRule,
    reviews: FieldRule,
    image: FieldRule,
    link: FieldRule,
}

impl ListingExtractor {
    pub fn new() -> ScrapeResult<Self> {
        Ok(Self {
            container: parse_selector("div[data-component-type=\"s-search-result\"]")?,
            title: FieldRule::text("h2 a span", "No title")?,
            price_whole: FieldRule::text("span.a-price-whole", PRICE_UNAVAILABLE)?,
            price_fraction: FieldRule::text("span.a-price-fraction", "")?,
            rating: FieldRule::text("span.a-icon-alt", "No rating")?,
            reviews: FieldRule::text("span.a-size-base.s-underline-text", "0")?,
            image: FieldRule::attr("img.s-image", "src", "")?,
            link: FieldRule::attr("h2 a", "href", "")?,
        })
    }

    /// Extract up to `max` listings from a parsed search-results page
    pub fn extract_all(&self, document: &Html, base_url: &str, max: usize) -> Vec<Listing> {
        extract_records(document, &self.container, Some(max), |card| {
            self.extract_one(card, base_url)
        })
    }

    fn extract_one(&self, card: ElementRef<'_>, base_url: &str) -> ScrapeResult<Listing> {
        let asin = card.value().attr("data-asin").unwrap_or("").to_string();

        let price = match self.price_whole.capture(card) {
            Some(whole) => assemble_price(&whole, self.price_fraction.capture(card).as_deref()),
            None => PRICE_UNAVAILABLE.to_string(),
        };

        // No link element at all means no URL; a link without an href
        // still gets the bare base prefix.
        let product_url = match self.link.capture(card) {
            Some(href) => join_url(base_url, &href),
            None => String::new(),
        };

        Ok(Listing {
            asin,
            title: truncate_title(&self.title.value(card)),
            price,
            rating: self.rating.value(card),
            reviews: self.reviews.value(card),
            image_url: self.image.value(card),
            product_url,
            search_query: None,
            demo_data: None,
        })
    }
}
