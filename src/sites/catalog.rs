use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::error::ScrapeResult;
use crate::extract::{extract_records, parse_selector, FieldRule};
use crate::normalize::{join_url, rating_from_classes, star_glyphs};

/// Source tag stamped on every catalog record
pub const SOURCE: &str = "books.toscrape.com";

/// One catalog product card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub title: String,
    pub price: String,
    pub rating: u8,
    pub rating_stars: String,
    pub image_url: String,
    pub product_url: String,
    pub availability: String,
    pub source: String,
}

/// Extractor for catalog product cards
pub struct CatalogExtractor {
    container: Selector,
    title: FieldRule,
    price: FieldRule,
    rating: Selector,
    image: FieldRule,
    link: FieldRule,
    availability: FieldRule,
}

impl CatalogExtractor {
    pub fn new() -> ScrapeResult<Self> {
        Ok(Self {
            container: parse_selector("article.product_pod")?,
            title: FieldRule::attr("h3 a", "title", "No title")?,
            price: FieldRule::text("p.price_color", "Price not available")?,
            rating: parse_selector("p.star-rating")?,
            image: FieldRule::attr("div.image_container img", "src", "")?,
            link: FieldRule::attr("h3 a", "href", "")?,
            availability: FieldRule::text("p.instock.availability", "Unknown")?,
        })
    }

    /// Extract all catalog items from a parsed listing page
    pub fn extract_all(&self, document: &Html, base_url: &str) -> Vec<CatalogItem> {
        extract_records(document, &self.container, None, |card| self.extract_one(card, base_url))
    }

    fn extract_one(&self, card: ElementRef<'_>, base_url: &str) -> ScrapeResult<CatalogItem> {
        let rating = card
            .select(&self.rating)
            .next()
            .map(|el| rating_from_classes(el.value().classes()))
            .unwrap_or(0);

        let image_url = match self.image.capture(card) {
            Some(src) => join_url(base_url, &src),
            None => String::new(),
        };

        let product_url = match self.link.capture(card) {
            Some(href) => join_url(base_url, &href),
            None => String::new(),
        };

        Ok(CatalogItem {
            title: self.title.value(card),
            price: self.price.value(card),
            rating,
            rating_stars: star_glyphs(rating),
            image_url,
            product_url,
            availability: self.availability.value(card),
            source: SOURCE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://books.toscrape.com/";

    fn pod(title: &str, rating_class: &str, price: &str) -> String {
        format!(
            "<article class=\"product_pod\">\
               <div class=\"image_container\">\
                 <a href=\"catalogue/{title}/index.html\">\
                   <img src=\"media/cache/{title}.jpg\">\
                 </a>\
               </div>\
               <p class=\"star-rating {rating_class}\"></p>\
               <h3><a href=\"catalogue/{title}/index.html\" title=\"{title}\">{title}</a></h3>\
               <p class=\"price_color\">{price}</p>\
               <p class=\"instock availability\"> In stock </p>\
             </article>"
        )
    }

    #[test]
    fn test_rating_and_stars() {
        let html = format!(
            "<html><body>{}{}{}</body></html>",
            pod("alpha", "Three", "£51.77"),
            pod("beta", "Five", "£13.99"),
            pod("gamma", "Zero", "£20.00"),
        );
        let document = Html::parse_document(&html);
        let extractor = CatalogExtractor::new().unwrap();

        let items = extractor.extract_all(&document, BASE);
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].rating, 3);
        assert_eq!(items[0].rating_stars, "★★★☆☆");
        assert_eq!(items[1].rating, 5);
        assert_eq!(items[1].rating_stars, "★★★★★");
        // Unrecognized vocabulary maps to 0.
        assert_eq!(items[2].rating, 0);
        assert_eq!(items[2].rating_stars, "☆☆☆☆☆");
    }

    #[test]
    fn test_urls_are_concatenated_with_base() {
        let html = format!("<html><body>{}</body></html>", pod("alpha", "One", "£51.77"));
        let document = Html::parse_document(&html);
        let extractor = CatalogExtractor::new().unwrap();

        let items = extractor.extract_all(&document, BASE);
        assert_eq!(items[0].product_url, "https://books.toscrape.com/catalogue/alpha/index.html");
        assert_eq!(items[0].image_url, "https://books.toscrape.com/media/cache/alpha.jpg");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let html = "<html><body><article class=\"product_pod\"></article></body></html>";
        let document = Html::parse_document(html);
        let extractor = CatalogExtractor::new().unwrap();

        let items = extractor.extract_all(&document, BASE);
        assert_eq!(items.len(), 1);

        let item = &items[0];
        assert_eq!(item.title, "No title");
        assert_eq!(item.price, "Price not available");
        assert_eq!(item.rating, 0);
        assert_eq!(item.rating_stars.chars().count(), 5);
        assert_eq!(item.availability, "Unknown");
        assert_eq!(item.source, SOURCE);
    }

    #[test]
    fn test_availability_is_trimmed() {
        let html = format!("<html><body>{}</body></html>", pod("alpha", "Two", "£10.00"));
        let document = Html::parse_document(&html);
        let extractor = CatalogExtractor::new().unwrap();

        let items = extractor.extract_all(&document, BASE);
        assert_eq!(items[0].availability, "In stock");
    }
}
