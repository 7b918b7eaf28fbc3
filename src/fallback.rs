//! Static demo record sets substituted when live extraction fails or
//! yields nothing. Each supplier returns the first `count` records of
//! its fixed sequence.

use crate::normalize::star_glyphs;
use crate::sites::catalog::{self, CatalogItem};
use crate::sites::marketplace::Listing;
use crate::sites::quotes::{self, Quote};
use crate::sites::teams::{self, TeamStat};

fn listing(
    asin: &str,
    title: &str,
    price: &str,
    rating: &str,
    reviews: &str,
    image_url: &str,
    product_url: &str,
) -> Listing {
    Listing {
        asin: asin.to_string(),
        title: title.to_string(),
        price: price.to_string(),
        rating: rating.to_string(),
        reviews: reviews.to_string(),
        image_url: image_url.to_string(),
        product_url: product_url.to_string(),
        search_query: None,
        demo_data: None,
    }
}

/// Demo marketplace listings, stamped with the search context
pub fn demo_listings(search_query: &str, count: usize) -> Vec<Listing> {
    let products = vec![
        listing(
            "B08N5WRWNW",
            "Premium Dog Food - Grain Free Recipe for Adult Dogs",
            "$54.99",
            "4.5 out of 5 stars",
            "12,847",
            "https://via.placeholder.com/300x300/4A90A4/FFFFFF?text=Dog+Food",
            "https://www.amazon.com/dp/B08N5WRWNW",
        ),
        listing(
            "B07D4F5KMN",
            "Interactive Dog Toy - Puzzle Feeder for Mental Stimulation",
            "$24.99",
            "4.7 out of 5 stars",
            "8,234",
            "https://via.placeholder.com/300x300/FF6B6B/FFFFFF?text=Dog+Toy",
            "https://www.amazon.com/dp/B07D4F5KMN",
        ),
        listing(
            "B09XYZ1234",
            "Orthopedic Dog Bed - Memory Foam for Large Breeds",
            "$89.99",
            "4.8 out of 5 stars",
            "5,621",
            "https://via.placeholder.com/300x300/7CB342/FFFFFF?text=Dog+Bed",
            "https://www.amazon.com/dp/B09XYZ1234",
        ),
        listing(
            "B01ABCDEFG",
            "Cat Tree Tower - Multi-Level with Scratching Posts",
            "$79.99",
            "4.4 out of 5 stars",
            "15,892",
            "https://via.placeholder.com/300x300/9C27B0/FFFFFF?text=Cat+Tree",
            "https://www.amazon.com/dp/B01ABCDEFG",
        ),
        listing(
            "B08HIJKLMN",
            "Automatic Pet Water Fountain - 2L Capacity with Filter",
            "$32.99",
            "4.6 out of 5 stars",
            "9,445",
            "https://via.placeholder.com/300x300/2196F3/FFFFFF?text=Water+Fountain",
            "https://www.amazon.com/dp/B08HIJKLMN",
        ),
        listing(
            "B07QRSTUV",
            "Pet Grooming Kit - Professional Clippers and Scissors Set",
            "$45.99",
            "4.3 out of 5 stars",
            "3,287",
            "https://via.placeholder.com/300x300/FF9800/FFFFFF?text=Grooming+Kit",
            "https://www.amazon.com/dp/B07QRSTUV",
        ),
        listing(
            "B06WXYZ789",
            "Retractable Dog Leash - 26ft Heavy Duty for Large Dogs",
            "$28.99",
            "4.2 out of 5 stars",
            "7,112",
            "https://via.placeholder.com/300x300/795548/FFFFFF?text=Dog+Leash",
            "https://www.amazon.com/dp/B06WXYZ789",
        ),
        listing(
            "B09MNOPQRS",
            "Cat Litter Box - Self-Cleaning Automatic with App Control",
            "$449.99",
            "4.1 out of 5 stars",
            "2,156",
            "https://via.placeholder.com/300x300/607D8B/FFFFFF?text=Litter+Box",
            "https://www.amazon.com/dp/B09MNOPQRS",
        ),
        listing(
            "B08TUVWXYZ",
            "Pet Carrier Backpack - Airline Approved with Ventilation",
            "$59.99",
            "4.5 out of 5 stars",
            "4,789",
            "https://via.placeholder.com/300x300/E91E63/FFFFFF?text=Pet+Carrier",
            "https://www.amazon.com/dp/B08TUVWXYZ",
        ),
        listing(
            "B07ABCD123",
            "Dog Training Treats - Natural Chicken Flavor 1lb Bag",
            "$15.99",
            "4.7 out of 5 stars",
            "18,934",
            "https://via.placeholder.com/300x300/8BC34A/FFFFFF?text=Dog+Treats",
            "https://www.amazon.com/dp/B07ABCD123",
        ),
    ];

    products
        .into_iter()
        .take(count)
        .map(|mut product| {
            product.search_query = Some(search_query.to_string());
            product.demo_data = Some(true);
            product
        })
        .collect()
}

fn catalog_item(title: &str, price: &str, rating: u8, path: &str, availability: &str) -> CatalogItem {
    CatalogItem {
        title: title.to_string(),
        price: price.to_string(),
        rating,
        rating_stars: star_glyphs(rating),
        image_url: format!("https://books.toscrape.com/media/cache/{}.jpg", path),
        product_url: format!("https://books.toscrape.com/catalogue/{}/index.html", path),
        availability: availability.to_string(),
        source: catalog::SOURCE.to_string(),
    }
}

/// Demo catalog items
pub fn demo_catalog(count: usize) -> Vec<CatalogItem> {
    let items = vec![
        catalog_item("A Light in the Attic", "£51.77", 3, "a-light-in-the-attic_1000", "In stock"),
        catalog_item("Tipping the Velvet", "£53.74", 1, "tipping-the-velvet_999", "In stock"),
        catalog_item("Soumission", "£50.10", 1, "soumission_998", "In stock"),
        catalog_item("Sharp Objects", "£47.82", 4, "sharp-objects_997", "In stock"),
        catalog_item(
            "Sapiens: A Brief History of Humankind",
            "£54.23",
            5,
            "sapiens-a-brief-history-of-humankind_996",
            "In stock",
        ),
    ];

    items.into_iter().take(count).collect()
}

fn quote(text: &str, author: &str, tags: &[&str]) -> Quote {
    Quote {
        text: text.to_string(),
        author: author.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        source: quotes::SOURCE.to_string(),
    }
}

/// Demo quotations
pub fn demo_quotes(count: usize) -> Vec<Quote> {
    let entries = vec![
        quote(
            "“The world as we have created it is a process of our thinking. It cannot be changed without changing our thinking.”",
            "Albert Einstein",
            &["change", "deep-thoughts", "thinking", "world"],
        ),
        quote(
            "“It is our choices, Harry, that show what we truly are, far more than our abilities.”",
            "J.K. Rowling",
            &["abilities", "choices"],
        ),
        quote(
            "“There are only two ways to live your life. One is as though nothing is a miracle. The other is as though everything is a miracle.”",
            "Albert Einstein",
            &["inspirational", "life", "live", "miracle", "miracles"],
        ),
        quote(
            "“The person, be it gentleman or lady, who has not pleasure in a good novel, must be intolerably stupid.”",
            "Jane Austen",
            &["aliteracy", "books", "classic", "humor"],
        ),
        quote(
            "“Try not to become a man of success. Rather become a man of value.”",
            "Albert Einstein",
            &["adulthood", "success", "value"],
        ),
    ];

    entries.into_iter().take(count).collect()
}

fn team(name: &str, year: &str, wins: u32, losses: u32, goals_for: u32, goals_against: u32) -> TeamStat {
    TeamStat {
        name: name.to_string(),
        year: year.to_string(),
        wins,
        losses,
        goals_for,
        goals_against,
        source: teams::SOURCE.to_string(),
    }
}

/// Demo team statistics
pub fn demo_teams(count: usize) -> Vec<TeamStat> {
    let entries = vec![
        team("Boston Bruins", "1990", 44, 24, 299, 264),
        team("Buffalo Sabres", "1990", 31, 30, 292, 278),
        team("Calgary Flames", "1990", 46, 26, 344, 263),
        team("Chicago Blackhawks", "1990", 49, 23, 284, 211),
        team("Detroit Red Wings", "1990", 34, 38, 273, 298),
    ];

    entries.into_iter().take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_listings_are_stamped_and_sliced() {
        let listings = demo_listings("dog toys", 3);
        assert_eq!(listings.len(), 3);

        for listing in &listings {
            assert_eq!(listing.search_query.as_deref(), Some("dog toys"));
            assert_eq!(listing.demo_data, Some(true));
        }

        assert_eq!(listings[0].asin, "B08N5WRWNW");
        assert_eq!(listings[0].price, "$54.99");
    }

    #[test]
    fn test_count_beyond_set_size_is_capped() {
        assert_eq!(demo_listings("dog toys", 50).len(), 10);
        assert_eq!(demo_catalog(50).len(), 5);
        assert_eq!(demo_quotes(50).len(), 5);
        assert_eq!(demo_teams(50).len(), 5);
    }

    #[test]
    fn test_demo_catalog_honors_rating_invariants() {
        for item in demo_catalog(5) {
            assert!(item.rating <= 5);
            assert_eq!(item.rating_stars.chars().count(), 5);
            assert_eq!(
                item.rating_stars.chars().filter(|c| *c == '★').count(),
                item.rating as usize
            );
        }
    }

    #[test]
    fn test_demo_sets_are_nonempty() {
        assert!(!demo_listings("anything", 1).is_empty());
        assert!(!demo_catalog(1).is_empty());
        assert!(!demo_quotes(1).is_empty());
        assert!(!demo_teams(1).is_empty());
    }
}
