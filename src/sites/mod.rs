//! Per-site record types and selector-driven extractors.

pub mod catalog;
pub mod marketplace;
pub mod quotes;
pub mod teams;

pub use catalog::{CatalogExtractor, CatalogItem};
pub use marketplace::{Listing, ListingExtractor};
pub use quotes::{Quote, QuoteExtractor};
pub use teams::{TeamStat, TeamStatExtractor};
