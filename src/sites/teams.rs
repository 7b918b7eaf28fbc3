use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::error::ScrapeResult;
use crate::extract::{extract_records, parse_selector, FieldRule};
use crate::normalize::parse_counter;

/// Source tag stamped on every team-statistics record
pub const SOURCE: &str = "scrapethissite.com";

/// One season of team statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStat {
    pub name: String,
    pub year: String,
    pub wins: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub source: String,
}

/// Extractor for team-statistics table rows
pub struct TeamStatExtractor {
    container: Selector,
    name: FieldRule,
    year: FieldRule,
    wins: FieldRule,
    losses: FieldRule,
    goals_for: FieldRule,
    goals_against: FieldRule,
}

impl TeamStatExtractor {
    pub fn new() -> ScrapeResult<Self> {
        Ok(Self {
            container: parse_selector("tr.team")?,
            name: FieldRule::text(".name", "Unknown")?,
            year: FieldRule::text(".year", "N/A")?,
            wins: FieldRule::text(".wins", "")?,
            losses: FieldRule::text(".losses", "")?,
            goals_for: FieldRule::text(".gf", "")?,
            goals_against: FieldRule::text(".ga", "")?,
        })
    }

    /// Extract all team rows from a parsed statistics page
    pub fn extract_all(&self, document: &Html) -> Vec<TeamStat> {
        extract_records(document, &self.container, None, |row| self.extract_one(row))
    }

    fn extract_one(&self, row: ElementRef<'_>) -> ScrapeResult<TeamStat> {
        Ok(TeamStat {
            name: self.name.value(row),
            year: self.year.value(row),
            wins: parse_counter(&self.wins.value(row)),
            losses: parse_counter(&self.losses.value(row)),
            goals_for: parse_counter(&self.goals_for.value(row)),
            goals_against: parse_counter(&self.goals_against.value(row)),
            source: SOURCE.to_string(),
        })
    }
}
