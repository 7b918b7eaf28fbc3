use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::error::{ScrapeError, ScrapeResult};

/// Parse a CSS selector, mapping failure into the crate error type
pub fn parse_selector(css: &str) -> ScrapeResult<Selector> {
    Selector::parse(css).map_err(|_| ScrapeError::Selector { selector: css.to_string() })
}

/// How a field's value is captured from its matched node
#[derive(Debug, Clone, Copy)]
pub enum Capture {
    /// Trimmed text content
    Text,
    /// A named attribute (missing attribute yields an empty string)
    Attr(&'static str),
}

/// Declarative extraction rule for a single record field: a sub-selector
/// relative to the container, a capture mode, and a default literal
/// substituted when no sub-node matches.
pub struct FieldRule {
    selector: Selector,
    mode: Capture,
    default: &'static str,
}

impl FieldRule {
    /// Rule capturing trimmed text content
    pub fn text(css: &str, default: &'static str) -> ScrapeResult<Self> {
        Ok(Self { selector: parse_selector(css)?, mode: Capture::Text, default })
    }

    /// Rule capturing a named attribute
    pub fn attr(css: &str, name: &'static str, default: &'static str) -> ScrapeResult<Self> {
        Ok(Self { selector: parse_selector(css)?, mode: Capture::Attr(name), default })
    }

    /// Capture the raw value, or `None` when no sub-node matches.
    ///
    /// A matched node with a missing attribute still captures (as an
    /// empty string); absence of the node and absence of the attribute
    /// are distinct outcomes.
    pub fn capture(&self, scope: ElementRef<'_>) -> Option<String> {
        let element = scope.select(&self.selector).next()?;

        let value = match self.mode {
            Capture::Text => element.text().collect::<String>().trim().to_string(),
            Capture::Attr(name) => element.value().attr(name).unwrap_or("").to_string(),
        };

        Some(value)
    }

    /// Capture the value, substituting the default literal when absent
    pub fn value(&self, scope: ElementRef<'_>) -> String {
        self.capture(scope).unwrap_or_else(|| self.default.to_string())
    }
}

/// Walk all container nodes in document order (up to an optional cap on
/// containers considered) and run the per-container extraction closure.
///
/// A container whose extraction fails is logged and skipped; it never
/// aborts the batch. An empty result is not an error here; the caller
/// decides whether to substitute demo data.
pub fn extract_records<T, F>(
    document: &Html,
    container: &Selector,
    cap: Option<usize>,
    extract: F,
) -> Vec<T>
where
    F: Fn(ElementRef<'_>) -> ScrapeResult<T>,
{
    let mut records = Vec::new();

    for (index, element) in document.select(container).enumerate() {
        if let Some(cap) = cap {
            if index >= cap {
                break;
            }
        }

        match extract(element) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping container {}: {}", index, e),
        }
    }

    records
}
