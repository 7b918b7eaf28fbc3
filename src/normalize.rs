//! Field normalization helpers shared by the site extractors.

/// Maximum title length before truncation
pub const TITLE_MAX_CHARS: usize = 100;

/// Truncate a title to 100 characters, appending an ellipsis marker
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_MAX_CHARS {
        let mut truncated: String = title.chars().take(TITLE_MAX_CHARS).collect();
        truncated.push_str("...");
        truncated
    } else {
        title.to_string()
    }
}

/// Assemble a marketplace price from whole and fractional parts.
///
/// Commas in the whole part are stripped; the fractional part is
/// appended exactly as captured.
pub fn assemble_price(whole: &str, fraction: Option<&str>) -> String {
    let mut price = whole.replace(',', "");
    if let Some(fraction) = fraction {
        price.push_str(fraction);
    }
    format!("${}", price)
}

/// Map an ordinal word class token (One..Five) to its rating value.
///
/// Any other vocabulary, or no match at all, maps to 0.
pub fn rating_from_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> u8 {
    for class in classes {
        let rating = match class {
            "One" => 1,
            "Two" => 2,
            "Three" => 3,
            "Four" => 4,
            "Five" => 5,
            _ => continue,
        };
        return rating;
    }
    0
}

/// Render a 5-glyph star string: `rating` filled stars then empty ones
pub fn star_glyphs(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Parse a counter that must be purely decimal digits.
///
/// Anything else (empty text, signs, comma separators) is 0.
pub fn parse_counter(text: &str) -> u32 {
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        text.parse().unwrap_or(0)
    } else {
        0
    }
}

/// Join a base URL and a relative path by plain concatenation.
///
/// This intentionally performs no URL resolution; a trailing/leading
/// slash mismatch is reproduced in the output.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_title() {
        let title = "x".repeat(150);
        let truncated = truncate_title(&title);
        assert_eq!(truncated.chars().count(), 103);
        assert!(truncated.ends_with("..."));
        assert_eq!(&truncated[..100], "x".repeat(100));
    }

    #[test]
    fn test_short_title_unchanged() {
        let title = "x".repeat(50);
        assert_eq!(truncate_title(&title), title);
    }

    #[test]
    fn test_assemble_price_strips_commas() {
        assert_eq!(assemble_price("1,299", Some("99")), "$129999");
        assert_eq!(assemble_price("54", Some("99")), "$5499");
        assert_eq!(assemble_price("54", None), "$54");
    }

    #[test]
    fn test_rating_vocabulary() {
        assert_eq!(rating_from_classes(["star-rating", "One"]), 1);
        assert_eq!(rating_from_classes(["star-rating", "Two"]), 2);
        assert_eq!(rating_from_classes(["star-rating", "Three"]), 3);
        assert_eq!(rating_from_classes(["star-rating", "Four"]), 4);
        assert_eq!(rating_from_classes(["star-rating", "Five"]), 5);
        assert_eq!(rating_from_classes(["star-rating", "Six"]), 0);
        assert_eq!(rating_from_classes([]), 0);
    }

    #[test]
    fn test_star_glyphs_always_five() {
        assert_eq!(star_glyphs(0), "☆☆☆☆☆");
        assert_eq!(star_glyphs(3), "★★★☆☆");
        assert_eq!(star_glyphs(5), "★★★★★");
        for rating in 0..=5 {
            assert_eq!(star_glyphs(rating).chars().count(), 5);
        }
    }

    #[test]
    fn test_parse_counter() {
        assert_eq!(parse_counter("123"), 123);
        assert_eq!(parse_counter("12,847"), 0);
        assert_eq!(parse_counter(""), 0);
        assert_eq!(parse_counter("-5"), 0);
    }

    #[test]
    fn test_join_url_is_plain_concatenation() {
        assert_eq!(
            join_url("https://www.amazon.com", "/dp/B08N5WRWNW"),
            "https://www.amazon.com/dp/B08N5WRWNW"
        );
        // Slash mismatches are preserved, not repaired.
        assert_eq!(
            join_url("https://books.toscrape.com/", "/catalogue/x.html"),
            "https://books.toscrape.com//catalogue/x.html"
        );
        assert_eq!(join_url("https://example.com", "page.html"), "https://example.compage.html");
    }
}
