use thiserror::Error;

/// Error types for the scrape pipeline
#[derive(Error, Debug)]
pub enum ScrapeError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    // Network errors
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("HTTP request failed: {url} - {status}")]
    HttpStatus { url: String, status: u16 },

    // Extraction errors
    #[error("Invalid selector: {selector}")]
    Selector { selector: String },

    #[error("Extraction error: {message}")]
    Extraction { message: String },

    // Export errors
    #[error("Export error: {message}")]
    Export { message: String },
}

impl ScrapeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    /// Create an extraction error
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction { message: message.into() }
    }

    /// Create an export error
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export { message: message.into() }
    }

    /// Check if the error routes to the demo-data fallback
    pub fn triggers_fallback(&self) -> bool {
        match self {
            Self::Network { .. } | Self::HttpStatus { .. } | Self::Extraction { .. } => true,
            Self::Configuration { .. } | Self::Selector { .. } | Self::Export { .. } => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "configuration",
            Self::Network { .. } | Self::HttpStatus { .. } => "network",
            Self::Selector { .. } | Self::Extraction { .. } => "extraction",
            Self::Export { .. } => "export",
        }
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network { message: err.to_string() }
    }
}

impl From<std::io::Error> for ScrapeError {
    fn from(err: std::io::Error) -> Self {
        Self::Export { message: err.to_string() }
    }
}

/// Result type alias for the scrape pipeline
pub type ScrapeResult<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = ScrapeError::config("missing target URL");
        assert_eq!(error.category(), "configuration");
        assert!(!error.triggers_fallback());
    }

    #[test]
    fn test_fallback_routing() {
        let network_error = ScrapeError::network("connection refused");
        assert!(network_error.triggers_fallback());

        let status_error = ScrapeError::HttpStatus {
            url: "https://www.amazon.com/s?k=dog+toys".to_string(),
            status: 503,
        };
        assert!(status_error.triggers_fallback());
        assert_eq!(status_error.category(), "network");

        let selector_error = ScrapeError::Selector { selector: "div[".to_string() };
        assert!(!selector_error.triggers_fallback());
    }
}
