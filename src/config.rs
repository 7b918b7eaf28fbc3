use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub fetch: FetchConfig,
    pub targets: TargetsConfig,
    pub output: OutputConfig,
}

/// HTTP fetch settings, including the fixed browser header set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    pub request_timeout_seconds: u64,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    /// Politeness delay bounds applied after a successful fetch
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
}

/// Fixed scrape targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsConfig {
    pub marketplace_base: String,
    pub search_query: String,
    pub max_products: usize,
    pub catalog_base: String,
    pub quotes_url: String,
    pub teams_url: String,
}

/// Output file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub products_file: String,
    pub site_data_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig {
                request_timeout_seconds: 10,
                user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
                accept: "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8".to_string(),
                accept_language: "en-US,en;q=0.9".to_string(),
                delay_min_ms: 1000,
                delay_max_ms: 2000,
            },
            targets: TargetsConfig {
                marketplace_base: "https://www.amazon.com".to_string(),
                search_query: "dog toys".to_string(),
                max_products: 10,
                catalog_base: "https://books.toscrape.com/".to_string(),
                quotes_url: "https://quotes.toscrape.com/".to_string(),
                teams_url: "https://www.scrapethissite.com/pages/forms/".to_string(),
            },
            output: OutputConfig {
                products_file: "products.json".to_string(),
                site_data_file: "site_data.json".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, preferring a file when one is given
    pub async fn load(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path).await?,
            None => Self::default(),
        };

        ConfigOverrides::apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub async fn load_from_file(path: &str) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: AppConfig = toml::from_str(&content)?;

        info!("Configuration loaded from {}", path);
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.fetch.request_timeout_seconds == 0 {
            return Err(anyhow::anyhow!("fetch request_timeout_seconds must be > 0"));
        }

        if self.fetch.user_agent.is_empty() {
            return Err(anyhow::anyhow!("fetch user_agent must not be empty"));
        }

        if self.fetch.delay_min_ms > self.fetch.delay_max_ms {
            return Err(anyhow::anyhow!("fetch delay_min_ms must be <= delay_max_ms"));
        }

        if self.targets.max_products == 0 {
            return Err(anyhow::anyhow!("targets max_products must be > 0"));
        }

        Ok(())
    }

    /// Marketplace search URL for the configured query
    pub fn search_url(&self) -> String {
        format!(
            "{}/s?k={}",
            self.targets.marketplace_base,
            self.targets.search_query.replace(' ', "+")
        )
    }
}

/// Environment-based configuration overrides
pub struct ConfigOverrides;

impl ConfigOverrides {
    /// Apply environment variable overrides to configuration
    pub fn apply(config: &mut AppConfig) {
        if let Ok(query) = std::env::var("DEMOSCRAPE_SEARCH_QUERY") {
            config.targets.search_query = query;
        }

        if let Ok(max_str) = std::env::var("DEMOSCRAPE_MAX_PRODUCTS") {
            if let Ok(max) = max_str.parse::<usize>() {
                config.targets.max_products = max;
            }
        }

        if let Ok(timeout_str) = std::env::var("DEMOSCRAPE_TIMEOUT_SECONDS") {
            if let Ok(timeout) = timeout_str.parse::<u64>() {
                config.fetch.request_timeout_seconds = timeout;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.products_file, "products.json");
    }

    #[test]
    fn test_search_url_replaces_spaces() {
        let config = AppConfig::default();
        assert_eq!(config.search_url(), "https://www.amazon.com/s?k=dog+toys");
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.fetch.request_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [fetch]
            request_timeout_seconds = 5
            user_agent = "test-agent"
            accept = "text/html"
            accept_language = "en-US"
            delay_min_ms = 100
            delay_max_ms = 200

            [targets]
            marketplace_base = "https://www.amazon.com"
            search_query = "cat beds"
            max_products = 3
            catalog_base = "https://books.toscrape.com/"
            quotes_url = "https://quotes.toscrape.com/"
            teams_url = "https://www.scrapethissite.com/pages/forms/"

            [output]
            products_file = "out.json"
            site_data_file = "sites.json"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.targets.search_query, "cat beds");
        assert_eq!(config.search_url(), "https://www.amazon.com/s?k=cat+beds");
        assert!(config.validate().is_ok());
    }
}
