use rand::Rng;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::config::FetchConfig;
use crate::error::{ScrapeError, ScrapeResult};

/// HTTP page fetcher with a fixed browser-mimicking header set.
///
/// One GET per page, no retries. A short randomized politeness delay is
/// applied after each successful fetch.
pub struct PageFetcher {
    client: Client,
    config: FetchConfig,
}

impl PageFetcher {
    /// Create a new fetcher from the fetch configuration
    pub fn new(config: &FetchConfig) -> ScrapeResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Accept",
            HeaderValue::from_str(&config.accept)
                .map_err(|e| ScrapeError::config(format!("invalid Accept header: {}", e)))?,
        );
        headers.insert(
            "Accept-Language",
            HeaderValue::from_str(&config.accept_language)
                .map_err(|e| ScrapeError::config(format!("invalid Accept-Language header: {}", e)))?,
        );
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config: config.clone() })
    }

    /// Fetch a page and return its HTML body.
    ///
    /// Any non-success status is an error; callers route it to the
    /// demo-data fallback.
    pub async fn fetch_html(&self, url: &str) -> ScrapeResult<String> {
        let host = Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| "unknown".to_string());

        debug!("HTTP GET {} ({})", url, host);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ScrapeError::HttpStatus { url: url.to_string(), status: status.as_u16() });
        }

        let body = response.text().await?;
        info!("Fetched {} bytes from {}", body.len(), host);

        self.politeness_delay().await;
        Ok(body)
    }

    /// Sleep for a uniform-random interval within the configured bounds
    async fn politeness_delay(&self) {
        let delay_ms = if self.config.delay_min_ms < self.config.delay_max_ms {
            rand::thread_rng().gen_range(self.config.delay_min_ms..=self.config.delay_max_ms)
        } else {
            self.config.delay_min_ms
        };

        debug!("Politeness delay: {}ms", delay_ms);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}
