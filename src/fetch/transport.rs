use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};

use crate::fetch::error::AppError;

/// One asynchronous GET for a URL, returning the raw body bytes.
///
/// Implementations must validate the URL before touching the network and
/// classify failures into the [`AppError`] taxonomy. No retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError>;
}

/// HTTP transport over a shared `reqwest::Client`.
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError> {
        // A relative or otherwise unparseable URL fails here, before any
        // network call happens.
        let parsed = reqwest::Url::parse(url).map_err(|e| AppError::BadUrl(format!("{url}: {e}")))?;

        let response = self
            .client
            .get(parsed)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
            return Err(AppError::BadStatus(i32::from(status.as_u16())));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_url_fails_without_network() {
        let transport = HttpTransport::new(Duration::from_secs(1));
        for url in ["", "not a url", "/img.png", "ht tp://x"] {
            let result = transport.fetch(url).await;
            assert!(
                matches!(result, Err(AppError::BadUrl(_))),
                "expected BadUrl for {url:?}, got {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let transport = HttpTransport::new(Duration::from_millis(200));
        // Reserved TLD, never resolves.
        let result = transport.fetch("http://roam.invalid/countries").await;
        assert!(matches!(result, Err(AppError::Network(_))));
    }
}
