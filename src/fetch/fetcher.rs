use std::sync::Arc;

use log::{debug, warn};

use crate::fetch::decode::{self, ImageResource};
use crate::fetch::error::AppError;
use crate::fetch::model::Country;
use crate::fetch::transport::Transport;

/// Composes a [`Transport`] with the decoder: fetch bytes from a URL, then
/// turn them into typed records or a decoded image. Every failure on either
/// side comes back as an [`AppError`].
pub struct ResourceFetcher {
    transport: Arc<dyn Transport>,
}

impl ResourceFetcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetches and decodes the country list. A decode failure is fatal to
    /// the whole attempt; no partial list is ever returned.
    pub async fn fetch_countries(&self, url: &str) -> Result<Vec<Country>, AppError> {
        let bytes = self.transport.fetch(url).await?;
        let countries = decode::decode_countries(&bytes).inspect_err(|e| {
            warn!("country list from {} failed to decode: {}", url, e);
        })?;
        debug!("decoded {} countries from {}", countries.len(), url);
        Ok(countries)
    }

    /// Fetches and decodes a single image.
    pub async fn fetch_image(&self, url: &str) -> Result<ImageResource, AppError> {
        let bytes = self.transport.fetch(url).await?;
        decode::decode_image(url, &bytes)
    }
}
