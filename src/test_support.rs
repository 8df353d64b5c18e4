//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::fetch::error::{AppError, UNKNOWN_STATUS};
use crate::fetch::transport::Transport;

/// Scriptable transport: canned result per URL. URLs without a stub go to
/// the fallback transport if one is set, otherwise fail with the
/// unknown-status sentinel.
pub struct StaticTransport {
    responses: Mutex<HashMap<String, Result<Vec<u8>, AppError>>>,
    fallback: Mutex<Option<Arc<dyn Transport>>>,
}

impl StaticTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            fallback: Mutex::new(None),
        }
    }

    pub fn stub(&self, url: &str, result: Result<Vec<u8>, AppError>) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), result);
    }

    pub fn set_fallback(&self, transport: Arc<dyn Transport>) {
        *self.fallback.lock().unwrap() = Some(transport);
    }
}

#[async_trait]
impl Transport for StaticTransport {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError> {
        if let Some(result) = self.responses.lock().unwrap().get(url) {
            return result.clone();
        }
        let fallback = self.fallback.lock().unwrap().clone();
        match fallback {
            Some(transport) => transport.fetch(url).await,
            None => Err(AppError::BadStatus(UNKNOWN_STATUS)),
        }
    }
}

/// Transport that parks every fetch until the gate is notified, for
/// exercising supersession races deterministically.
pub struct GatedTransport {
    gate: Arc<Notify>,
    result: Result<Vec<u8>, AppError>,
}

impl GatedTransport {
    pub fn new(result: Result<Vec<u8>, AppError>) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        (
            Self {
                gate: gate.clone(),
                result,
            },
            gate,
        )
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn fetch(&self, _url: &str) -> Result<Vec<u8>, AppError> {
        self.gate.notified().await;
        self.result.clone()
    }
}

/// Minimal valid PNG of the given dimensions, for image-decoding tests.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image::DynamicImage::ImageRgba8(image::RgbaImage::new(width, height));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("png encode");
    bytes
}
