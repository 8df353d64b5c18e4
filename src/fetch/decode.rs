//! Pure byte-to-record and byte-to-image decoding. No I/O happens here;
//! both functions are deterministic given the same bytes.

use std::fmt;

use image::DynamicImage;

use crate::fetch::error::AppError;
use crate::fetch::model::Country;

/// A decoded bitmap plus the URL it was derived from. Not cached anywhere;
/// dropping it and re-fetching recomputes it.
#[derive(Clone)]
pub struct ImageResource {
    pub url: String,
    pub image: DynamicImage,
}

impl ImageResource {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

impl fmt::Debug for ImageResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.dimensions();
        write!(f, "ImageResource {{ url: {}, {}x{} }}", self.url, w, h)
    }
}

/// Decodes the country-list payload. Unknown fields are ignored; a missing
/// required field fails the whole decode; there are no partial results.
pub fn decode_countries(bytes: &[u8]) -> Result<Vec<Country>, AppError> {
    serde_json::from_slice(bytes).map_err(|e| AppError::Decode(e.to_string()))
}

/// Decodes image bytes into an [`ImageResource`], keeping the source URL.
pub fn decode_image(url: &str, bytes: &[u8]) -> Result<ImageResource, AppError> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| AppError::ImageDecode(format!("{url}: {e}")))?;
    Ok(ImageResource {
        url: url.to_string(),
        image,
    })
}
