//! # Fetch Pipeline
//!
//! The data path from a URL to a view-ready record, leaf-first:
//!
//! - [`transport`]: one async GET, bytes or a classified failure
//! - [`decode`]: bytes → typed records / decoded image (pure)
//! - [`fetcher`]: transport ∘ decode under one error taxonomy
//! - [`aggregator`]: per-record image resolution with generation-based
//!   stale suppression, publishing view-models over a channel
//!
//! Nothing in here knows about the terminal; the `tui` module drains the
//! aggregator's publications on its own event loop.

pub mod aggregator;
pub mod decode;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod transport;

pub use aggregator::{Aggregator, Illustrated, ImageSlot, Publication, ViewModel};
pub use decode::{ImageResource, decode_countries, decode_image};
pub use error::{AppError, UNKNOWN_STATUS};
pub use fetcher::ResourceFetcher;
pub use model::{Attraction, Country};
pub use transport::{HttpTransport, Transport};
