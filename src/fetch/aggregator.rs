//! # Presentation Aggregator
//!
//! Takes the current sequence of records, resolves each record's image
//! independently, and publishes exactly one view-model per record over a
//! channel, in whatever order the network answers.
//!
//! ```text
//! records ──▶ resolve_images(generation, …)
//!               │ one tokio task per record
//!               ▼
//!          fetch_image ──▶ Resolved(image) | Fallback(error)
//!               │ generation still current?
//!               ▼
//!          Sender<Publication>  (drained on the owner's event loop)
//! ```
//!
//! A record is never dropped: an image failure publishes a fallback
//! view-model carrying the original error, with the text fields intact.
//! Replacing the sequence (`advance`) supersedes every in-flight fetch;
//! stale completions are discarded instead of being published.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};
use tokio::sync::mpsc::Sender;

use crate::fetch::decode::ImageResource;
use crate::fetch::error::AppError;
use crate::fetch::fetcher::ResourceFetcher;
use crate::fetch::model::{Attraction, Country};

/// A record that carries an image URL the aggregator should resolve.
pub trait Illustrated: Clone + Send + Sync + 'static {
    fn image_url(&self) -> Option<&str>;
}

impl Illustrated for Country {
    fn image_url(&self) -> Option<&str> {
        self.flag_url.as_deref()
    }
}

impl Illustrated for Attraction {
    fn image_url(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

/// How a record's image resolved. Terminal on first completion; there are
/// no retries.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Resolved(ImageResource),
    /// The image could not be resolved; the error that caused it rides
    /// along so the UI can say why a placeholder is showing.
    Fallback(AppError),
}

/// Render-ready projection of a record: text fields plus a settled image.
/// Never published with the image still undecided.
#[derive(Debug, Clone)]
pub struct ViewModel<R> {
    pub record: R,
    pub image: ImageSlot,
}

impl<R> ViewModel<R> {
    pub fn error(&self) -> Option<&AppError> {
        match &self.image {
            ImageSlot::Resolved(_) => None,
            ImageSlot::Fallback(e) => Some(e),
        }
    }
}

/// One view-model publication, tagged with the record's position and the
/// fetch generation it belongs to.
#[derive(Debug, Clone)]
pub struct Publication<R> {
    pub generation: u64,
    pub index: usize,
    pub view_model: ViewModel<R>,
}

/// Issues one image fetch per record and publishes results as they settle.
///
/// The generation counter is the stale-suppression mechanism: `advance`
/// bumps it when the displayed sequence is replaced, and every in-flight
/// task re-reads it on completion before publishing.
pub struct Aggregator {
    fetcher: Arc<ResourceFetcher>,
    generation: Arc<AtomicU64>,
}

impl Aggregator {
    pub fn new(fetcher: Arc<ResourceFetcher>) -> Self {
        Self {
            fetcher,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The generation currently allowed to publish.
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Starts a new fetch generation, superseding every in-flight image
    /// fetch from earlier generations. Returns the new generation.
    pub fn advance(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("advanced to fetch generation {generation}");
        generation
    }

    /// Resolves images for `records` under `generation`, publishing one
    /// [`Publication`] per record onto `sender`.
    ///
    /// Each record gets its own task: completions arrive in network order
    /// and no record waits on a sibling. Records without an image URL
    /// publish a fallback immediately.
    pub fn resolve_images<R: Illustrated>(
        &self,
        generation: u64,
        records: Vec<R>,
        sender: Sender<Publication<R>>,
    ) {
        debug!(
            "resolving {} images for generation {}",
            records.len(),
            generation
        );
        for (index, record) in records.into_iter().enumerate() {
            let fetcher = self.fetcher.clone();
            let current = self.generation.clone();
            let sender = sender.clone();

            tokio::spawn(async move {
                let image = match record.image_url() {
                    Some(url) => match fetcher.fetch_image(url).await {
                        Ok(resource) => ImageSlot::Resolved(resource),
                        Err(e) => {
                            debug!("image for record {index} fell back: {e}");
                            ImageSlot::Fallback(e)
                        }
                    },
                    None => ImageSlot::Fallback(AppError::BadUrl(
                        "record has no image URL".to_string(),
                    )),
                };

                // Completion for a superseded sequence: discard, don't publish.
                if current.load(Ordering::SeqCst) != generation {
                    debug!("discarding stale image completion (generation {generation}, index {index})");
                    return;
                }

                let publication = Publication {
                    generation,
                    index,
                    view_model: ViewModel { record, image },
                };
                if sender.send(publication).await.is_err() {
                    warn!("publication for index {index} dropped: receiver gone");
                }
            });
        }
    }
}
