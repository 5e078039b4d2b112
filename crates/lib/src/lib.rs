//! # shiori: AI bookmark organizer
//!
//! This crate ingests a browser bookmark export, classifies every bookmark
//! into a hierarchical category using a configurable AI provider, and re-emits
//! a browser-importable bookmark file with the bookmarks grouped into folders.
//!
//! The pipeline is a single sequential pass: extract → split into batches →
//! classify each batch (feeding previously-assigned categories back in as a
//! reuse vocabulary) → build the folder tree → serialize.

pub mod accumulator;
pub mod batch;
pub mod classify;
pub mod constants;
pub mod errors;
pub mod export;
pub mod extract;
pub mod prompts;
pub mod providers;
pub mod types;

pub use errors::OrganizeError;
pub use types::{Bookmark, Classification, Organizer, OrganizerBuilder};

use accumulator::Accumulator;
use tracing::{info, warn};

impl Organizer {
    /// Runs extraction and classification over a raw bookmark-export document.
    ///
    /// Unparseable input, or input without any navigable link entries, yields
    /// an empty accumulator; classification itself never fails (failed batches
    /// degrade to the sentinel category instead).
    pub async fn organize(&self, html: &str) -> Accumulator {
        let bookmarks = extract::extract_bookmarks(html);
        info!("Detected {} bookmarks to classify", bookmarks.len());
        self.classify_bookmarks(&bookmarks).await
    }

    /// Classifies an already-extracted bookmark list, batch by batch.
    ///
    /// Batches run strictly in order with a fixed pacing delay between them
    /// (not after the last). The only cross-batch state is the growing
    /// category vocabulary snapshotted at the start of each batch.
    pub async fn classify_bookmarks(&self, bookmarks: &[Bookmark]) -> Accumulator {
        let mut accumulator = Accumulator::new();
        if bookmarks.is_empty() {
            return accumulator;
        }

        let batches = batch::split_into_batches(bookmarks, self.batch_size);
        let num_batches = batches.len();

        for (index, items) in batches.iter().enumerate() {
            info!(
                "Classifying batch {}/{num_batches} ({} bookmarks)",
                index + 1,
                items.len()
            );

            let existing_categories = accumulator.snapshot_categories();
            let results =
                classify::classify_batch(self.ai_provider.as_ref(), items, &existing_categories)
                    .await;

            for result in results {
                // Batch-local ids resolve by position into the batch that was
                // sent. An id that does not resolve is its own anomaly; it is
                // never mapped onto some other bookmark.
                let Some(bookmark) = usize::try_from(result.id)
                    .ok()
                    .and_then(|id| items.get(id))
                else {
                    warn!(
                        "Discarding classification result with out-of-range id {} (batch of {})",
                        result.id,
                        items.len()
                    );
                    continue;
                };
                accumulator.attach(result.category, bookmark.clone());
            }

            info!(
                "Batch {}/{num_batches} done, {} bookmarks categorized so far",
                index + 1,
                accumulator.len()
            );

            if index + 1 < num_batches {
                info!("Waiting {:?} before the next batch", self.batch_delay);
                tokio::time::sleep(self.batch_delay).await;
            }
        }

        accumulator
    }
}
