use crate::constants::{DEFAULT_BATCH_DELAY_SECS, DEFAULT_BATCH_SIZE};
use crate::errors::OrganizeError;
use crate::providers::ai::AiProvider;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A single bookmark extracted from a browser export.
///
/// Immutable once extracted; its category association lives in the
/// [`Accumulator`](crate::accumulator::Accumulator), not on the bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub name: String,
    pub url: String,
}

impl Bookmark {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// One cleaned classification result, keyed by batch-local id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Zero-based position of the bookmark within the batch that was sent.
    pub id: i64,
    /// Normalized category path, e.g. `開発 > Python`.
    pub category: String,
}

/// The bookmark organizer: extracts bookmarks, classifies them in batches
/// through an AI provider, and groups them by category path.
pub struct Organizer {
    pub(crate) ai_provider: Box<dyn AiProvider>,
    pub(crate) batch_size: usize,
    pub(crate) batch_delay: Duration,
}

impl fmt::Debug for Organizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Organizer")
            .field("batch_size", &self.batch_size)
            .field("batch_delay", &self.batch_delay)
            .finish_non_exhaustive()
    }
}

/// A builder for creating `Organizer` instances.
///
/// The AI provider is an explicit dependency, which keeps the pipeline free of
/// global state and lets tests substitute a deterministic stub.
#[derive(Default)]
pub struct OrganizerBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
    batch_size: Option<usize>,
    batch_delay: Option<Duration>,
}

impl OrganizerBuilder {
    /// Creates a new `OrganizerBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI provider used for classification.
    pub fn ai_provider(mut self, provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(provider);
        self
    }

    /// Sets the number of bookmarks per classification request.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Sets the pause inserted between consecutive classification requests.
    pub fn batch_delay(mut self, batch_delay: Duration) -> Self {
        self.batch_delay = Some(batch_delay);
        self
    }

    /// Builds the `Organizer`.
    ///
    /// Returns an error if no AI provider was configured or the batch size
    /// is zero.
    pub fn build(self) -> Result<Organizer, OrganizeError> {
        let ai_provider = self.ai_provider.ok_or_else(|| {
            OrganizeError::MissingAiProvider("an AI provider is required".to_string())
        })?;
        let batch_size = self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE);
        if batch_size == 0 {
            return Err(OrganizeError::InvalidConfig(
                "batch size must be greater than zero".to_string(),
            ));
        }
        Ok(Organizer {
            ai_provider,
            batch_size,
            batch_delay: self
                .batch_delay
                .unwrap_or(Duration::from_secs(DEFAULT_BATCH_DELAY_SECS)),
        })
    }
}
