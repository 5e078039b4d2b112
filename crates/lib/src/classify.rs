//! # Classifier Gateway
//!
//! This module provides the per-batch classification flow: it assembles the
//! prompt (reuse vocabulary + batch items with batch-local ids), invokes the
//! AI provider, and parses and normalizes the response.
//!
//! Failure policy: any failure while invoking the provider or parsing the
//! response degrades the *entire* batch to the sentinel category with one
//! result per input position. A failed batch is never retried; the run keeps
//! going with degraded output instead of aborting.

use crate::constants::{
    CATEGORY_SEPARATOR, MAX_CATEGORY_DEPTH, NO_CATEGORIES_MARKER, OTHER_CATEGORY,
};
use crate::errors::OrganizeError;
use crate::prompts::{CLASSIFICATION_SYSTEM_PROMPT, CLASSIFICATION_USER_PROMPT};
use crate::providers::ai::AiProvider;
use crate::types::{Bookmark, Classification};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The shape of a batch item as serialized into the prompt.
#[derive(Serialize)]
struct PromptBookmark<'a> {
    id: usize,
    name: &'a str,
    url: &'a str,
}

/// One raw element of the provider's JSON array response.
///
/// Both fields are optional: an object missing either one is skipped as a
/// per-item anomaly. An array element that is not an object at all fails the
/// whole-batch parse instead.
#[derive(Deserialize)]
struct RawClassification {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    category: Option<String>,
}

/// Classifies one batch of bookmarks, never failing.
///
/// `existing_categories` is the reuse vocabulary: the distinct category paths
/// assigned so far in the run. On any provider or parse error the whole batch
/// collapses to the sentinel category, covering ids `0..batch.len()` exactly
/// once.
pub async fn classify_batch(
    ai_provider: &dyn AiProvider,
    batch: &[Bookmark],
    existing_categories: &[String],
) -> Vec<Classification> {
    match try_classify_batch(ai_provider, batch, existing_categories).await {
        Ok(results) => results,
        Err(e) => {
            warn!("Batch classification failed, assigning '{OTHER_CATEGORY}' to all {} items: {e}", batch.len());
            (0..batch.len())
                .map(|id| Classification {
                    id: id as i64,
                    category: OTHER_CATEGORY.to_string(),
                })
                .collect()
        }
    }
}

async fn try_classify_batch(
    ai_provider: &dyn AiProvider,
    batch: &[Bookmark],
    existing_categories: &[String],
) -> Result<Vec<Classification>, OrganizeError> {
    let user_prompt = build_user_prompt(batch, existing_categories)?;
    debug!(system_prompt = %CLASSIFICATION_SYSTEM_PROMPT, user_prompt = %user_prompt, "--> Sending classification prompt to AI provider");

    let raw_response = ai_provider
        .generate(CLASSIFICATION_SYSTEM_PROMPT, &user_prompt)
        .await?;
    debug!("<-- Classification response: {raw_response}");

    let cleaned = strip_code_fence(&raw_response);
    let raw_results: Vec<RawClassification> = serde_json::from_str(cleaned)?;

    let mut results = Vec::with_capacity(raw_results.len());
    for raw in raw_results {
        let (Some(id), Some(category)) = (raw.id, raw.category) else {
            warn!("Skipping classification result with a missing id or category field");
            continue;
        };
        results.push(Classification {
            id,
            category: normalize_category(&category),
        });
    }
    Ok(results)
}

/// Renders the user prompt for one batch.
pub fn build_user_prompt(
    batch: &[Bookmark],
    existing_categories: &[String],
) -> Result<String, OrganizeError> {
    let category_list = if existing_categories.is_empty() {
        NO_CATEGORIES_MARKER.to_string()
    } else {
        existing_categories
            .iter()
            .map(|cat| format!("- {cat}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let prompt_bookmarks: Vec<PromptBookmark<'_>> = batch
        .iter()
        .enumerate()
        .map(|(id, bookmark)| PromptBookmark {
            id,
            name: &bookmark.name,
            url: &bookmark.url,
        })
        .collect();
    let bookmarks_json = serde_json::to_string_pretty(&prompt_bookmarks)?;

    Ok(CLASSIFICATION_USER_PROMPT
        .replace("{existing_categories}", &category_list)
        .replace("{bookmarks_json}", &bookmarks_json))
}

/// Normalizes a raw category string to at most [`MAX_CATEGORY_DEPTH`]
/// non-empty, trimmed segments joined by [`CATEGORY_SEPARATOR`].
///
/// A string that normalizes to nothing collapses to the sentinel category.
/// The transform is idempotent.
pub fn normalize_category(raw: &str) -> String {
    let normalized = raw
        .split('>')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .take(MAX_CATEGORY_DEPTH)
        .collect::<Vec<_>>()
        .join(CATEGORY_SEPARATOR);
    if normalized.is_empty() {
        OTHER_CATEGORY.to_string()
    } else {
        normalized
    }
}

/// Strips a markdown ```json code fence if the response is wrapped in one.
fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();
    let trimmed = trimmed.strip_prefix("```json").unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim()
}
