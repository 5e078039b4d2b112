//! # Default Classification Prompts
//!
//! This module contains the hardcoded prompt templates for the batch
//! classification task. The system prompt carries the persona and the strict
//! output rules; the user prompt carries the per-batch payload.

/// The system prompt for batch bookmark classification.
///
/// The rules mirror what the response parser tolerates: a bare JSON array of
/// `{id, category}` objects, category paths capped at 3 levels, and the
/// sentinel category for anything ambiguous.
pub const CLASSIFICATION_SYSTEM_PROMPT: &str = r#"You are a bookmark classification assistant. Classify every bookmark in the given JSON list, using the existing category list for reference.

# Critical Rules
- Respond ONLY with a JSON array in the exact format shown below.
- Each object must contain the `id` of the input bookmark and its assigned `category`.
- A category has at most 3 levels, separated by `>` (e.g. '開発 > Python').
- Prefer reusing a category from the existing category list when one fits.
- If a bookmark is hard to classify, assign the category 'その他'.
- Do not include any text outside the JSON array (no greetings, no explanations, no markdown fences).

# Example response format
[
  {"id": 0, "category": "開発 > Python"},
  {"id": 1, "category": "ニュース > 経済"}
]"#;

/// The user prompt for batch bookmark classification.
///
/// Placeholders: `{existing_categories}`, `{bookmarks_json}`.
pub const CLASSIFICATION_USER_PROMPT: &str = r#"# Existing category list
{existing_categories}

# Bookmark JSON list
{bookmarks_json}

# Response (JSON array only)"#;
