//! # Shared Constants
//!
//! This module provides a centralized location for constants that are shared
//! across the `shiori` workspace. Using these constants helps to avoid
//! "magic strings" and ensures consistency between the library and the CLI.

/// The fallback category for bookmarks that could not be classified.
pub const OTHER_CATEGORY: &str = "その他";

/// The display label given to a bookmark whose link has no visible text.
pub const UNNAMED_BOOKMARK: &str = "名前なし";

/// The marker rendered into the prompt when no categories exist yet.
pub const NO_CATEGORIES_MARKER: &str = "（まだありません）";

/// The separator between segments of a category path, e.g. `開発 > Python`.
pub const CATEGORY_SEPARATOR: &str = " > ";

/// The maximum depth of a category path.
pub const MAX_CATEGORY_DEPTH: usize = 3;

/// The default number of bookmarks sent to the AI provider per request.
///
/// Chosen to balance request count against the response-size limits of the
/// generation service.
pub const DEFAULT_BATCH_SIZE: usize = 200;

/// The default pause between consecutive classification requests, in seconds.
/// This exists to respect the provider's TPM/RPM rate limits.
pub const DEFAULT_BATCH_DELAY_SECS: u64 = 5;

/// The default file name for the re-importable bookmark export.
pub const DEFAULT_OUTPUT_FILE: &str = "organized_bookmarks.html";
