//! # Bookmark Extraction
//!
//! Turns the raw HTML text of a browser bookmark export into a flat, ordered
//! list of [`Bookmark`]s. The Netscape bookmark format nests `<DT><A HREF>`
//! link entries inside `<DL>` lists; folder headings (`<DT><H3>`) are ignored
//! here because the folder structure is rebuilt from scratch after
//! classification.

use crate::constants::UNNAMED_BOOKMARK;
use crate::types::Bookmark;
use scraper::{Html, Selector};
use tracing::debug;

/// URL schemes that are not navigable and therefore not worth classifying.
const EXCLUDED_SCHEMES: [&str; 3] = ["javascript:", "data:", "place:"];

/// Extracts bookmarks from a bookmark-export HTML document, in document order.
///
/// Link entries with an excluded scheme (case-insensitive) are dropped, link
/// entries without a visible label get the `名前なし` placeholder, and
/// duplicate URLs are all preserved. Input that contains no link entries at
/// all (including input that is not HTML) yields an empty vec, which callers
/// treat as "nothing to classify".
pub fn extract_bookmarks(html: &str) -> Vec<Bookmark> {
    let document = Html::parse_document(html);
    // Anchors without an href are not link entries in this format.
    let selector = Selector::parse("dt > a[href]").expect("static selector");

    let mut bookmarks = Vec::new();
    for anchor in document.select(&selector) {
        let Some(url) = anchor.value().attr("href") else {
            continue;
        };
        if url.is_empty() || is_excluded_scheme(url) {
            continue;
        }
        let name = anchor.text().collect::<String>().trim().to_string();
        bookmarks.push(Bookmark {
            name: if name.is_empty() {
                UNNAMED_BOOKMARK.to_string()
            } else {
                name
            },
            url: url.to_string(),
        });
    }

    debug!("Extracted {} bookmarks from input HTML", bookmarks.len());
    bookmarks
}

fn is_excluded_scheme(url: &str) -> bool {
    let lowered = url.to_ascii_lowercase();
    EXCLUDED_SCHEMES
        .iter()
        .any(|scheme| lowered.starts_with(scheme))
}
