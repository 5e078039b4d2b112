//! # Folder Tree and Emission Tests
//!
//! Validates the tree build / flatten round trip, the emission layout of the
//! Netscape bookmark document, and the escaping rules.

use chrono::Local;
use shiori::export::{build_folder_tree, render_bookmark_html, write_bookmark_file};
use shiori::extract::extract_bookmarks;
use shiori::types::Bookmark;
use std::collections::HashMap;

fn bookmark(name: &str, url: &str) -> Bookmark {
    Bookmark::new(name, url)
}

fn sample_map() -> HashMap<String, Vec<Bookmark>> {
    HashMap::from([
        (
            "Dev > Web".to_string(),
            vec![
                bookmark("MDN", "https://developer.mozilla.org"),
                bookmark("Can I Use", "https://caniuse.com"),
            ],
        ),
        (
            "Dev".to_string(),
            vec![bookmark("GitHub", "https://github.com")],
        ),
        (
            "ニュース".to_string(),
            vec![bookmark("NHK", "https://www.nhk.or.jp")],
        ),
    ])
}

// --- Tree build / flatten ---

/// Building the tree and flattening it back yields the same set of
/// (path, bookmarks) pairs, with leaf-list order preserved.
#[test]
fn test_tree_mapping_round_trip() {
    let map = sample_map();
    let tree = build_folder_tree(map.clone());

    let mut flattened = tree.flatten();
    flattened.sort_by(|a, b| a.0.cmp(&b.0));
    let mut expected: Vec<(String, Vec<Bookmark>)> = map.into_iter().collect();
    expected.sort_by(|a, b| a.0.cmp(&b.0));

    assert_eq!(flattened, expected);
}

/// An interior node can hold bookmarks of its own alongside child folders.
#[test]
fn test_interior_node_keeps_its_own_bookmarks() {
    let map = HashMap::from([
        ("Dev".to_string(), vec![bookmark("GitHub", "https://github.com")]),
        (
            "Dev > Web".to_string(),
            vec![bookmark("MDN", "https://developer.mozilla.org")],
        ),
    ]);
    let tree = build_folder_tree(map);

    let dev = tree.children.get("Dev").expect("folder Dev");
    assert_eq!(dev.bookmarks.len(), 1);
    let web = dev.children.get("Web").expect("folder Web");
    assert_eq!(web.bookmarks.len(), 1);
}

/// A multi-segment path materializes as nested folders.
#[test]
fn test_path_segments_nest() {
    let map = HashMap::from([(
        "A > B > C".to_string(),
        vec![bookmark("deep", "https://deep.example")],
    )]);
    let tree = build_folder_tree(map);

    let a = tree.children.get("A").expect("folder A");
    let b = a.children.get("B").expect("folder B");
    let c = b.children.get("C").expect("folder C");
    assert!(a.bookmarks.is_empty());
    assert!(b.bookmarks.is_empty());
    assert_eq!(c.bookmarks.len(), 1);
}

// --- Emission ---

/// The document carries the fixed header lines, the dated heading, and a
/// closing tag for every opened list.
#[test]
fn test_emitted_document_structure() {
    let html = render_bookmark_html(&build_folder_tree(sample_map()));

    assert!(html.starts_with("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n"));
    assert!(html.contains(
        "<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">"
    ));
    assert!(html.contains("<TITLE>Organized Bookmarks</TITLE>"));
    let today = Local::now().format("%Y-%m-%d").to_string();
    assert!(html.contains(&format!("<H1>Organized Bookmarks {today}</H1>")));
    assert_eq!(html.matches("<DL><p>").count(), html.matches("</DL><p>").count());
}

/// At each level, bookmarks render before child folders, and folders render
/// alphabetically.
#[test]
fn test_bookmarks_first_then_sorted_folders() {
    let map = HashMap::from([
        ("b".to_string(), vec![bookmark("in b", "https://b.example")]),
        ("a".to_string(), vec![bookmark("in a", "https://a.example")]),
        (
            "a > nested".to_string(),
            vec![bookmark("deeper", "https://deep.example")],
        ),
    ]);
    let html = render_bookmark_html(&build_folder_tree(map));

    let pos_a = html.find("<H3>a</H3>").unwrap();
    let pos_b = html.find("<H3>b</H3>").unwrap();
    assert!(pos_a < pos_b, "folders must emit alphabetically");

    // Inside folder `a`, the direct bookmark precedes the nested folder.
    let pos_in_a = html.find("in a").unwrap();
    let pos_nested = html.find("<H3>nested</H3>").unwrap();
    assert!(pos_a < pos_in_a && pos_in_a < pos_nested);
}

/// `&` and `"` are escaped in URLs, `<` and `>` in names, and nothing else is
/// altered; re-parsing the emitted document recovers the originals.
#[test]
fn test_escaping_round_trip() {
    let original = bookmark(
        "a <b> c",
        "https://example.com/?q=\"rust\"&lang=ja",
    );
    let map = HashMap::from([("Dev".to_string(), vec![original.clone()])]);
    let html = render_bookmark_html(&build_folder_tree(map));

    assert!(html.contains("HREF=\"https://example.com/?q=&quot;rust&quot;&amp;lang=ja\""));
    assert!(html.contains(">a &lt;b&gt; c</A>"));

    let recovered = extract_bookmarks(&html);
    assert_eq!(recovered, vec![original]);
}

// --- Writing ---

/// The rendered document lands on disk UTF-8 encoded.
#[test]
fn test_write_bookmark_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("organized_bookmarks.html");
    let tree = build_folder_tree(sample_map());

    write_bookmark_file(&tree, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("ニュース"));
    assert_eq!(written, render_bookmark_html(&tree));
}

/// A write failure is reported as an error, not a panic.
#[test]
fn test_write_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.html");
    let tree = build_folder_tree(sample_map());
    assert!(write_bookmark_file(&tree, &path).is_err());
}
