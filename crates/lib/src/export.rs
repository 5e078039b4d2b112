//! # Folder Tree and Bookmark Export
//!
//! Converts the flat category → bookmarks mapping into a nested folder tree
//! and serializes it back to the Netscape bookmark format that browsers
//! import. The tree is derived data: it is rebuilt from scratch from the
//! accumulated mapping, never maintained incrementally.

use crate::constants::CATEGORY_SEPARATOR;
use crate::errors::OrganizeError;
use crate::types::Bookmark;
use chrono::Local;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::info;

/// One folder in the output hierarchy.
///
/// A node holds the bookmarks attached directly at its level plus its child
/// folders. `BTreeMap` keeps the children in the lexicographic order required
/// for emission.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FolderNode {
    pub children: BTreeMap<String, FolderNode>,
    pub bookmarks: Vec<Bookmark>,
}

impl FolderNode {
    /// Flattens the tree back into (full category path, bookmarks) pairs for
    /// every node that holds bookmarks. Leaf-list order is preserved; paths
    /// come out in depth-first lexicographic order.
    pub fn flatten(&self) -> Vec<(String, Vec<Bookmark>)> {
        let mut pairs = Vec::new();
        self.flatten_into(String::new(), &mut pairs);
        pairs
    }

    fn flatten_into(&self, path: String, pairs: &mut Vec<(String, Vec<Bookmark>)>) {
        if !self.bookmarks.is_empty() {
            pairs.push((path.clone(), self.bookmarks.clone()));
        }
        for (name, child) in &self.children {
            let child_path = if path.is_empty() {
                name.clone()
            } else {
                format!("{path}{CATEGORY_SEPARATOR}{name}")
            };
            child.flatten_into(child_path, pairs);
        }
    }
}

/// Builds the nested folder tree from the flat category mapping.
///
/// Each category path is split on [`CATEGORY_SEPARATOR`] and walked segment by
/// segment, creating folders as needed; the bookmark list lands on the final
/// segment's node. Lists from distinct keys that resolve to the same node are
/// append-merged.
pub fn build_folder_tree(categories: HashMap<String, Vec<Bookmark>>) -> FolderNode {
    let mut root = FolderNode::default();
    for (category_path, bookmarks) in categories {
        let mut node = &mut root;
        for segment in category_path.split(CATEGORY_SEPARATOR) {
            node = node.children.entry(segment.to_string()).or_default();
        }
        node.bookmarks.extend(bookmarks);
    }
    root
}

/// Renders the full bookmark-export document for a folder tree.
///
/// Layout per node: directly-attached bookmarks first (in accumulated order),
/// then child folders alphabetically, each wrapping a nested list one indent
/// level deeper. The heading carries the generation date.
pub fn render_bookmark_html(root: &FolderNode) -> String {
    let date = Local::now().format("%Y-%m-%d");
    let mut html = format!(
        "<!DOCTYPE NETSCAPE-Bookmark-file-1>\n\
         <META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n\
         <TITLE>Organized Bookmarks</TITLE>\n\
         <H1>Organized Bookmarks {date}</H1>\n\
         <DL><p>\n"
    );
    render_node(root, 1, &mut html);
    html.push_str("</DL><p>\n");
    html
}

fn render_node(node: &FolderNode, indent_level: usize, html: &mut String) {
    let indent = "    ".repeat(indent_level);

    for bookmark in &node.bookmarks {
        let safe_url = escape_url(&bookmark.url);
        let safe_name = escape_name(&bookmark.name);
        html.push_str(&format!("{indent}<DT><A HREF=\"{safe_url}\">{safe_name}</A>\n"));
    }

    for (name, child) in &node.children {
        html.push_str(&format!("{indent}<DT><H3>{}</H3>\n", escape_name(name)));
        html.push_str(&format!("{indent}<DL><p>\n"));
        render_node(child, indent_level + 1, html);
        html.push_str(&format!("{indent}</DL><p>\n"));
    }
}

/// Writes the rendered document to `path`, UTF-8 encoded.
///
/// A failure here is recoverable from the caller's point of view: the
/// classification already happened and is still in memory.
pub fn write_bookmark_file(root: &FolderNode, path: &Path) -> Result<(), OrganizeError> {
    let html = render_bookmark_html(root);
    fs::write(path, html)?;
    info!("Bookmark export written to {}", path.display());
    Ok(())
}

fn escape_url(url: &str) -> String {
    url.replace('&', "&amp;").replace('"', "&quot;")
}

fn escape_name(name: &str) -> String {
    name.replace('<', "&lt;").replace('>', "&gt;")
}
