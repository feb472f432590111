//! Atom feed parsing.
//!
//! GitHub serves per-user activity as an Atom document. Matching is done on
//! local element names only, so the default Atom namespace and `media:`
//! extensions do not get in the way.

use roxmltree::{Document, Node};

use super::types::RawEntry;
use crate::error::FeedError;

/// Parse an Atom document into raw entries, preserving document order.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] for malformed XML and [`FeedError::NotAtom`]
/// when the root element is not `feed`.
pub fn parse_feed(xml: &str) -> Result<Vec<RawEntry>, FeedError> {
    let doc = Document::parse(xml)?;
    if doc.root_element().tag_name().name() != "feed" {
        return Err(FeedError::NotAtom);
    }

    let mut entries = Vec::new();
    for node in doc.descendants() {
        if !node.has_tag_name("entry") {
            continue;
        }
        entries.push(RawEntry {
            id: child_text(&node, &["id"]).unwrap_or_default(),
            published_at: child_text(&node, &["published", "updated"]).unwrap_or_default(),
            title_text: child_text(&node, &["title"]).unwrap_or_default(),
            links: entry_links(&node),
        });
    }

    Ok(entries)
}

/// First non-empty text content among the named direct children.
fn child_text(node: &Node<'_, '_>, names: &[&str]) -> Option<String> {
    for child in node.children() {
        if !child.is_element() {
            continue;
        }
        if names
            .iter()
            .any(|name| child.tag_name().name().eq_ignore_ascii_case(name))
        {
            if let Some(text) = child.text() {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
    }
    None
}

/// All link URLs of an entry, in document order.
fn entry_links(node: &Node<'_, '_>) -> Vec<String> {
    let mut links = Vec::new();
    for child in node.children() {
        if !child.is_element() || !child.tag_name().name().eq_ignore_ascii_case("link") {
            continue;
        }
        // Atom puts the URL in @href; RSS-style <link>text</link> as fallback
        if let Some(href) = child.attribute("href") {
            let trimmed = href.trim();
            if !trimmed.is_empty() {
                links.push(trimmed.to_string());
            }
        } else if let Some(text) = child.text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                links.push(trimmed.to_string());
            }
        }
    }
    links
}
