//! Cell-level extractors: each turns one raw table cell into a typed field.
//!
//! None of these can fail. Unparsable content falls back to a documented
//! default ("Unknown", empty list, empty string) so one bad cell never
//! affects the rest of the row.

use dom_query::{Document, NodeRef, Selection};

use crate::icons;
use crate::records::{Unlock, UNLOCK_TYPE_ITEM};
use crate::text;

/// Extract a cell's visible text with every icon replaced by its
/// bracketed stat label (`[Max HP]`).
///
/// Substitution happens on a scratch clone of the cell, before text
/// extraction, so icon semantics are not lost as blank space and the
/// source table is never mutated.
#[must_use]
pub fn text_with_icon_labels(cell: &Selection, keywords: &[(&str, &str)]) -> String {
    // The HTML parser drops a bare <td> fragment, so the clone needs
    // minimal table context rebuilt around it.
    let scratch = Document::from(format!(
        "<table><tbody><tr>{}</tr></tbody></table>",
        cell.html()
    ));
    let root = scratch.select("body");

    for node in root.select("img").nodes() {
        let icon = Selection::from(*node);
        let label = icons::stat_label(&icon, keywords);
        let placeholder = format!("[{label}]");
        icon.replace_with_html(placeholder.as_str());
    }

    text::normalize(&visible_text(&root))
}

/// Collect the normalized text of every link in a cell, de-duplicated,
/// in first-seen order. Links with no visible text are skipped.
#[must_use]
pub fn link_tags(cell: &Selection) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for node in cell.select("a").nodes() {
        let tag = text::normalize(&Selection::from(*node).text());
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Collect unlock descriptors from a cell's links, de-duplicated by
/// name. Image-only links are skipped.
#[must_use]
pub fn unlock_descriptors(cell: &Selection) -> Vec<Unlock> {
    let mut unlocks: Vec<Unlock> = Vec::new();
    for node in cell.select("a").nodes() {
        let name = text::normalize(&Selection::from(*node).text());
        if name.is_empty() || unlocks.iter().any(|u| u.name == name) {
            continue;
        }
        unlocks.push(Unlock {
            name,
            kind: UNLOCK_TYPE_ITEM.to_string(),
        });
    }
    unlocks
}

/// Classify a rarity cell's text.
///
/// Checks "Tier 1" through "Tier 4" in order against the normalized
/// text; first match wins. No match returns the normalized text
/// verbatim; empty input returns "Unknown".
#[must_use]
pub fn rarity(raw: &str) -> String {
    if raw.is_empty() {
        return "Unknown".to_string();
    }
    let cleaned = text::normalize(raw);
    for tier in ["Tier 1", "Tier 2", "Tier 3", "Tier 4"] {
        if cleaned.contains(tier) {
            return tier.to_string();
        }
    }
    cleaned
}

/// Visible text of a subtree: trimmed text-node fragments joined with
/// single spaces, so adjacent siblings don't run together.
fn visible_text(sel: &Selection) -> String {
    let mut parts: Vec<String> = Vec::new();
    for node in sel.nodes() {
        collect_text(node, &mut parts);
    }
    parts.join(" ")
}

fn collect_text(node: &NodeRef, parts: &mut Vec<String>) {
    if node.is_text() {
        let fragment = node.text();
        let fragment = fragment.trim();
        if !fragment.is_empty() {
            parts.push(fragment.to_string());
        }
        return;
    }
    for child in node.children() {
        collect_text(&child, parts);
    }
}
