//! Navigation tree construction.
//!
//! Converts a parsed sidebar ([`SidebarEntry`] list, already shape-checked by
//! the config parser) into the ordered [`NavItem`] tree that ships in every
//! page context. Entry order is preserved at every nesting level — the config
//! author's key order is the nav order.
//!
//! ## Deterministic identifiers
//!
//! Each item's `id` is a truncated SHA-256 of its label path from the root
//! (`["Guides", "Setup"]` → hash of the length-prefixed labels). Sibling
//! labels are unique because JSON object keys are, so label paths — and
//! therefore ids — are unique within a tree. Hashing the path rather than
//! drawing a random id per build keeps ids stable across rebuilds, which lets
//! the client cache nav state (expanded groups, scroll position) against them.

use crate::config::{SidebarEntry, SidebarNode};
use crate::types::NavItem;
use sha2::{Digest, Sha256};

/// Build the navigation tree for one docset version.
///
/// Empty input yields an empty tree; a docset with no sidebar simply has no
/// nav.
pub fn build(entries: &[SidebarEntry]) -> Vec<NavItem> {
    build_level(entries, &[])
}

fn build_level(entries: &[SidebarEntry], ancestors: &[&str]) -> Vec<NavItem> {
    entries
        .iter()
        .map(|entry| {
            let mut trail: Vec<&str> = ancestors.to_vec();
            trail.push(&entry.label);
            let id = nav_id(&trail);

            match &entry.node {
                SidebarNode::Leaf(path) => NavItem {
                    id,
                    title: entry.label.clone(),
                    path: Some(path.clone()),
                    children: vec![],
                },
                SidebarNode::Group(children) => NavItem {
                    id,
                    title: entry.label.clone(),
                    path: None,
                    children: build_level(children, &trail),
                },
            }
        })
        .collect()
}

/// Hash a label path into a 16-hex-char identifier.
///
/// Labels are length-prefixed before hashing so `["a-b"]` and `["a", "b"]`
/// cannot collide on a naive join.
fn nav_id(trail: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for label in trail {
        hasher.update((label.len() as u64).to_le_bytes());
        hasher.update(label.as_bytes());
    }
    let digest = hasher.finalize();
    digest[..8].iter().map(|b| format!("{b:02x}")).collect()
}
