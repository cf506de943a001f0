//! Shared types used across all pipeline stages.
//!
//! These types are serialized to JSON between stages (discover → assemble)
//! and in the final `routes.json` handed to the downstream renderer, so their
//! wire shape is part of the public contract. Context fields use camelCase on
//! the wire because the renderer consumes them as page props.

use serde::{Deserialize, Serialize};

/// Node of a materialized navigation tree.
///
/// A nav item is either a leaf (`path` set, `children` empty) or a group
/// (`children` set, no `path`) — never both. The distinction is decided once,
/// when the sidebar is parsed into [`crate::config::SidebarNode`]; this type
/// only carries the result.
///
/// `id` is derived from the item's label path from the tree root, so the same
/// sidebar produces the same ids on every build. Downstream code can key
/// client-side nav state (expanded/collapsed groups) on it safely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// One entry in a page's version switcher.
///
/// `label` is the human-readable version string from the docset's config;
/// `slug` is the source-instance name, which doubles as the route prefix the
/// switcher links to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionRef {
    pub label: String,
    pub slug: String,
}

/// Docset-level context fields shared by every page of one docset version.
///
/// Absent as a whole (not defaulted field-by-field) when a page's source
/// instance has no matching config — see [`RouteContext::docset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsetFields {
    pub docset_title: String,
    pub current_version: String,
    pub nav_items: Vec<NavItem>,
}

/// Per-page template context embedded in a [`Route`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteContext {
    /// Stable content identifier of the page.
    pub id: String,
    /// Version switcher entries for every sibling sharing the page's remote
    /// identity, in discovery order, including the page's own version.
    /// `None` when the page's source instance has no remote identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<VersionRef>>,
    /// Docset title, current version, and nav tree. `None` when the source
    /// instance has no config record; the fields are then omitted from the
    /// wire format entirely rather than serialized as nulls.
    #[serde(flatten)]
    pub docset: Option<DocsetFields>,
}

/// One routable page, the sole output artifact of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Final route path, e.g. `/v1/guides/setup/`.
    pub path: String,
    /// Renderer template reference. Fixed per build; every docs page renders
    /// through the same template.
    pub template: String,
    pub context: RouteContext,
}
