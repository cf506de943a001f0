//! Shared test utilities for the docatlas test suite.
//!
//! Provides builders for the snapshot-level types (so assembly and output
//! tests don't hand-roll structs) and on-disk fixture writers for discovery
//! tests.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ParsedConfig, SidebarEntry, SidebarNode};
use crate::discover::{ContentPage, PageFormat, RawConfigFile, Representation};

// =========================================================================
// In-memory builders
// =========================================================================

/// Serialize a `config.json` body from its three fields.
pub fn config_json(title: &str, version: &str, sidebar: serde_json::Value) -> String {
    serde_json::json!({
        "title": title,
        "version": version,
        "sidebar": sidebar,
    })
    .to_string()
}

/// A leaf sidebar entry (`label → path`).
pub fn leaf(label: &str, path: &str) -> SidebarEntry {
    SidebarEntry {
        label: label.to_string(),
        node: SidebarNode::Leaf(path.to_string()),
    }
}

/// A group sidebar entry (`label → nested entries`).
pub fn group(label: &str, children: Vec<SidebarEntry>) -> SidebarEntry {
    SidebarEntry {
        label: label.to_string(),
        node: SidebarNode::Group(children),
    }
}

/// A parsed config with an empty sidebar, for version-grouping tests.
pub fn parsed_config(source_name: &str, remote: Option<&str>, version: &str) -> ParsedConfig {
    ParsedConfig {
        source_name: source_name.to_string(),
        remote: remote.map(str::to_string),
        title: "Docs".to_string(),
        version: version.to_string(),
        sidebar: vec![],
    }
}

/// A raw config file with a one-leaf sidebar.
pub fn raw_config(
    source_name: &str,
    remote: Option<&str>,
    title: &str,
    version: &str,
) -> RawConfigFile {
    RawConfigFile {
        source_name: source_name.to_string(),
        remote: remote.map(str::to_string),
        content: config_json(title, version, serde_json::json!({"Intro": "intro"})),
    }
}

/// A content page with a single markdown representation.
pub fn page(id: &str, source_name: &str, remote: Option<&str>, slug: &str) -> ContentPage {
    ContentPage {
        id: id.to_string(),
        source_name: source_name.to_string(),
        remote: remote.map(str::to_string),
        representations: vec![Representation {
            format: PageFormat::Markdown,
            slug: slug.to_string(),
        }],
    }
}

// =========================================================================
// On-disk fixtures
// =========================================================================

/// Write a `sources.toml` under `root` and return its path.
pub fn write_sources_manifest(root: &Path, content: &str) -> PathBuf {
    let path = root.join("sources.toml");
    fs::write(&path, content).unwrap();
    path
}

/// Create a source-instance directory with a stub `config.json` and the
/// given content files (relative path → content).
pub fn write_stub_source(root: &Path, name: &str, files: &[(&str, &str)]) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("config.json"),
        config_json(name, "1.0", serde_json::json!({})),
    )
    .unwrap();

    for (rel, content) in files {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
}
