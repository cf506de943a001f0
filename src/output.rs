//! CLI output formatting for both pipeline stages.
//!
//! Output is information-centric: the primary display for every entity is
//! its semantic identity (instance name, route path), with supporting detail
//! on indented context lines. Each stage has a `format_*` function returning
//! lines (pure, testable) and a `print_*` wrapper that writes to stdout.
//!
//! ```text
//! Sources
//! 001 v1 (3 pages)
//!     Remote: org/repo
//!     Config: yes
//!
//! Routes
//! 001 /v1/intro/
//!     Docset: Apollo Client (3.x)
//!     Versions: 2
//!
//! Assembled 3 routes from 1 source
//! ```

use crate::discover::Snapshot;
use crate::types::Route;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{pos:0>3}")
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Format the discovery summary: one entry per source instance, in manifest
/// order, with page count, remote identity, and config presence.
pub fn format_discover_output(snapshot: &Snapshot) -> Vec<String> {
    let mut lines = vec!["Sources".to_string()];

    // Instance order follows page/config discovery order
    let mut instances: Vec<&str> = Vec::new();
    for config in &snapshot.configs {
        if !instances.contains(&config.source_name.as_str()) {
            instances.push(&config.source_name);
        }
    }
    for page in &snapshot.pages {
        if !instances.contains(&page.source_name.as_str()) {
            instances.push(&page.source_name);
        }
    }

    for (pos, name) in instances.iter().enumerate() {
        let pages = snapshot
            .pages
            .iter()
            .filter(|p| p.source_name == *name)
            .count();
        lines.push(format!(
            "{} {} ({})",
            format_index(pos + 1),
            name,
            plural(pages, "page")
        ));

        let remote = snapshot
            .configs
            .iter()
            .find(|c| c.source_name == *name)
            .and_then(|c| c.remote.as_deref())
            .or_else(|| {
                snapshot
                    .pages
                    .iter()
                    .find(|p| p.source_name == *name)
                    .and_then(|p| p.remote.as_deref())
            });
        if let Some(remote) = remote {
            lines.push(format!("    Remote: {remote}"));
        }

        let has_config = snapshot.configs.iter().any(|c| c.source_name == *name);
        lines.push(format!(
            "    Config: {}",
            if has_config { "yes" } else { "none" }
        ));
    }

    lines
}

/// Format the assembled route listing plus a summary line.
pub fn format_routes_output(routes: &[Route]) -> Vec<String> {
    let mut lines = vec!["Routes".to_string()];

    for (pos, route) in routes.iter().enumerate() {
        lines.push(format!("{} {}", format_index(pos + 1), route.path));

        match &route.context.docset {
            Some(docset) => lines.push(format!(
                "    Docset: {} ({})",
                docset.docset_title, docset.current_version
            )),
            None => lines.push("    Docset: none (no config)".to_string()),
        }
        if let Some(versions) = &route.context.versions {
            lines.push(format!("    Versions: {}", versions.len()));
        }
    }

    let docsets = {
        let mut titles: Vec<&str> = routes
            .iter()
            .filter_map(|r| r.context.docset.as_ref())
            .map(|d| d.docset_title.as_str())
            .collect();
        titles.sort_unstable();
        titles.dedup();
        titles.len()
    };
    lines.push(String::new());
    lines.push(format!(
        "Assembled {} across {}",
        plural(routes.len(), "route"),
        plural(docsets, "docset")
    ));

    lines
}

pub fn print_discover_output(snapshot: &Snapshot) {
    for line in format_discover_output(snapshot) {
        println!("{line}");
    }
}

pub fn print_routes_output(routes: &[Route]) {
    for line in format_routes_output(routes) {
        println!("{line}");
    }
}
