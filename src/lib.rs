//! # docatlas
//!
//! Build-time route assembler for multi-docset, multi-version documentation
//! sites. Each docset version lives in its own source directory with a
//! `config.json` (title, version label, sidebar tree) next to its markdown
//! content; docatlas joins those scattered sources into one route manifest
//! for a downstream HTML renderer.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Discover   sources.toml + docs/  →  discovery.json   (filesystem → frozen snapshot)
//! 2. Assemble   snapshot             →  routes.json       (join configs + versions + nav)
//! ```
//!
//! The stage boundary exists for the same reasons the manifest files do:
//! each snapshot is human-readable JSON you can inspect, and assembly is a
//! pure function from snapshot to routes, so the whole join logic is testable
//! without touching the filesystem.
//!
//! Assembly itself is three joins per page:
//!
//! - **config**: the page's source-instance name looks up its docset's
//!   parsed `config.json` (title, current version, nav tree),
//! - **versions**: the instance's upstream remote identity looks up every
//!   sibling version of the same docset, in declaration order,
//! - **slug**: the page's route path, derived at discovery time from its
//!   file location and instance prefix.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`discover`] | Stage 1 — reads `sources.toml`, walks instance dirs, derives slugs, freezes the snapshot |
//! | [`assemble`] | Stage 2 — joins pages with configs and version groups into route descriptors |
//! | [`config`] | `config.json` parsing, sidebar shape checking, aggregation index |
//! | [`nav`] | Sidebar → ordered navigation tree with deterministic ids |
//! | [`versions`] | Groups docset versions by upstream remote identity |
//! | [`fetch`] | Downloads declared remote assets before the build |
//! | [`types`] | Wire types: `NavItem`, `VersionRef`, `Route` and its context |
//! | [`output`] | CLI output formatting — per-stage listings of sources and routes |
//!
//! # Design Decisions
//!
//! ## Deterministic nav identifiers
//!
//! Nav item ids are hashes of the item's label path from the tree root, not
//! random per build. Rebuilding an unchanged sidebar yields byte-identical
//! nav trees, so clients can cache expanded/collapsed state and diffs of
//! `routes.json` stay meaningful.
//!
//! ## Explicit collision policy
//!
//! The config index is keyed by source-instance name with a documented
//! last-write-wins insert that returns the displaced record. Discovery
//! rejects duplicate instance names outright, so the policy only matters for
//! hand-fed snapshots — but it is specified and tested, not an accident of
//! accumulation order.
//!
//! ## Degraded joins are contractual
//!
//! A page whose instance has no remote identity gets no version switcher; a
//! page whose instance has no `config.json` routes anyway, with the docset
//! fields absent from its context. Downstream templates rely on both
//! omissions, so they are covered by tests rather than upgraded to errors.
//!
//! ## Fatal parse errors
//!
//! One malformed `config.json` or one unsupported sidebar value aborts the
//! whole build with no partial `routes.json`. There is no mechanism to build
//! a partial site.

pub mod assemble;
pub mod config;
pub mod discover;
pub mod fetch;
pub mod nav;
pub mod output;
pub mod types;
pub mod versions;

#[cfg(test)]
pub(crate) mod test_helpers;
