//! Route assembly — the join at the heart of the pipeline.
//!
//! Takes a frozen [`Snapshot`] and produces one [`Route`] per content page by
//! joining three things:
//!
//! 1. the page's own identity and slug (from discovery),
//! 2. its docset's config record (title, current version, nav tree), looked
//!    up by source-instance name,
//! 3. its version-switcher entries, looked up by remote identity.
//!
//! Both joins are deliberately tolerant:
//!
//! - No remote identity → no `versions` in the context at all. Standalone
//!   docsets have no switcher.
//! - No config record for the instance → the docset fields are simply absent
//!   from the context. The page still routes; the renderer shows it without
//!   docset chrome. This mirrors longstanding behavior downstream tooling
//!   depends on, so it is covered by tests rather than turned into an error.
//!
//! Config parse failures, by contrast, abort the whole assembly — a build
//! with a broken `config.json` produces no routes at all.

use crate::config::{self, ConfigIndex};
use crate::discover::Snapshot;
use crate::types::{DocsetFields, Route, RouteContext};
use crate::versions;
use thiserror::Error;

/// Renderer template reference stamped on every route. The downstream
/// renderer resolves it; this side treats it as an opaque string.
pub const PAGE_TEMPLATE: &str = "templates/page";

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("page {id} in source \"{source_name}\" has no render representation")]
    NoRepresentation { id: String, source_name: String },
}

/// Assemble one route per content page in the snapshot.
///
/// Output order follows snapshot page order, which discovery keeps
/// deterministic.
pub fn assemble(snapshot: &Snapshot) -> Result<Vec<Route>, AssembleError> {
    let parsed = config::parse_all(&snapshot.configs)?;
    let index = ConfigIndex::build(&parsed);
    let version_groups = versions::resolve(&parsed);

    snapshot
        .pages
        .iter()
        .map(|page| {
            // A page may carry several render representations; the first in
            // discovery order is canonical for the route path.
            let canonical =
                page.representations
                    .first()
                    .ok_or_else(|| AssembleError::NoRepresentation {
                        id: page.id.clone(),
                        source_name: page.source_name.clone(),
                    })?;

            let versions = page
                .remote
                .as_ref()
                .map(|remote| version_groups.get(remote).cloned().unwrap_or_default());

            let docset = index.get(&page.source_name).map(|record| DocsetFields {
                docset_title: record.docset_title.clone(),
                current_version: record.current_version.clone(),
                nav_items: record.nav_items.clone(),
            });

            Ok(Route {
                path: canonical.slug.clone(),
                template: PAGE_TEMPLATE.to_string(),
                context: RouteContext {
                    id: page.id.clone(),
                    versions,
                    docset,
                },
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::discover::{ContentPage, PageFormat, RawConfigFile, Representation};
    use crate::test_helpers::{config_json, page, raw_config};

    fn snapshot(configs: Vec<RawConfigFile>, pages: Vec<ContentPage>) -> Snapshot {
        Snapshot { configs, pages }
    }

    #[test]
    fn joins_config_versions_and_slug_into_route() {
        let snap = snapshot(
            vec![
                raw_config("v1", Some("org/repo"), "Docs", "1.0"),
                raw_config("v2", Some("org/repo"), "Docs", "2.0"),
            ],
            vec![page("p1", "v1", Some("org/repo"), "/v1/intro/")],
        );

        let routes = assemble(&snap).unwrap();
        assert_eq!(routes.len(), 1);

        let route = &routes[0];
        assert_eq!(route.path, "/v1/intro/");
        assert_eq!(route.template, PAGE_TEMPLATE);
        assert_eq!(route.context.id, "p1");

        let docset = route.context.docset.as_ref().unwrap();
        assert_eq!(docset.docset_title, "Docs");
        assert_eq!(docset.current_version, "1.0");

        // Full group in source order, own version included
        let versions = route.context.versions.as_ref().unwrap();
        let pairs: Vec<(&str, &str)> = versions
            .iter()
            .map(|v| (v.label.as_str(), v.slug.as_str()))
            .collect();
        assert_eq!(pairs, vec![("1.0", "v1"), ("2.0", "v2")]);
    }

    #[test]
    fn no_remote_means_no_versions() {
        let snap = snapshot(
            vec![raw_config("labs", None, "Labs", "0.1")],
            vec![page("p1", "labs", None, "/labs/intro/")],
        );

        let routes = assemble(&snap).unwrap();
        assert!(routes[0].context.versions.is_none());
        assert!(routes[0].context.docset.is_some());
    }

    #[test]
    fn missing_config_degrades_to_bare_context() {
        // Page's instance declared no config.json: route still emitted,
        // docset fields absent.
        let snap = snapshot(vec![], vec![page("p1", "v1", None, "/v1/intro/")]);

        let routes = assemble(&snap).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path, "/v1/intro/");
        assert!(routes[0].context.docset.is_none());
        assert!(routes[0].context.versions.is_none());
    }

    #[test]
    fn remote_with_no_matching_configs_yields_empty_versions() {
        let snap = snapshot(
            vec![],
            vec![page("p1", "v1", Some("org/ghost"), "/v1/intro/")],
        );

        let routes = assemble(&snap).unwrap();
        assert_eq!(routes[0].context.versions.as_deref(), Some(&[][..]));
    }

    #[test]
    fn first_representation_wins() {
        let mut p = page("p1", "v1", None, "/v1/from-markdown/");
        p.representations.push(Representation {
            format: PageFormat::Mdx,
            slug: "/v1/from-mdx/".to_string(),
        });
        let snap = snapshot(vec![], vec![p]);

        let routes = assemble(&snap).unwrap();
        assert_eq!(routes[0].path, "/v1/from-markdown/");
    }

    #[test]
    fn page_without_representations_is_an_error() {
        let mut p = page("p1", "v1", None, "/v1/intro/");
        p.representations.clear();
        let snap = snapshot(vec![], vec![p]);

        let result = assemble(&snap);
        assert!(matches!(
            result,
            Err(AssembleError::NoRepresentation { id, .. }) if id == "p1"
        ));
    }

    #[test]
    fn malformed_config_aborts_with_no_routes() {
        let snap = snapshot(
            vec![RawConfigFile {
                source_name: "v1".to_string(),
                remote: None,
                content: "{broken".to_string(),
            }],
            vec![page("p1", "v1", None, "/v1/intro/")],
        );

        let result = assemble(&snap);
        assert!(matches!(
            result,
            Err(AssembleError::Config(ConfigError::Parse { source, .. })) if source == "v1"
        ));
    }

    #[test]
    fn sibling_pages_share_the_nav_tree() {
        let config = RawConfigFile {
            source_name: "v1".to_string(),
            remote: None,
            content: config_json(
                "Docs",
                "1.0",
                serde_json::json!({"Intro": "intro", "Guides": {"Setup": "guides/setup"}}),
            ),
        };
        let snap = snapshot(
            vec![config],
            vec![
                page("p1", "v1", None, "/v1/intro/"),
                page("p2", "v1", None, "/v1/guides/setup/"),
            ],
        );

        let routes = assemble(&snap).unwrap();
        let nav1 = &routes[0].context.docset.as_ref().unwrap().nav_items;
        let nav2 = &routes[1].context.docset.as_ref().unwrap().nav_items;
        assert_eq!(nav1, nav2);
        assert_eq!(nav1[0].title, "Intro");
        assert_eq!(nav1[1].children[0].path.as_deref(), Some("guides/setup"));
    }
}
