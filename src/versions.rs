//! Version grouping by upstream-repository identity.
//!
//! Two source instances are versions of the same docset exactly when their
//! declared remote identities match (e.g. both track `apollographql/client`).
//! Grouping produces the version-switcher entries every page of the group
//! shares. Instances with no remote identity are standalone: they join no
//! group and never get a switcher, not even one listing only themselves.
//!
//! Order within a group is discovery order — the `sources.toml` author
//! controls how versions are listed, and no semver interpretation of the
//! labels is attempted.

use crate::config::ParsedConfig;
use crate::types::VersionRef;
use std::collections::BTreeMap;

/// Group parsed configs by remote identity.
///
/// Each group maps to one [`VersionRef`] per member, in input order. The
/// outer map is ordered by remote identity so listings are deterministic.
pub fn resolve(configs: &[ParsedConfig]) -> BTreeMap<String, Vec<VersionRef>> {
    let mut groups: BTreeMap<String, Vec<VersionRef>> = BTreeMap::new();
    for config in configs {
        if let Some(remote) = &config.remote {
            groups.entry(remote.clone()).or_default().push(VersionRef {
                label: config.version.clone(),
                slug: config.source_name.clone(),
            });
        }
    }
    groups
}
