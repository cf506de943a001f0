//! Docset config parsing and aggregation.
//!
//! Each source instance ships a `config.json` describing one docset version:
//!
//! ```json
//! {
//!   "title": "Apollo Client",
//!   "version": "3.x",
//!   "sidebar": {
//!     "Introduction": "intro",
//!     "Guides": {
//!       "Setup": "guides/setup",
//!       "Caching": "guides/caching"
//!     }
//!   }
//! }
//! ```
//!
//! Sidebar values are either a path string (leaf) or a nested object (group),
//! to arbitrary depth. The shape of every value is decided exactly once here,
//! at parse time, into the tagged [`SidebarNode`] — nothing downstream ever
//! re-inspects raw JSON. Any other value shape (number, bool, null, array) is
//! a hard error that aborts the whole build.
//!
//! Aggregation folds the parsed configs into a [`ConfigIndex`] keyed by
//! source-instance name. Discovery guarantees one config per instance; if a
//! caller violates that, [`ConfigIndex::insert`] keeps the later record
//! (last-write-wins) and hands back the displaced one.

use crate::discover::RawConfigFile;
use crate::nav;
use crate::types::NavItem;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid config.json for source \"{source}\": {err}")]
    Parse {
        source: String,
        #[source]
        err: serde_json::Error,
    },
    #[error(
        "unsupported sidebar value for \"{label}\" in source \"{source_name}\": \
         expected a path string or a nested group, found {found}"
    )]
    SidebarShape {
        source_name: String,
        label: String,
        found: &'static str,
    },
}

/// One labeled sidebar entry, in config key order.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarEntry {
    pub label: String,
    pub node: SidebarNode,
}

/// Tagged sidebar value: a routable leaf or a nested group.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarNode {
    Leaf(String),
    Group(Vec<SidebarEntry>),
}

/// Raw `config.json` shape. `title` and `version` are required; a docset
/// without a sidebar gets an empty nav tree.
#[derive(Deserialize)]
struct RawConfig {
    title: String,
    version: String,
    #[serde(default)]
    sidebar: serde_json::Map<String, Value>,
}

/// A fully parsed config still attached to its source-instance identity.
///
/// This is the input to both version resolution (which needs `remote` and
/// `version`) and index construction (which needs the rest).
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedConfig {
    pub source_name: String,
    pub remote: Option<String>,
    pub title: String,
    pub version: String,
    pub sidebar: Vec<SidebarEntry>,
}

/// Parse every discovered config, preserving discovery order.
///
/// A single malformed config fails the whole batch; there is no partial
/// aggregation.
pub fn parse_all(configs: &[RawConfigFile]) -> Result<Vec<ParsedConfig>, ConfigError> {
    configs
        .iter()
        .map(|file| parse(&file.source_name, file.remote.as_deref(), &file.content))
        .collect()
}

/// Parse one raw `config.json` into a [`ParsedConfig`].
pub fn parse(
    source_name: &str,
    remote: Option<&str>,
    content: &str,
) -> Result<ParsedConfig, ConfigError> {
    let raw: RawConfig = serde_json::from_str(content).map_err(|err| ConfigError::Parse {
        source: source_name.to_string(),
        err,
    })?;

    Ok(ParsedConfig {
        source_name: source_name.to_string(),
        remote: remote.map(str::to_string),
        title: raw.title,
        version: raw.version,
        sidebar: parse_sidebar(source_name, &raw.sidebar)?,
    })
}

fn parse_sidebar(
    source: &str,
    map: &serde_json::Map<String, Value>,
) -> Result<Vec<SidebarEntry>, ConfigError> {
    map.iter()
        .map(|(label, value)| {
            let node = match value {
                Value::String(path) => SidebarNode::Leaf(path.clone()),
                Value::Object(nested) => SidebarNode::Group(parse_sidebar(source, nested)?),
                other => {
                    return Err(ConfigError::SidebarShape {
                        source_name: source.to_string(),
                        label: label.clone(),
                        found: value_kind(other),
                    });
                }
            };
            Ok(SidebarEntry {
                label: label.clone(),
                node,
            })
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::Array(_) => "an array",
        Value::String(_) => "a string",
        Value::Object(_) => "an object",
    }
}

/// Docset context derived from one config, ready to spread into every page
/// context of that source instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigRecord {
    pub docset_title: String,
    pub current_version: String,
    pub nav_items: Vec<NavItem>,
}

impl From<&ParsedConfig> for ConfigRecord {
    fn from(config: &ParsedConfig) -> Self {
        Self {
            docset_title: config.title.clone(),
            current_version: config.version.clone(),
            nav_items: nav::build(&config.sidebar),
        }
    }
}

/// Config records indexed by source-instance name.
#[derive(Debug, Default)]
pub struct ConfigIndex {
    records: HashMap<String, ConfigRecord>,
}

impl ConfigIndex {
    /// Index a batch of parsed configs, materializing each nav tree once.
    pub fn build(configs: &[ParsedConfig]) -> Self {
        let mut index = Self::default();
        for config in configs {
            index.insert(config.source_name.clone(), ConfigRecord::from(config));
        }
        index
    }

    /// Insert a record under a source-instance name.
    ///
    /// Collision policy: last write wins. The displaced record is returned so
    /// the caller can surface it; discovery rejects duplicate instance names
    /// upstream, so a collision here means the index is being fed by hand.
    pub fn insert(&mut self, source_name: String, record: ConfigRecord) -> Option<ConfigRecord> {
        self.records.insert(source_name, record)
    }

    pub fn get(&self, source_name: &str) -> Option<&ConfigRecord> {
        self.records.get(source_name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
