//! Source-instance discovery and slug derivation.
//!
//! A docatlas project declares its docset versions in a `sources.toml` at the
//! project root:
//!
//! ```toml
//! [[source]]
//! name = "v3"              # unique instance name, also the route prefix
//! path = "docs/v3"         # content directory (defaults to the name)
//! remote = "org/client"    # upstream repository identity (optional)
//!
//! [[source]]
//! name = "labs"            # no remote: standalone docset, no version switcher
//!
//! [[asset]]
//! url = "https://example.com/api/docs.json"
//! dest = "assets/docs.json"
//! ```
//!
//! Discovery walks each declared directory once and freezes the result into a
//! [`Snapshot`]: the raw `config.json` per instance (if present) and every
//! `.md`/`.mdx` content page with its derived route slug. Assembly operates
//! only on the snapshot — it never touches the filesystem — so the whole
//! downstream pipeline sees one consistent view of the content.
//!
//! ## Slugs
//!
//! A page's slug is its path relative to the instance directory, extension
//! stripped, `index` collapsed into its directory, wrapped in slashes, and
//! prefixed with the instance name:
//!
//! ```text
//! v3 + guides/setup.mdx  →  /v3/guides/setup/
//! v3 + intro/index.md    →  /v3/intro/
//! v3 + index.md          →  /v3/
//! ```

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid sources manifest: {0}")]
    Manifest(#[from] toml::de::Error),
    #[error("duplicate source name \"{0}\" in sources manifest")]
    DuplicateSource(String),
    #[error("source \"{name}\" points to missing directory: {path}")]
    MissingSourceDir { name: String, path: PathBuf },
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// One declared source instance: a directory holding one version of one
/// docset.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceDecl {
    pub name: String,
    /// Content directory relative to the project root; defaults to `name`.
    #[serde(default)]
    pub path: Option<String>,
    /// Upstream repository identity, shared by sibling versions of the same
    /// docset. Absent for docsets not backed by a tracked remote.
    #[serde(default)]
    pub remote: Option<String>,
}

impl SourceDecl {
    pub fn dir(&self) -> &str {
        self.path.as_deref().unwrap_or(&self.name)
    }
}

/// One remote asset to download before the build (see [`crate::fetch`]).
#[derive(Debug, Clone, Deserialize)]
pub struct AssetDecl {
    pub url: String,
    /// Destination path relative to the project root.
    pub dest: String,
}

/// Parsed `sources.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesManifest {
    #[serde(default, rename = "source")]
    pub sources: Vec<SourceDecl>,
    #[serde(default, rename = "asset")]
    pub assets: Vec<AssetDecl>,
}

/// Load and validate the sources manifest.
pub fn load_manifest(path: &Path) -> Result<SourcesManifest, DiscoverError> {
    let content = fs::read_to_string(path)?;
    let manifest: SourcesManifest = toml::from_str(&content)?;

    let mut seen = std::collections::HashSet::new();
    for source in &manifest.sources {
        if !seen.insert(source.name.as_str()) {
            return Err(DiscoverError::DuplicateSource(source.name.clone()));
        }
    }
    Ok(manifest)
}

/// Raw `config.json` content attached to its source-instance identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawConfigFile {
    pub source_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
    pub content: String,
}

/// Render format of one page representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    Markdown,
    Mdx,
}

/// One render representation of a content page.
///
/// Every applicable renderer claims the file and derives the same slug; the
/// assembler canonically uses the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Representation {
    pub format: PageFormat,
    pub slug: String,
}

/// A discovered content page, frozen with everything assembly needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPage {
    /// Stable content identifier: hash of instance name + relative path.
    pub id: String,
    pub source_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
    pub representations: Vec<Representation>,
}

/// Frozen result of one discovery pass: the only input to assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub configs: Vec<RawConfigFile>,
    pub pages: Vec<ContentPage>,
}

/// Walk every declared source directory and freeze the result.
///
/// Instance order follows the manifest; files within an instance are walked
/// in sorted order, so two discoveries of the same tree produce identical
/// snapshots.
pub fn discover(root: &Path, manifest: &SourcesManifest) -> Result<Snapshot, DiscoverError> {
    let mut configs = Vec::new();
    let mut pages = Vec::new();

    for source in &manifest.sources {
        let dir = root.join(source.dir());
        if !dir.is_dir() {
            return Err(DiscoverError::MissingSourceDir {
                name: source.name.clone(),
                path: dir,
            });
        }

        let config_path = dir.join("config.json");
        if config_path.is_file() {
            configs.push(RawConfigFile {
                source_name: source.name.clone(),
                remote: source.remote.clone(),
                content: fs::read_to_string(&config_path)?,
            });
        }

        let walker = WalkDir::new(&dir).sort_by_file_name().into_iter();
        for entry in walker.filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name())) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(formats) = renderers_for(entry.path()) else {
                continue;
            };

            // dir is a prefix of every walked entry by construction
            let rel = entry
                .path()
                .strip_prefix(&dir)
                .expect("walked path outside source dir");
            let slug = derive_slug(&source.name, rel);

            pages.push(ContentPage {
                id: page_id(&source.name, rel),
                source_name: source.name.clone(),
                remote: source.remote.clone(),
                representations: formats
                    .iter()
                    .map(|&format| Representation {
                        format,
                        slug: slug.clone(),
                    })
                    .collect(),
            });
        }
    }

    Ok(Snapshot { configs, pages })
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Which renderers claim a file, in precedence order.
///
/// Plain markdown is renderable by both the markdown and MDX pipelines (MDX
/// is a superset); `.mdx` only by MDX. `None` for non-content files.
fn renderers_for(path: &Path) -> Option<&'static [PageFormat]> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "md" => Some(&[PageFormat::Markdown, PageFormat::Mdx]),
        "mdx" => Some(&[PageFormat::Mdx]),
        _ => None,
    }
}

/// Derive the route slug for a content file within its source instance.
pub fn derive_slug(source_name: &str, rel: &Path) -> String {
    let mut parts: Vec<String> = rel
        .iter()
        .map(|c| c.to_string_lossy().into_owned())
        .collect();

    if let Some(last) = parts.last_mut() {
        if let Some(stem) = Path::new(last.as_str()).file_stem() {
            *last = stem.to_string_lossy().into_owned();
        }
    }
    // index pages route to their directory
    if parts.last().is_some_and(|p| p == "index") {
        parts.pop();
    }

    let mut slug = format!("/{source_name}");
    for part in &parts {
        slug.push('/');
        slug.push_str(part);
    }
    slug.push('/');
    slug
}

/// Stable page identifier: truncated SHA-256 of instance name + relative
/// path, so the same file keeps its id across builds and machines.
fn page_id(source_name: &str, rel: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source_name.as_bytes());
    hasher.update([0]);
    hasher.update(rel.to_string_lossy().as_bytes());
    let digest = hasher.finalize();
    digest[..8].iter().map(|b| format!("{b:02x}")).collect()
}
