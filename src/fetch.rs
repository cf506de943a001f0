//! Remote asset registration.
//!
//! Some docsets reference generated artifacts that live outside any source
//! instance (e.g. an API reference JSON produced by another toolchain and
//! published at a URL). `[[asset]]` entries in `sources.toml` declare them;
//! this module downloads each one into the project tree before assembly so
//! the downstream renderer can treat them as local files.
//!
//! Assets are independent of the route pipeline — nothing in assembly reads
//! them — but a failed download is still fatal: the build either has all its
//! inputs or it does not run.

use crate::discover::AssetDecl;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to fetch {url}: {err}")]
    Http {
        url: String,
        #[source]
        err: ureq::Error,
    },
}

/// Download every declared asset under `root`, returning the written paths.
pub fn fetch_assets(root: &Path, assets: &[AssetDecl]) -> Result<Vec<PathBuf>, FetchError> {
    let mut written = Vec::with_capacity(assets.len());
    for asset in assets {
        let mut response = ureq::get(asset.url.as_str())
            .call()
            .map_err(|err| FetchError::Http {
                url: asset.url.clone(),
                err,
            })?;

        let mut body = Vec::new();
        response.body_mut().as_reader().read_to_end(&mut body)?;
        written.push(write_asset(root, &asset.dest, &body)?);
    }
    Ok(written)
}

/// Write one downloaded asset, creating parent directories as needed.
fn write_asset(root: &Path, dest: &str, body: &[u8]) -> Result<PathBuf, FetchError> {
    let path = root.join(dest);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, body)?;
    Ok(path)
}
