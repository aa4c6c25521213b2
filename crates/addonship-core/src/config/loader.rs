//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};

use super::defaults::pkgmeta_file_names;
use super::types::PkgMeta;
use super::validation::validate_pkgmeta;

/// Load packaging metadata from a file
pub fn load_pkgmeta(path: &Path) -> Result<PkgMeta> {
    info!(path = %path.display(), "loading pkgmeta");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    // An empty file is a valid, empty pkgmeta
    let meta: PkgMeta = if content.trim().is_empty() {
        PkgMeta::default()
    } else {
        serde_yaml::from_str(&content).map_err(|source| ConfigError::YamlError {
            path: path.to_path_buf(),
            source,
        })?
    };

    validate_pkgmeta(&meta)?;
    debug!(path = %path.display(), "pkgmeta loaded and validated");
    Ok(meta)
}

/// Find the packaging metadata file in a directory or its parents
pub fn find_pkgmeta(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for pkgmeta");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in pkgmeta_file_names() {
            let candidate = current.join(name);
            if candidate.is_file() {
                info!(path = %candidate.display(), "found pkgmeta");
                return Some(candidate);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no pkgmeta found");
    None
}

/// Load packaging metadata, or defaults when there is no file
///
/// A file that exists but does not parse is still an error.
pub fn load_pkgmeta_or_default(dir: &Path) -> Result<(PkgMeta, Option<PathBuf>)> {
    match find_pkgmeta(dir) {
        Some(path) => Ok((load_pkgmeta(&path)?, Some(path))),
        None => {
            debug!(dir = %dir.display(), "no pkgmeta found, using defaults");
            Ok((PkgMeta::default(), None))
        }
    }
}
