//! Configuration validation

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::PkgMeta;

/// Validate packaging metadata
pub fn validate_pkgmeta(meta: &PkgMeta) -> Result<()> {
    debug!("validating pkgmeta");
    validate_package_as(meta)?;
    validate_manual_changelog(meta)?;
    build_ignore_set(&meta.ignore)?;
    debug!("pkgmeta validation passed");
    Ok(())
}

fn validate_package_as(meta: &PkgMeta) -> Result<()> {
    let Some(name) = &meta.package_as else {
        return Ok(());
    };

    if name.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "package-as".to_string(),
            message: "cannot be empty".to_string(),
        }
        .into());
    }

    if name.contains(['/', '\\']) {
        return Err(ConfigError::InvalidValue {
            field: "package-as".to_string(),
            message: "cannot contain path separators".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_manual_changelog(meta: &PkgMeta) -> Result<()> {
    if let Some(changelog) = &meta.manual_changelog {
        if changelog.path().as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "manual-changelog".to_string(),
                message: "filename cannot be empty".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Compile `ignore` patterns into one matcher
///
/// A bare name such as `docs` also matches everything below it.
pub fn build_ignore_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let trimmed = pattern.trim_matches('/');
        for candidate in [trimmed.to_string(), format!("{}/**", trimmed)] {
            let glob = Glob::new(&candidate).map_err(|e| ConfigError::InvalidValue {
                field: "ignore".to_string(),
                message: format!("invalid pattern '{}': {}", pattern, e),
            })?;
            builder.add(glob);
        }
    }

    builder.build().map_err(|e| {
        ConfigError::InvalidValue {
            field: "ignore".to_string(),
            message: e.to_string(),
        }
        .into()
    })
}
