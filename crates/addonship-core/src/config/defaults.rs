//! Default configuration values

/// Packaging metadata file name
pub const PKGMETA_FILE: &str = ".pkgmeta";

/// Alternative packaging metadata file name
pub const ALT_PKGMETA_FILE: &str = "pkgmeta.yaml";

/// Get list of packaging metadata file names to search for
pub fn pkgmeta_file_names() -> Vec<&'static str> {
    vec![PKGMETA_FILE, ALT_PKGMETA_FILE]
}
