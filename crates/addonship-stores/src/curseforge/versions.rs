//! Default game version resolution

use tracing::debug;

use crate::error::{Result, StoreError};
use crate::types::GameVersions;

/// Id returned when no game versions are known
pub const NO_VERSION_ID: &str = "0";

/// Highest numeric id in the set, as a string
///
/// Fails if any id is not a number. An empty set yields [`NO_VERSION_ID`].
pub fn latest_version_id(versions: &GameVersions) -> Result<String> {
    let mut latest: i64 = 0;
    for id in versions.keys() {
        let value: i64 = id.parse().map_err(|_| StoreError::Format(id.clone()))?;
        latest = latest.max(value);
    }

    debug!(count = versions.len(), latest, "resolved latest game version");
    Ok(latest.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameVersion;

    fn versions(ids: &[&str]) -> GameVersions {
        ids.iter()
            .map(|id| (id.to_string(), GameVersion::default()))
            .collect()
    }

    #[test]
    fn test_numeric_max_not_lexical() {
        assert_eq!(latest_version_id(&versions(&["1", "15", "3"])).unwrap(), "15");
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(latest_version_id(&GameVersions::new()).unwrap(), NO_VERSION_ID);
    }

    #[test]
    fn test_non_numeric_id() {
        let err = latest_version_id(&versions(&["1", "classic"])).unwrap_err();
        assert!(matches!(err, StoreError::Format(id) if id == "classic"));
    }

    #[test]
    fn test_negative_ids_are_numbers() {
        assert_eq!(latest_version_id(&versions(&["-1", "3"])).unwrap(), "3");
        assert_eq!(latest_version_id(&versions(&["-4"])).unwrap(), NO_VERSION_ID);
    }

    #[test]
    fn test_padded_id_is_not_a_number() {
        let err = latest_version_id(&versions(&[" 15", "3"])).unwrap_err();
        assert!(matches!(err, StoreError::Format(id) if id == " 15"));
    }
}
