//! Exit codes for the CLI

use addonship_core::AddonshipError;

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// Upload rejected by field validation
pub const VALIDATION_ERROR: i32 = 5;

/// Exit code for an error returned by a command
pub fn for_error(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<AddonshipError>() {
        Some(AddonshipError::Config(_)) => CONFIG_ERROR,
        Some(AddonshipError::Git(_)) => GIT_ERROR,
        Some(e) if e.is_validation() => VALIDATION_ERROR,
        _ => ERROR,
    }
}
