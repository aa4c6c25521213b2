//! Release upload clients for addonship
//!
//! This crate talks to the addon hosting service: it lists the game versions
//! a file can target, builds the multipart upload request and classifies the
//! service's answer.
//!
//! ## Usage
//!
//! ```ignore
//! use addonship_stores::{CurseForgeClient, CurseForgeConfig, ReleaseStore};
//!
//! let client = CurseForgeClient::new(CurseForgeConfig::new("wow", api_key))?;
//! let receipt = client.upload_file(metadata, "my-addon", "MyAddon v1.0.zip", payload).await?;
//! ```

pub mod curseforge;
pub mod error;
pub mod traits;
pub mod types;

pub use curseforge::{CurseForgeClient, CurseForgeConfig};
pub use error::{Result, StoreError};
pub use traits::{Payload, ReleaseStore};
pub use types::*;
