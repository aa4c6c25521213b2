//! Store traits

use tokio::io::AsyncRead;

use crate::error::Result;
use crate::types::*;

/// Byte stream uploaded as the file content
pub type Payload = Box<dyn AsyncRead + Send + Sync + Unpin>;

/// Trait for services a release file can be published to
///
/// Implementations provide version lookup and file upload for one
/// hosting service.
#[async_trait::async_trait]
pub trait ReleaseStore: Send + Sync {
    /// Get the store name
    fn name(&self) -> &str;

    /// List the game versions a file can target
    async fn game_versions(&self) -> Result<GameVersions>;

    /// Id of the newest known game version, `"0"` when none are known
    async fn latest_game_version_id(&self) -> Result<String>;

    /// Upload one file
    ///
    /// Resolves `metadata.game_versions` first when it is unset. The payload
    /// is read exactly once.
    async fn upload_file(
        &self,
        metadata: ReleaseFileMetadata,
        slug: &str,
        file_name: &str,
        payload: Payload,
    ) -> Result<UploadReceipt>;
}
