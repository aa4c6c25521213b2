//! CurseForge upload API
//!
//! Each game has its own API host (`https://<game>.curseforge.com`).
//!
//! ## Endpoints
//!
//! - `GET /game-versions.json`: known game versions keyed by id
//! - `POST /addons/<slug>/upload-file.json`: multipart file upload
//!
//! Both authenticate with the `X-API-Key` header.

mod multipart;
mod response;
mod versions;

pub use multipart::{file_part_stream, inner_trailer, UploadRequest, FILE_FIELD, FILE_MIME};
pub use response::{classify_upload_response, ResponseClass};
pub use versions::{latest_version_id, NO_VERSION_ID};

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::{Result, StoreError};
use crate::traits::{Payload, ReleaseStore};
use crate::types::*;

const API_KEY_HEADER: &str = "X-API-Key";

const GAME_VERSIONS_PATH: &str = "game-versions.json";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("addonship/", env!("CARGO_PKG_VERSION"));

/// CurseForge client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurseForgeConfig {
    /// Game short name, e.g. "wow"
    pub game: String,

    /// API key
    pub api_key: String,

    /// API root; defaults to the game's own host
    pub base_url: Option<String>,
}

impl CurseForgeConfig {
    /// Create a config for the given game
    pub fn new(game: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            game: game.into(),
            api_key: api_key.into(),
            base_url: None,
        }
    }

    /// Send requests to another API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// API root without a trailing slash
    pub fn api_root(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.curseforge.com", self.game),
        }
    }
}

/// CurseForge release client
pub struct CurseForgeClient {
    config: CurseForgeConfig,
    client: Client,
}

impl CurseForgeClient {
    /// Create a new client
    pub fn new(config: CurseForgeConfig) -> Result<Self> {
        if config.game.trim().is_empty() {
            return Err(StoreError::ConfigurationError("game cannot be empty".to_string()));
        }
        if config.api_key.trim().is_empty() {
            return Err(StoreError::ConfigurationError("API key cannot be empty".to_string()));
        }

        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &CurseForgeConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_root(), path)
    }

    fn upload_url(&self, slug: &str) -> String {
        self.url(&format!("addons/{}/upload-file.json", slug))
    }
}

#[async_trait::async_trait]
impl ReleaseStore for CurseForgeClient {
    fn name(&self) -> &str {
        "CurseForge"
    }

    #[instrument(skip(self), fields(game = %self.config.game))]
    async fn game_versions(&self) -> Result<GameVersions> {
        let url = self.url(GAME_VERSIONS_PATH);
        debug!(url = %url, "fetching game versions");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(StoreError::Remote {
                operation: "game version lookup",
                status: status.as_u16(),
                body,
            });
        }

        let versions: GameVersions = serde_json::from_str(&body)?;
        debug!(count = versions.len(), "fetched game versions");
        Ok(versions)
    }

    async fn latest_game_version_id(&self) -> Result<String> {
        let versions = self.game_versions().await?;
        latest_version_id(&versions)
    }

    #[instrument(skip(self, metadata, payload), fields(game = %self.config.game))]
    async fn upload_file(
        &self,
        mut metadata: ReleaseFileMetadata,
        slug: &str,
        file_name: &str,
        payload: Payload,
    ) -> Result<UploadReceipt> {
        let game_version = match metadata.game_versions.clone() {
            Some(id) => id,
            None => {
                let id = self.latest_game_version_id().await?;
                if id == NO_VERSION_ID {
                    warn!("service lists no game versions, uploading against version 0");
                }
                metadata.game_versions = Some(id.clone());
                id
            }
        };

        let request = UploadRequest::build(&metadata, file_name, payload)?;
        let url = self.upload_url(slug);
        debug!(content_type = %request.content_type(), "built upload request");
        info!(url = %url, game_version = %game_version, "uploading file");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .multipart(request.into_form())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), body_len = body.len(), "upload response received");
        classify_upload_response(status, &body)?;

        info!(game_version = %game_version, "upload accepted");
        Ok(UploadReceipt {
            game_version,
            file_name: file_name.to_string(),
        })
    }
}
