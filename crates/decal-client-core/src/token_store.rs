//! Durable storage for the access/refresh token pair.
//!
//! Reads never fail: anything that cannot be read is reported as a missing
//! token. Writes and clears are best effort and only logged when they fail.
//! Concurrent save/read/clear are not coordinated with each other.

use anyhow::Context as _;
use async_trait::async_trait;
use decal_shared::{
    log_err_as_warn,
    token::{StoredTokens, TokenPair},
};
use std::{
    fmt::Debug,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing::{debug, instrument, warn};

#[async_trait]
pub trait TokenStore: Debug + Send + Sync {
    /// Replaces both slots
    async fn save(&self, tokens: TokenPair);
    async fn read(&self) -> StoredTokens;
    /// Empties both slots
    async fn clear(&self);
}

/// Keeps the tokens in a RON file. A new file is written next to the target
/// and then renamed over it.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

/// Keeps the tokens in memory only, they are lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<StoredTokens>,
}

/// On disk format, only exists while (de)serializing
#[derive(serde::Serialize, serde::Deserialize)]
struct TokenFile {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn try_read(&self) -> anyhow::Result<StoredTokens> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = ?self.path, "no token file found");
                return Ok(StoredTokens::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {:?}", self.path));
            }
        };
        let file: TokenFile = ron::from_str(&contents).context("failed to parse token file")?;
        Ok(StoredTokens {
            access: file.access_token.map(Into::into),
            refresh: file.refresh_token.map(Into::into),
        })
    }

    async fn try_write(&self, file: &TokenFile) -> anyhow::Result<()> {
        let contents = ron::to_string(file).context("failed to serialize tokens")?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create folder {parent:?}"))?;
        }
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, contents)
            .await
            .with_context(|| format!("failed to write {temp_path:?}"))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .with_context(|| format!("failed to move {temp_path:?} to {:?}", self.path))?;
        Ok(())
    }

    async fn try_clear(&self) -> anyhow::Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("failed to remove {:?}", self.path)),
        }
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    #[instrument(skip(tokens))]
    async fn save(&self, tokens: TokenPair) {
        let file = TokenFile {
            access_token: Some(tokens.access.expose_secret().to_string()),
            refresh_token: Some(tokens.refresh.expose_secret().to_string()),
        };
        log_err_as_warn!(self.try_write(&file).await);
    }

    #[instrument]
    async fn read(&self) -> StoredTokens {
        match self.try_read().await {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!(?e, "treating unreadable token file as no tokens");
                StoredTokens::default()
            }
        }
    }

    #[instrument]
    async fn clear(&self) {
        log_err_as_warn!(self.try_clear().await);
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn save(&self, tokens: TokenPair) {
        *self.tokens.lock().expect("mutex poisoned") = tokens.into();
    }

    async fn read(&self) -> StoredTokens {
        self.tokens.lock().expect("mutex poisoned").clone()
    }

    async fn clear(&self) {
        *self.tokens.lock().expect("mutex poisoned") = StoredTokens::default();
    }
}
