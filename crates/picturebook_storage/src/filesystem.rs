//! Filesystem-based storyboard storage.
//!
//! Each document lives in its own file: `{base_path}/{key}.json`.

use crate::StoryboardStore;
use picturebook_error::{JsonError, PicturebookResult, StorageError, StorageErrorKind};
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};

/// Filesystem storage backend.
///
/// ```text
/// ./storyboards/
/// ├── f9a3274a-ee80-41dd-a003-3bb3ea78ba51.json
/// └── f9a3274a-ee80-41dd-a003-3bb3ea78ba51-illustrations.json
/// ```
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// never leaves a half-written storyboard behind.
#[derive(Debug, Clone)]
pub struct FileSystemStoryboardStore {
    base_path: PathBuf,
}

impl FileSystemStoryboardStore {
    /// Create a new filesystem store.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> PicturebookResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Opened storyboard storage");
        Ok(Self { base_path })
    }

    /// Root directory of the store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the file holding a key.
    fn get_path(&self, key: &str) -> PicturebookResult<PathBuf> {
        Self::validate_key(key)?;
        Ok(self.base_path.join(format!("{}.json", key)))
    }

    /// Keys become file names, so only a conservative alphabet is allowed.
    fn validate_key(key: &str) -> PicturebookResult<()> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::new(StorageErrorKind::InvalidKey(key.to_string())).into());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl StoryboardStore for FileSystemStoryboardStore {
    #[tracing::instrument(skip(self, document))]
    async fn save(&self, key: &str, document: &JsonValue) -> PicturebookResult<()> {
        let path = self.get_path(key)?;
        let data = serde_json::to_vec(document)
            .map_err(|e| JsonError::new(format!("Failed to serialize storyboard {}: {}", key, e)))?;

        let temp_path = path.with_extension("json.tmp");
        if let Err(e) = tokio::fs::write(&temp_path, &data).await {
            discard_temp_file(&temp_path).await;
            return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
            .into());
        }

        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            discard_temp_file(&temp_path).await;
            return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
            .into());
        }

        tracing::info!(
            key,
            path = %path.display(),
            size = data.len(),
            "Stored storyboard document"
        );

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn load(&self, key: &str) -> PicturebookResult<JsonValue> {
        let path = self.get_path(key)?;

        let data = tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(key.to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        let document = serde_json::from_slice(&data).map_err(|e| {
            JsonError::new(format!("Stored document {} is not valid JSON: {}", key, e))
        })?;

        tracing::debug!(key, size = data.len(), "Loaded storyboard document");
        Ok(document)
    }

    #[tracing::instrument(skip(self))]
    async fn exists(&self, key: &str) -> PicturebookResult<bool> {
        let path = self.get_path(key)?;
        tokio::fs::try_exists(&path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()
        })
    }
}

/// Remove a half-written temp file; a missing file is fine.
async fn discard_temp_file(temp_path: &Path) {
    match tokio::fs::remove_file(temp_path).await {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %temp_path.display(), error = %e, "Failed to remove temp file");
        }
        _ => {}
    }
}
