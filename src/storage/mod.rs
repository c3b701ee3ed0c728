use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Errors from the photo blob store
#[derive(Debug, Error)]
pub enum PhotoStoreError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// File extension for an accepted photo MIME type
pub fn extension_for(content_type: &str) -> Result<&'static str, PhotoStoreError> {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    match mime.as_str() {
        "image/png" => Ok("png"),
        "image/jpeg" => Ok("jpg"),
        _ => Err(PhotoStoreError::UnsupportedType(content_type.to_string())),
    }
}

/// Blob storage for uploaded planet photos
#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// Persist the bytes under a freshly generated name and return that name
    async fn put(&self, extension: &str, bytes: &[u8]) -> Result<String, PhotoStoreError>;

    /// Directory stored photos are served from
    fn root(&self) -> &Path;
}

/// Photo store writing into a local directory
#[derive(Debug, Clone)]
pub struct DiskPhotoStore {
    root: PathBuf,
}

impl DiskPhotoStore {
    /// Use `root` as the uploads directory, creating it if needed
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, PhotoStoreError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        info!("Photo uploads directory: {}", root.display());
        Ok(Self { root })
    }
}

#[async_trait]
impl PhotoStore for DiskPhotoStore {
    async fn put(&self, extension: &str, bytes: &[u8]) -> Result<String, PhotoStoreError> {
        let filename = format!("{}.{}", Uuid::new_v4(), extension);
        tokio::fs::write(self.root.join(&filename), bytes).await?;
        tracing::debug!("Stored photo {} ({} bytes)", filename, bytes.len());
        Ok(filename)
    }

    fn root(&self) -> &Path {
        &self.root
    }
}
