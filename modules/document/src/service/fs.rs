use crate::service::{BlobMetadata, StorageBackend};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tokio::fs;

/// A filesystem backed store for development and tests.
///
/// There is no presigning for plain files; the returned "URLs" are `file://`
/// paths under the base directory which a local client writes to or reads
/// from directly. Expiry is not enforced.
#[derive(Clone, Debug)]
pub struct FileSystemBackend {
    content: PathBuf,
}

impl FileSystemBackend {
    pub async fn new(base: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let content = base.into().join("content");

        fs::create_dir_all(&content)
            .await
            .or_else(|err| {
                if err.kind() == ErrorKind::AlreadyExists {
                    Ok(())
                } else {
                    Err(err)
                }
            })?;

        Ok(Self { content })
    }

    fn target(&self, key: &str) -> PathBuf {
        // keys carry a company prefix ("<company>/<uuid>-<name>"), keep the
        // same layout on disk
        key.split('/').fold(self.content.clone(), |path, part| {
            path.join(Path::new(part))
        })
    }

    async fn file_url(&self, key: &str) -> Result<String, std::io::Error> {
        let target = self.target(key);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(format!("file://{}", target.display()))
    }
}

impl StorageBackend for FileSystemBackend {
    type Error = std::io::Error;

    async fn upload_url(&self, key: &str, _expires_secs: u32) -> Result<String, Self::Error> {
        self.file_url(key).await
    }

    async fn download_url(&self, key: &str, _expires_secs: u32) -> Result<String, Self::Error> {
        self.file_url(key).await
    }

    async fn exists(&self, key: &str) -> Result<bool, Self::Error> {
        fs::try_exists(self.target(key)).await
    }

    async fn metadata(&self, key: &str) -> Result<Option<BlobMetadata>, Self::Error> {
        match fs::metadata(self.target(key)).await {
            Ok(meta) => {
                let last_modified = meta
                    .modified()
                    .ok()
                    .map(OffsetDateTime::from)
                    .and_then(|ts| ts.format(&Rfc3339).ok());

                Ok(Some(BlobMetadata {
                    content_type: None,
                    content_length: i64::try_from(meta.len()).ok(),
                    last_modified,
                    etag: None,
                }))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}
