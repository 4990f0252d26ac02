use super::{fs::FileSystemBackend, s3::S3Backend, BlobMetadata, StorageBackend};

/// A common backend, dispatching to the ones we support.
///
/// This is required due to the "can't turn into object" problem: the trait
/// uses async functions and cannot be boxed as a trait object, and
/// propagating the concrete type up would force actix handlers to know it
/// when extracting application data.
#[derive(Clone, Debug)]
pub enum DispatchBackend {
    Filesystem(FileSystemBackend),
    S3(S3Backend),
}

impl StorageBackend for DispatchBackend {
    type Error = anyhow::Error;

    async fn upload_url(&self, key: &str, expires_secs: u32) -> Result<String, Self::Error> {
        match self {
            Self::Filesystem(backend) => backend
                .upload_url(key, expires_secs)
                .await
                .map_err(anyhow::Error::from),
            Self::S3(backend) => backend
                .upload_url(key, expires_secs)
                .await
                .map_err(anyhow::Error::from),
        }
    }

    async fn download_url(&self, key: &str, expires_secs: u32) -> Result<String, Self::Error> {
        match self {
            Self::Filesystem(backend) => backend
                .download_url(key, expires_secs)
                .await
                .map_err(anyhow::Error::from),
            Self::S3(backend) => backend
                .download_url(key, expires_secs)
                .await
                .map_err(anyhow::Error::from),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool, Self::Error> {
        match self {
            Self::Filesystem(backend) => backend.exists(key).await.map_err(anyhow::Error::from),
            Self::S3(backend) => backend.exists(key).await.map_err(anyhow::Error::from),
        }
    }

    async fn metadata(&self, key: &str) -> Result<Option<BlobMetadata>, Self::Error> {
        match self {
            Self::Filesystem(backend) => backend.metadata(key).await.map_err(anyhow::Error::from),
            Self::S3(backend) => backend.metadata(key).await.map_err(anyhow::Error::from),
        }
    }
}

impl From<FileSystemBackend> for DispatchBackend {
    fn from(value: FileSystemBackend) -> Self {
        Self::Filesystem(value)
    }
}

impl From<S3Backend> for DispatchBackend {
    fn from(value: S3Backend) -> Self {
        Self::S3(value)
    }
}
