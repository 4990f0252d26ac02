pub mod dispatch;
pub mod documents;
pub mod fs;
pub mod s3;

pub use dispatch::DispatchBackend;
pub use documents::DocumentService;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use utoipa::ToSchema;

/// What the backing store knows about an object, independent of the
/// document row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BlobMetadata {
    pub content_type: Option<String>,
    pub content_length: Option<i64>,
    pub last_modified: Option<String>,
    pub etag: Option<String>,
}

/// A store handing out time-limited capability URLs instead of streaming
/// content through the application.
pub trait StorageBackend {
    type Error: Debug;

    /// A URL the client can PUT the object to, valid for `expires_secs`.
    fn upload_url(
        &self,
        key: &str,
        expires_secs: u32,
    ) -> impl std::future::Future<Output = Result<String, Self::Error>>;

    /// A URL the client can GET the object from, valid for `expires_secs`.
    fn download_url(
        &self,
        key: &str,
        expires_secs: u32,
    ) -> impl std::future::Future<Output = Result<String, Self::Error>>;

    /// Does the object exist in the store?
    fn exists(&self, key: &str) -> impl std::future::Future<Output = Result<bool, Self::Error>>;

    /// Metadata of the object, [`None`] if it does not exist.
    fn metadata(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<BlobMetadata>, Self::Error>>;
}
