use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tprm_entity::{document, document_status::DocumentStatus, document_type::DocumentType};
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct UploadRequest {
    pub company_id: i32,
    pub file_name: String,
    pub content_type: String,
    #[serde(default = "default::document_type")]
    pub document_type: DocumentType,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

mod default {
    use super::*;

    pub(super) fn document_type() -> DocumentType {
        DocumentType::Other
    }
}

/// First phase of the upload: where to PUT the bytes, and the row awaiting
/// confirmation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UploadHandle {
    pub document_id: i32,
    pub upload_url: String,
    /// Lifetime of the URL in seconds.
    pub expires_in: u32,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ConfirmUpload {
    pub file_size: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DownloadHandle {
    pub document_id: i32,
    pub download_url: String,
    /// Lifetime of the URL in seconds.
    pub expires_in: u32,
}

/// Everything about a document except the storage key, which stays
/// server-side; access to the blob always goes through a handed-out URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DocumentDetails {
    pub id: i32,
    pub company_id: i32,
    pub file_name: String,
    pub original_name: String,
    pub content_type: String,
    pub file_size: i64,
    pub document_type: DocumentType,
    pub status: DocumentStatus,
    #[serde(with = "time::serde::rfc3339::option")]
    pub upload_date: Option<OffsetDateTime>,
    pub uploaded_by: Option<i32>,
    pub metadata: Option<serde_json::Value>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<document::Model> for DocumentDetails {
    fn from(value: document::Model) -> Self {
        Self {
            id: value.id,
            company_id: value.company_id,
            file_name: value.file_name,
            original_name: value.original_name,
            content_type: value.content_type,
            file_size: value.file_size,
            document_type: value.document_type,
            status: value.status,
            upload_date: value.upload_date,
            uploaded_by: value.uploaded_by,
            metadata: value.metadata,
            created_at: value.created_at,
        }
    }
}
