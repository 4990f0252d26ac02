use crate::{
    model::UploadRequest,
    service::{BlobMetadata, DispatchBackend, StorageBackend},
    Error,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use time::OffsetDateTime;
use tprm_common::{
    db::Database,
    model::{Paginated, PaginatedResults},
};
use tprm_entity::{
    company, document, document_status::DocumentStatus, document_type::DocumentType, user,
};
use tprm_module_audit::service::{AuditEntry, AuditService};
use uuid::Uuid;

/// Upload URLs are short-lived; the client is expected to PUT immediately.
pub const UPLOAD_URL_EXPIRY_SECS: u32 = 60 * 60;
/// Download URLs can be embedded in reports, so they live longer.
pub const DOWNLOAD_URL_EXPIRY_SECS: u32 = 24 * 60 * 60;

const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "text/plain",
    "text/csv",
];

/// Two-phase document upload against an external blob store.
#[derive(Clone, Debug)]
pub struct DocumentService {
    db: Database,
    backend: DispatchBackend,
    audit: AuditService,
}

impl DocumentService {
    pub fn new(db: Database, backend: DispatchBackend) -> Self {
        let audit = AuditService::new(db.clone());
        Self { db, backend, audit }
    }

    /// Map a token subject back to the user id recorded as the uploader.
    pub async fn user_id(&self, username: &str) -> Result<Option<i32>, Error> {
        Ok(user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?
            .map(|user| user.id))
    }

    /// Strip any path components a client smuggled into the file name.
    fn sanitize(file_name: &str) -> &str {
        file_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(file_name)
    }

    /// Phase one: allocate a `PENDING` row under a fresh storage key and hand
    /// out a write-capable URL.
    pub async fn request_upload(
        &self,
        request: UploadRequest,
        uploaded_by: Option<i32>,
    ) -> Result<(document::Model, String), Error> {
        if !ALLOWED_CONTENT_TYPES.contains(&request.content_type.as_str()) {
            return Err(Error::Validation(format!(
                "content type '{}' is not allowed",
                request.content_type
            )));
        }

        let file_name = Self::sanitize(&request.file_name);
        if file_name.is_empty() {
            return Err(Error::Validation("file_name must not be empty".into()));
        }

        if company::Entity::find_by_id(request.company_id)
            .count(&self.db)
            .await?
            == 0
        {
            return Err(Error::CompanyNotFound);
        }

        let blob_name = format!("{}/{}-{}", request.company_id, Uuid::new_v4(), file_name);
        let upload_url = self
            .backend
            .upload_url(&blob_name, UPLOAD_URL_EXPIRY_SECS)
            .await
            .map_err(Error::Storage)?;

        let model = document::ActiveModel {
            company_id: Set(request.company_id),
            file_name: Set(file_name.to_string()),
            original_name: Set(request.file_name.clone()),
            blob_name: Set(blob_name),
            content_type: Set(request.content_type),
            file_size: Set(0),
            document_type: Set(request.document_type),
            status: Set(DocumentStatus::Pending),
            upload_date: Set(None),
            uploaded_by: Set(uploaded_by),
            metadata: Set(request.metadata),
            created_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok((model, upload_url))
    }

    /// Phase two: verify the object actually landed in the store, then flip
    /// the row to `ACTIVE`.
    ///
    /// The row stays `PENDING` if the object is missing.
    pub async fn confirm_upload(&self, id: i32, file_size: i64) -> Result<document::Model, Error> {
        let current = document::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(Error::NotFound)?;

        if current.status != DocumentStatus::Pending {
            return Err(Error::InvalidTransition(format!(
                "cannot confirm a document in status {}",
                current.status
            )));
        }

        if !self
            .backend
            .exists(&current.blob_name)
            .await
            .map_err(Error::Storage)?
        {
            return Err(Error::ObjectMissing(current.blob_name));
        }

        let uploaded_by = current.uploaded_by;
        let mut active: document::ActiveModel = current.into();
        active.status = Set(DocumentStatus::Active);
        active.file_size = Set(file_size);
        active.upload_date = Set(Some(OffsetDateTime::now_utc()));
        let model = active.update(&self.db).await?;

        self.audit
            .record(AuditEntry {
                user_id: uploaded_by,
                action: "UPLOAD".into(),
                resource_type: "document".into(),
                resource_id: Some(model.id),
                ..Default::default()
            })
            .await?;

        Ok(model)
    }

    /// A read-capable URL for an `ACTIVE` or still-`PENDING` document.
    /// Deleted documents are gone from the caller's point of view.
    pub async fn download_url(&self, id: i32) -> Result<String, Error> {
        let current = self.get(id).await?;

        self.backend
            .download_url(&current.blob_name, DOWNLOAD_URL_EXPIRY_SECS)
            .await
            .map_err(Error::Storage)
    }

    /// Blob metadata straight from the backing store.
    pub async fn metadata(&self, id: i32) -> Result<BlobMetadata, Error> {
        let current = self.get(id).await?;

        self.backend
            .metadata(&current.blob_name)
            .await
            .map_err(Error::Storage)?
            .ok_or(Error::ObjectMissing(current.blob_name))
    }

    pub async fn get(&self, id: i32) -> Result<document::Model, Error> {
        let current = document::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(Error::NotFound)?;

        if current.status == DocumentStatus::Deleted {
            return Err(Error::NotFound);
        }
        Ok(current)
    }

    pub async fn list(
        &self,
        company_id: i32,
        document_type: Option<DocumentType>,
        paginated: Paginated,
    ) -> Result<PaginatedResults<document::Model>, Error> {
        let mut query =
            document::Entity::find().filter(document::Column::CompanyId.eq(company_id));
        if let Some(document_type) = document_type {
            query = query.filter(document::Column::DocumentType.eq(document_type));
        }

        let total = query.clone().count(&self.db).await?;
        let items = query
            .order_by_asc(document::Column::Id)
            .limit(paginated.limit)
            .offset(paginated.offset)
            .all(&self.db)
            .await?;

        Ok(PaginatedResults { items, total })
    }

    /// Soft delete: the row survives in `DELETED` status, the blob is left in
    /// place.
    pub async fn delete(&self, id: i32, user_id: Option<i32>) -> Result<(), Error> {
        let current = self.get(id).await?;

        let mut active: document::ActiveModel = current.into();
        active.status = Set(DocumentStatus::Deleted);
        let model = active.update(&self.db).await?;

        self.audit
            .record(AuditEntry {
                user_id,
                action: "DELETE".into(),
                resource_type: "document".into(),
                resource_id: Some(model.id),
                ..Default::default()
            })
            .await?;

        Ok(())
    }
}
