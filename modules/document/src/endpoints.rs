use crate::{
    model::{ConfirmUpload, DocumentDetails, DownloadHandle, UploadHandle, UploadRequest},
    service::{
        documents::{DOWNLOAD_URL_EXPIRY_SECS, UPLOAD_URL_EXPIRY_SECS},
        BlobMetadata, DispatchBackend, DocumentService,
    },
    Error,
};
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tprm_common::{
    db::Database,
    model::{Paginated, PaginatedResults},
};
use tprm_entity::document_type::DocumentType;
use tprm_module_auth::Authenticated;
use utoipa::{IntoParams, OpenApi};

pub fn configure(config: &mut web::ServiceConfig, db: Database, backend: DispatchBackend) {
    let service = DocumentService::new(db, backend);
    config.app_data(web::Data::new(service)).service(
        web::scope("/api/v1/files")
            .service(upload_url)
            .service(confirm_upload)
            .service(download)
            .service(by_company)
            .service(metadata)
            .service(delete),
    );
}

#[derive(OpenApi)]
#[openapi(
    paths(upload_url, confirm_upload, download, by_company, metadata, delete),
    components(schemas(
        UploadRequest,
        UploadHandle,
        ConfirmUpload,
        DownloadHandle,
        DocumentDetails,
        BlobMetadata,
    ))
)]
pub struct ApiDoc;

#[utoipa::path(
    tag = "document",
    context_path = "/api/v1/files",
    request_body = UploadRequest,
    responses(
        (status = 200, description = "Upload handle for the new document", body = UploadHandle),
        (status = 400, description = "Content type not allowed"),
        (status = 404, description = "No such company"),
    ),
)]
#[post("/upload-url")]
async fn upload_url(
    service: web::Data<DocumentService>,
    web::Json(request): web::Json<UploadRequest>,
    auth: Authenticated,
) -> Result<impl Responder, Error> {
    let uploaded_by = service.user_id(&auth.0.sub).await?;
    let (model, upload_url) = service.request_upload(request, uploaded_by).await?;

    Ok(HttpResponse::Ok().json(UploadHandle {
        document_id: model.id,
        upload_url,
        expires_in: UPLOAD_URL_EXPIRY_SECS,
    }))
}

#[utoipa::path(
    tag = "document",
    context_path = "/api/v1/files",
    params(("document_id", Path, description = "ID of the document")),
    request_body = ConfirmUpload,
    responses(
        (status = 200, description = "The document is now active", body = DocumentDetails),
        (status = 400, description = "Not pending, or the object is missing from storage"),
        (status = 404, description = "No such document"),
    ),
)]
#[post("/confirm-upload/{document_id}")]
async fn confirm_upload(
    service: web::Data<DocumentService>,
    document_id: web::Path<i32>,
    web::Json(request): web::Json<ConfirmUpload>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.confirm_upload(*document_id, request.file_size).await?;
    Ok(HttpResponse::Ok().json(DocumentDetails::from(model)))
}

#[utoipa::path(
    tag = "document",
    context_path = "/api/v1/files",
    params(("document_id", Path, description = "ID of the document")),
    responses(
        (status = 200, description = "Download handle", body = DownloadHandle),
        (status = 404, description = "No such document"),
    ),
)]
#[get("/download/{document_id}")]
async fn download(
    service: web::Data<DocumentService>,
    document_id: web::Path<i32>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let download_url = service.download_url(*document_id).await?;
    Ok(HttpResponse::Ok().json(DownloadHandle {
        document_id: *document_id,
        download_url,
        expires_in: DOWNLOAD_URL_EXPIRY_SECS,
    }))
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
struct ListFilter {
    /// Restrict to one document type.
    document_type: Option<DocumentType>,
}

#[utoipa::path(
    tag = "document",
    context_path = "/api/v1/files",
    params(
        ("company_id", Path, description = "ID of the company"),
        ListFilter,
        Paginated,
    ),
    responses(
        (status = 200, description = "Documents of the company", body = inline(PaginatedResults<DocumentDetails>)),
    ),
)]
#[get("/company/{company_id}")]
async fn by_company(
    service: web::Data<DocumentService>,
    company_id: web::Path<i32>,
    web::Query(filter): web::Query<ListFilter>,
    web::Query(paginated): web::Query<Paginated>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let result = service
        .list(*company_id, filter.document_type, paginated)
        .await?;
    Ok(HttpResponse::Ok().json(PaginatedResults {
        items: result
            .items
            .into_iter()
            .map(DocumentDetails::from)
            .collect::<Vec<_>>(),
        total: result.total,
    }))
}

#[utoipa::path(
    tag = "document",
    context_path = "/api/v1/files",
    params(("document_id", Path, description = "ID of the document")),
    responses(
        (status = 200, description = "Blob metadata from the store", body = BlobMetadata),
        (status = 400, description = "The backing object is missing"),
        (status = 404, description = "No such document"),
    ),
)]
#[get("/{document_id}/metadata")]
async fn metadata(
    service: web::Data<DocumentService>,
    document_id: web::Path<i32>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let metadata = service.metadata(*document_id).await?;
    Ok(HttpResponse::Ok().json(metadata))
}

#[utoipa::path(
    tag = "document",
    context_path = "/api/v1/files",
    params(("document_id", Path, description = "ID of the document")),
    responses(
        (status = 200, description = "The document was soft-deleted"),
        (status = 404, description = "No such document"),
    ),
)]
#[delete("/{document_id}")]
async fn delete(
    service: web::Data<DocumentService>,
    document_id: web::Path<i32>,
    auth: Authenticated,
) -> Result<impl Responder, Error> {
    let user_id = service.user_id(&auth.0.sub).await?;
    service.delete(*document_id, user_id).await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod test;
