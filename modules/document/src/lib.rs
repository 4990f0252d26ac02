use actix_web::{body::BoxBody, HttpResponse, ResponseError};
use sea_orm::DbErr;
use tprm_common::error::ErrorInformation;

pub mod config;
pub mod endpoints;
pub mod model;
pub mod service;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("document not found")]
    NotFound,
    #[error("company not found")]
    CompanyNotFound,
    #[error("{0}")]
    Validation(String),
    #[error("invalid document state: {0}")]
    InvalidTransition(String),
    #[error("object '{0}' does not exist in storage")]
    ObjectMissing(String),
    #[error("storage backend error: {0}")]
    Storage(#[source] anyhow::Error),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error(transparent)]
    Audit(#[from] tprm_module_audit::Error),
}

impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::NotFound | Self::CompanyNotFound => {
                HttpResponse::NotFound().json(ErrorInformation::new("NotFound", self))
            }
            Self::Validation(_) => {
                HttpResponse::BadRequest().json(ErrorInformation::new("Validation", self))
            }
            Self::InvalidTransition(_) => {
                HttpResponse::BadRequest().json(ErrorInformation::new("InvalidTransition", self))
            }
            // the caller can fix this one by actually uploading, so it is a
            // client error rather than a backend failure
            Self::ObjectMissing(_) => {
                HttpResponse::BadRequest().json(ErrorInformation::new("Storage", self))
            }
            err => HttpResponse::InternalServerError().json(ErrorInformation::internal(err)),
        }
    }
}
