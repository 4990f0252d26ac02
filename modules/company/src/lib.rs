use actix_web::{body::BoxBody, HttpResponse, ResponseError};
use sea_orm::DbErr;
use tprm_common::error::ErrorInformation;

pub mod endpoints;
pub mod model;
pub mod service;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("company not found")]
    NotFound,
    #[error("contact not found")]
    ContactNotFound,
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::NotFound | Self::ContactNotFound => {
                HttpResponse::NotFound().json(ErrorInformation::new("NotFound", self))
            }
            Self::Validation(_) => {
                HttpResponse::BadRequest().json(ErrorInformation::new("Validation", self))
            }
            Self::Conflict(_) => {
                HttpResponse::BadRequest().json(ErrorInformation::new("Conflict", self))
            }
            err => HttpResponse::InternalServerError().json(ErrorInformation::internal(err)),
        }
    }
}
