use actix_web::{body::BoxBody, HttpResponse, ResponseError};
use sea_orm::DbErr;
use tprm_common::error::ErrorInformation;

pub mod endpoints;
pub mod model;
pub mod service;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("user not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Auth(#[from] tprm_module_auth::Error),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::NotFound => HttpResponse::NotFound().json(ErrorInformation::new("NotFound", self)),
            Self::Validation(_) => {
                HttpResponse::BadRequest().json(ErrorInformation::new("Validation", self))
            }
            Self::Conflict(_) => {
                HttpResponse::BadRequest().json(ErrorInformation::new("Conflict", self))
            }
            Self::Auth(err) => err.error_response(),
            err => HttpResponse::InternalServerError().json(ErrorInformation::internal(err)),
        }
    }
}
