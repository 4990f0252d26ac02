use actix_web::{body::BoxBody, HttpResponse, ResponseError};
use sea_orm::DbErr;
use tprm_common::error::ErrorInformation;

pub mod endpoints;
pub mod model;
pub mod service;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("due diligence request not found")]
    NotFound,
    #[error("company not found")]
    CompanyNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("{0}")]
    Validation(String),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::NotFound | Self::CompanyNotFound | Self::UserNotFound => {
                HttpResponse::NotFound().json(ErrorInformation::new("NotFound", self))
            }
            Self::Validation(_) => {
                HttpResponse::BadRequest().json(ErrorInformation::new("Validation", self))
            }
            err => HttpResponse::InternalServerError().json(ErrorInformation::internal(err)),
        }
    }
}
