use actix_web::{body::BoxBody, http::header, HttpResponse, ResponseError};
use sea_orm::DbErr;
use tprm_common::error::ErrorInformation;

pub mod endpoints;
pub mod model;
pub mod password;
pub mod service;

mod extract;
pub use extract::Authenticated;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("missing bearer token")]
    MissingToken,
    #[error("token expired")]
    TokenExpired,
    #[error("invalid token: {0}")]
    TokenInvalid(String),
    #[error("crypto error: {0}")]
    Crypto(String),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error(transparent)]
    Audit(#[from] tprm_module_audit::Error),
}

impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::InvalidCredentials | Self::MissingToken | Self::TokenExpired
            | Self::TokenInvalid(_) => HttpResponse::Unauthorized()
                .insert_header((header::WWW_AUTHENTICATE, "Bearer"))
                .json(ErrorInformation::new("Unauthorized", self)),

            // Internal failures are logged with a correlation id and never
            // expose detail to the caller.
            err => HttpResponse::InternalServerError().json(ErrorInformation::internal(err)),
        }
    }
}
