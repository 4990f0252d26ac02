use crate::{model::Claims, service::AuthService, Error};
use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use std::future::{ready, Ready};

/// Extractor proving the request carried a valid bearer token.
///
/// Verification is purely local (signature and expiry); handlers that need
/// the full user row go through [`AuthService::resolve_current_user`].
#[derive(Clone, Debug)]
pub struct Authenticated(pub Claims);

fn bearer(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

impl FromRequest for Authenticated {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match req.app_data::<web::Data<AuthService>>() {
            Some(service) => match bearer(req) {
                Some(token) => service.verify_token(token).map(Authenticated),
                None => Err(Error::MissingToken),
            },
            None => Err(Error::TokenInvalid("authentication not configured".into())),
        };

        ready(result)
    }
}
