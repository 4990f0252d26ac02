use crate::{
    model::{CurrentUser, LoginRequest, TokenResponse},
    service::AuthService,
    Error,
};
use actix_web::{get, http::header, post, web, HttpRequest, HttpResponse, Responder};
use utoipa::OpenApi;

/// Mount the auth module.
///
/// The [`AuthService`] is registered as application data here, which also
/// makes it available to the [`Authenticated`] extractor in every other
/// module.
pub fn configure(config: &mut web::ServiceConfig, service: AuthService) {
    config.app_data(web::Data::new(service)).service(
        web::scope("/api/v1/auth")
            .service(token)
            .service(login)
            .service(me),
    );
}

#[derive(OpenApi)]
#[openapi(
    paths(token, login, me),
    components(schemas(LoginRequest, TokenResponse, CurrentUser))
)]
pub struct ApiDoc;

fn client_info(req: &HttpRequest) -> (Option<String>, Option<String>) {
    let ip = req
        .connection_info()
        .realip_remote_addr()
        .map(ToString::to_string);
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);
    (ip, user_agent)
}

#[utoipa::path(
    tag = "auth",
    context_path = "/api/v1/auth",
    responses(
        (status = 200, description = "Credential exchange succeeded", body = TokenResponse),
        (status = 401, description = "Invalid credentials"),
    ),
)]
#[post("/token")]
async fn token(
    service: web::Data<AuthService>,
    req: HttpRequest,
    web::Form(form): web::Form<LoginRequest>,
) -> Result<impl Responder, Error> {
    let (ip, agent) = client_info(&req);
    let (_, access_token, expires_in) = service
        .login(&form.username, &form.password, ip, agent)
        .await?;

    Ok(HttpResponse::Ok().json(TokenResponse {
        access_token,
        token_type: "bearer".into(),
        expires_in,
    }))
}

#[utoipa::path(
    tag = "auth",
    context_path = "/api/v1/auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credential exchange succeeded", body = TokenResponse),
        (status = 401, description = "Invalid credentials"),
    ),
)]
#[post("/login")]
async fn login(
    service: web::Data<AuthService>,
    req: HttpRequest,
    web::Json(body): web::Json<LoginRequest>,
) -> Result<impl Responder, Error> {
    let (ip, agent) = client_info(&req);
    let (_, access_token, expires_in) = service
        .login(&body.username, &body.password, ip, agent)
        .await?;

    Ok(HttpResponse::Ok().json(TokenResponse {
        access_token,
        token_type: "bearer".into(),
        expires_in,
    }))
}

#[utoipa::path(
    tag = "auth",
    context_path = "/api/v1/auth",
    responses(
        (status = 200, description = "The authenticated user", body = CurrentUser),
        (status = 401, description = "Missing or invalid token"),
    ),
)]
#[get("/me")]
async fn me(service: web::Data<AuthService>, req: HttpRequest) -> Result<impl Responder, Error> {
    let bearer = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(Error::MissingToken)?;

    let user = service.resolve_current_user(bearer).await?;
    Ok(HttpResponse::Ok().json(CurrentUser::from(user)))
}

#[cfg(test)]
mod test;
