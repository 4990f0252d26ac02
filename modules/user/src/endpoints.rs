use crate::{
    model::{UserCreate, UserDetails, UserUpdate},
    service::UserService,
    Error,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use tprm_common::{
    db::Database,
    model::{Paginated, PaginatedResults},
};
use tprm_module_auth::Authenticated;
use utoipa::OpenApi;

pub fn configure(config: &mut web::ServiceConfig, db: Database) {
    let service = UserService::new(db);
    config.app_data(web::Data::new(service)).service(
        web::scope("/api/v1/users")
            .service(all)
            .service(create)
            .service(get)
            .service(update)
            .service(delete),
    );
}

#[derive(OpenApi)]
#[openapi(
    paths(all, create, get, update, delete),
    components(schemas(UserCreate, UserUpdate, UserDetails))
)]
pub struct ApiDoc;

#[utoipa::path(
    tag = "user",
    context_path = "/api/v1/users",
    params(Paginated),
    responses(
        (status = 200, description = "All users", body = inline(PaginatedResults<UserDetails>)),
    ),
)]
#[get("")]
async fn all(
    service: web::Data<UserService>,
    web::Query(paginated): web::Query<Paginated>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let result = service.list(paginated).await?;
    Ok(HttpResponse::Ok().json(PaginatedResults {
        items: result
            .items
            .into_iter()
            .map(UserDetails::from)
            .collect::<Vec<_>>(),
        total: result.total,
    }))
}

/// Registration endpoint; deliberately usable without a token so the first
/// account can be bootstrapped.
#[utoipa::path(
    tag = "user",
    context_path = "/api/v1/users",
    request_body = UserCreate,
    responses(
        (status = 201, description = "The created user", body = UserDetails),
        (status = 400, description = "Validation failure or username/email taken"),
    ),
)]
#[post("")]
async fn create(
    service: web::Data<UserService>,
    web::Json(request): web::Json<UserCreate>,
) -> Result<impl Responder, Error> {
    let model = service.create(request).await?;
    Ok(HttpResponse::Created().json(UserDetails::from(model)))
}

#[utoipa::path(
    tag = "user",
    context_path = "/api/v1/users",
    params(("id", Path, description = "ID of the user")),
    responses(
        (status = 200, description = "The user", body = UserDetails),
        (status = 404, description = "No such user"),
    ),
)]
#[get("/{id}")]
async fn get(
    service: web::Data<UserService>,
    id: web::Path<i32>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.get(*id).await?;
    Ok(HttpResponse::Ok().json(UserDetails::from(model)))
}

#[utoipa::path(
    tag = "user",
    context_path = "/api/v1/users",
    params(("id", Path, description = "ID of the user")),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "The updated user", body = UserDetails),
        (status = 404, description = "No such user"),
    ),
)]
#[put("/{id}")]
async fn update(
    service: web::Data<UserService>,
    id: web::Path<i32>,
    web::Json(request): web::Json<UserUpdate>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.update(*id, request).await?;
    Ok(HttpResponse::Ok().json(UserDetails::from(model)))
}

#[utoipa::path(
    tag = "user",
    context_path = "/api/v1/users",
    params(("id", Path, description = "ID of the user")),
    responses(
        (status = 200, description = "The user was removed"),
        (status = 404, description = "No such user"),
    ),
)]
#[delete("/{id}")]
async fn delete(
    service: web::Data<UserService>,
    id: web::Path<i32>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    service.delete(*id).await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod test;
