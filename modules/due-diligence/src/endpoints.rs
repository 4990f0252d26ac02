use crate::{
    model::{DueDiligenceCreate, DueDiligenceDetails, DueDiligenceUpdate},
    service::DueDiligenceService,
    Error,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tprm_common::{
    db::Database,
    model::{Paginated, PaginatedResults},
};
use tprm_module_auth::Authenticated;
use utoipa::{IntoParams, OpenApi};

pub fn configure(config: &mut web::ServiceConfig, db: Database) {
    let service = DueDiligenceService::new(db);
    config.app_data(web::Data::new(service)).service(
        web::scope("/api/v1/due_diligence")
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
    components(schemas(DueDiligenceCreate, DueDiligenceUpdate, DueDiligenceDetails))
)]
pub struct ApiDoc;

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
struct ListFilter {
    /// Restrict to requests for one company.
    company_id: Option<i32>,
}

#[utoipa::path(
    tag = "due_diligence",
    context_path = "/api/v1/due_diligence",
    params(ListFilter, Paginated),
    responses(
        (status = 200, description = "Matching requests", body = inline(PaginatedResults<DueDiligenceDetails>)),
    ),
)]
#[get("")]
async fn all(
    service: web::Data<DueDiligenceService>,
    web::Query(filter): web::Query<ListFilter>,
    web::Query(paginated): web::Query<Paginated>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let result = service.list(filter.company_id, paginated).await?;
    Ok(HttpResponse::Ok().json(PaginatedResults {
        items: result
            .items
            .into_iter()
            .map(DueDiligenceDetails::from)
            .collect::<Vec<_>>(),
        total: result.total,
    }))
}

#[utoipa::path(
    tag = "due_diligence",
    context_path = "/api/v1/due_diligence",
    request_body = DueDiligenceCreate,
    responses(
        (status = 201, description = "The created request", body = DueDiligenceDetails),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "No such company or user"),
    ),
)]
#[post("")]
async fn create(
    service: web::Data<DueDiligenceService>,
    web::Json(request): web::Json<DueDiligenceCreate>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.create(request).await?;
    Ok(HttpResponse::Created().json(DueDiligenceDetails::from(model)))
}

#[utoipa::path(
    tag = "due_diligence",
    context_path = "/api/v1/due_diligence",
    params(("id", Path, description = "ID of the request")),
    responses(
        (status = 200, description = "The request", body = DueDiligenceDetails),
        (status = 404, description = "No such request"),
    ),
)]
#[get("/{id}")]
async fn get(
    service: web::Data<DueDiligenceService>,
    id: web::Path<i32>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.get(*id).await?;
    Ok(HttpResponse::Ok().json(DueDiligenceDetails::from(model)))
}

#[utoipa::path(
    tag = "due_diligence",
    context_path = "/api/v1/due_diligence",
    params(("id", Path, description = "ID of the request")),
    request_body = DueDiligenceUpdate,
    responses(
        (status = 200, description = "The updated request", body = DueDiligenceDetails),
        (status = 404, description = "No such request"),
    ),
)]
#[put("/{id}")]
async fn update(
    service: web::Data<DueDiligenceService>,
    id: web::Path<i32>,
    web::Json(request): web::Json<DueDiligenceUpdate>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.update(*id, request).await?;
    Ok(HttpResponse::Ok().json(DueDiligenceDetails::from(model)))
}

#[utoipa::path(
    tag = "due_diligence",
    context_path = "/api/v1/due_diligence",
    params(("id", Path, description = "ID of the request")),
    responses(
        (status = 200, description = "The request was removed"),
        (status = 404, description = "No such request"),
    ),
)]
#[delete("/{id}")]
async fn delete(
    service: web::Data<DueDiligenceService>,
    id: web::Path<i32>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    service.delete(*id).await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod test;
