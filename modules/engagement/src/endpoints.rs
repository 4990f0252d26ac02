use crate::{
    model::{EngagementCreate, EngagementDetails, EngagementUpdate},
    service::EngagementService,
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
    let service = EngagementService::new(db);
    config.app_data(web::Data::new(service)).service(
        web::scope("/api/v1/engagements")
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
    components(schemas(EngagementCreate, EngagementUpdate, EngagementDetails))
)]
pub struct ApiDoc;

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
struct ListFilter {
    /// Restrict to engagements of one company.
    company_id: Option<i32>,
}

#[utoipa::path(
    tag = "engagement",
    context_path = "/api/v1/engagements",
    params(ListFilter, Paginated),
    responses(
        (status = 200, description = "Matching engagements", body = inline(PaginatedResults<EngagementDetails>)),
    ),
)]
#[get("")]
async fn all(
    service: web::Data<EngagementService>,
    web::Query(filter): web::Query<ListFilter>,
    web::Query(paginated): web::Query<Paginated>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let result = service.list(filter.company_id, paginated).await?;
    Ok(HttpResponse::Ok().json(PaginatedResults {
        items: result
            .items
            .into_iter()
            .map(EngagementDetails::from)
            .collect::<Vec<_>>(),
        total: result.total,
    }))
}

#[utoipa::path(
    tag = "engagement",
    context_path = "/api/v1/engagements",
    request_body = EngagementCreate,
    responses(
        (status = 201, description = "The created engagement", body = EngagementDetails),
        (status = 404, description = "No such company"),
    ),
)]
#[post("")]
async fn create(
    service: web::Data<EngagementService>,
    web::Json(request): web::Json<EngagementCreate>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.create(request).await?;
    Ok(HttpResponse::Created().json(EngagementDetails::from(model)))
}

#[utoipa::path(
    tag = "engagement",
    context_path = "/api/v1/engagements",
    params(("id", Path, description = "ID of the engagement")),
    responses(
        (status = 200, description = "The engagement", body = EngagementDetails),
        (status = 404, description = "No such engagement"),
    ),
)]
#[get("/{id}")]
async fn get(
    service: web::Data<EngagementService>,
    id: web::Path<i32>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.get(*id).await?;
    Ok(HttpResponse::Ok().json(EngagementDetails::from(model)))
}

#[utoipa::path(
    tag = "engagement",
    context_path = "/api/v1/engagements",
    params(("id", Path, description = "ID of the engagement")),
    request_body = EngagementUpdate,
    responses(
        (status = 200, description = "The updated engagement", body = EngagementDetails),
        (status = 404, description = "No such engagement"),
    ),
)]
#[put("/{id}")]
async fn update(
    service: web::Data<EngagementService>,
    id: web::Path<i32>,
    web::Json(request): web::Json<EngagementUpdate>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.update(*id, request).await?;
    Ok(HttpResponse::Ok().json(EngagementDetails::from(model)))
}

#[utoipa::path(
    tag = "engagement",
    context_path = "/api/v1/engagements",
    params(("id", Path, description = "ID of the engagement")),
    responses(
        (status = 200, description = "The engagement was removed"),
        (status = 404, description = "No such engagement"),
    ),
)]
#[delete("/{id}")]
async fn delete(
    service: web::Data<EngagementService>,
    id: web::Path<i32>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    service.delete(*id).await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod test;
