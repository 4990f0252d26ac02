use crate::{
    model::{AssessmentCreate, AssessmentDetails, AssessmentUpdate},
    service::AssessmentService,
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
    let service = AssessmentService::new(db);
    config.app_data(web::Data::new(service)).service(
        web::scope("/api/v1/assessments")
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
    components(schemas(AssessmentCreate, AssessmentUpdate, AssessmentDetails))
)]
pub struct ApiDoc;

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
struct ListFilter {
    /// Restrict to assessments of one company.
    company_id: Option<i32>,
}

#[utoipa::path(
    tag = "assessment",
    context_path = "/api/v1/assessments",
    params(ListFilter, Paginated),
    responses(
        (status = 200, description = "Matching assessments", body = inline(PaginatedResults<AssessmentDetails>)),
    ),
)]
#[get("")]
async fn all(
    service: web::Data<AssessmentService>,
    web::Query(filter): web::Query<ListFilter>,
    web::Query(paginated): web::Query<Paginated>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let result = service.list(filter.company_id, paginated).await?;
    Ok(HttpResponse::Ok().json(PaginatedResults {
        items: result
            .items
            .into_iter()
            .map(AssessmentDetails::from)
            .collect::<Vec<_>>(),
        total: result.total,
    }))
}

#[utoipa::path(
    tag = "assessment",
    context_path = "/api/v1/assessments",
    request_body = AssessmentCreate,
    responses(
        (status = 201, description = "The created assessment", body = AssessmentDetails),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "No such company or assessor"),
    ),
)]
#[post("")]
async fn create(
    service: web::Data<AssessmentService>,
    web::Json(request): web::Json<AssessmentCreate>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.create(request).await?;
    Ok(HttpResponse::Created().json(AssessmentDetails::from(model)))
}

#[utoipa::path(
    tag = "assessment",
    context_path = "/api/v1/assessments",
    params(("id", Path, description = "ID of the assessment")),
    responses(
        (status = 200, description = "The assessment", body = AssessmentDetails),
        (status = 404, description = "No such assessment"),
    ),
)]
#[get("/{id}")]
async fn get(
    service: web::Data<AssessmentService>,
    id: web::Path<i32>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.get(*id).await?;
    Ok(HttpResponse::Ok().json(AssessmentDetails::from(model)))
}

#[utoipa::path(
    tag = "assessment",
    context_path = "/api/v1/assessments",
    params(("id", Path, description = "ID of the assessment")),
    request_body = AssessmentUpdate,
    responses(
        (status = 200, description = "The updated assessment", body = AssessmentDetails),
        (status = 404, description = "No such assessment"),
    ),
)]
#[put("/{id}")]
async fn update(
    service: web::Data<AssessmentService>,
    id: web::Path<i32>,
    web::Json(request): web::Json<AssessmentUpdate>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.update(*id, request).await?;
    Ok(HttpResponse::Ok().json(AssessmentDetails::from(model)))
}

#[utoipa::path(
    tag = "assessment",
    context_path = "/api/v1/assessments",
    params(("id", Path, description = "ID of the assessment")),
    responses(
        (status = 200, description = "The assessment was removed"),
        (status = 404, description = "No such assessment"),
    ),
)]
#[delete("/{id}")]
async fn delete(
    service: web::Data<AssessmentService>,
    id: web::Path<i32>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    service.delete(*id).await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod test;
