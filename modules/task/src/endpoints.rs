use crate::{
    model::{TaskCreate, TaskDetails, TaskUpdate},
    service::TaskService,
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
    let service = TaskService::new(db);
    config.app_data(web::Data::new(service)).service(
        web::scope("/api/v1/tasks")
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
    components(schemas(TaskCreate, TaskUpdate, TaskDetails))
)]
pub struct ApiDoc;

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
struct ListFilter {
    /// Restrict to tasks of one company.
    company_id: Option<i32>,
}

#[utoipa::path(
    tag = "task",
    context_path = "/api/v1/tasks",
    params(ListFilter, Paginated),
    responses(
        (status = 200, description = "Matching tasks", body = inline(PaginatedResults<TaskDetails>)),
    ),
)]
#[get("")]
async fn all(
    service: web::Data<TaskService>,
    web::Query(filter): web::Query<ListFilter>,
    web::Query(paginated): web::Query<Paginated>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let result = service.list(filter.company_id, paginated).await?;
    Ok(HttpResponse::Ok().json(PaginatedResults {
        items: result
            .items
            .into_iter()
            .map(TaskDetails::from)
            .collect::<Vec<_>>(),
        total: result.total,
    }))
}

#[utoipa::path(
    tag = "task",
    context_path = "/api/v1/tasks",
    request_body = TaskCreate,
    responses(
        (status = 201, description = "The created task", body = TaskDetails),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "No such company or assessment"),
    ),
)]
#[post("")]
async fn create(
    service: web::Data<TaskService>,
    web::Json(request): web::Json<TaskCreate>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.create(request).await?;
    Ok(HttpResponse::Created().json(TaskDetails::from(model)))
}

#[utoipa::path(
    tag = "task",
    context_path = "/api/v1/tasks",
    params(("id", Path, description = "ID of the task")),
    responses(
        (status = 200, description = "The task", body = TaskDetails),
        (status = 404, description = "No such task"),
    ),
)]
#[get("/{id}")]
async fn get(
    service: web::Data<TaskService>,
    id: web::Path<i32>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.get(*id).await?;
    Ok(HttpResponse::Ok().json(TaskDetails::from(model)))
}

#[utoipa::path(
    tag = "task",
    context_path = "/api/v1/tasks",
    params(("id", Path, description = "ID of the task")),
    request_body = TaskUpdate,
    responses(
        (status = 200, description = "The updated task", body = TaskDetails),
        (status = 404, description = "No such task"),
    ),
)]
#[put("/{id}")]
async fn update(
    service: web::Data<TaskService>,
    id: web::Path<i32>,
    web::Json(request): web::Json<TaskUpdate>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.update(*id, request).await?;
    Ok(HttpResponse::Ok().json(TaskDetails::from(model)))
}

#[utoipa::path(
    tag = "task",
    context_path = "/api/v1/tasks",
    params(("id", Path, description = "ID of the task")),
    responses(
        (status = 200, description = "The task was removed"),
        (status = 404, description = "No such task"),
    ),
)]
#[delete("/{id}")]
async fn delete(
    service: web::Data<TaskService>,
    id: web::Path<i32>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    service.delete(*id).await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod test;
