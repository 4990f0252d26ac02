use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tprm_common::db::Database;
use utoipa::{OpenApi, ToSchema};

pub fn configure(config: &mut web::ServiceConfig, db: Database) {
    config.app_data(web::Data::new(db)).service(health);
}

#[derive(OpenApi)]
#[openapi(paths(health))]
pub struct ApiDoc;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
struct Health {
    status: &'static str,
}

#[utoipa::path(
    tag = "health",
    responses(
        (status = 200, description = "The service and its database are up", body = inline(Health)),
        (status = 503, description = "The database is unreachable"),
    ),
)]
#[get("/health")]
async fn health(db: web::Data<Database>) -> impl Responder {
    match db.ping().await {
        Ok(()) => HttpResponse::Ok().json(Health { status: "healthy" }),
        Err(err) => {
            log::warn!("health check failed: {err}");
            HttpResponse::ServiceUnavailable().json(Health {
                status: "unhealthy",
            })
        }
    }
}

#[cfg(test)]
mod test;
