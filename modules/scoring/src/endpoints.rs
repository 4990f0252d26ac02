use crate::{model::VendorRiskScore, service::ScoringService, Error};
use actix_web::{get, web, HttpResponse, Responder};
use tprm_common::db::Database;
use tprm_module_auth::Authenticated;
use utoipa::OpenApi;

pub fn configure(config: &mut web::ServiceConfig, db: Database) {
    let service = ScoringService::new(db);
    config
        .app_data(web::Data::new(service))
        .service(web::scope("/api/v1/scoring").service(vendor));
}

#[derive(OpenApi)]
#[openapi(paths(vendor), components(schemas(VendorRiskScore)))]
pub struct ApiDoc;

#[utoipa::path(
    tag = "scoring",
    context_path = "/api/v1/scoring",
    params(("company_id", Path, description = "ID of the company")),
    responses(
        (status = 200, description = "Aggregate vendor risk", body = VendorRiskScore),
        (status = 404, description = "No scored assessments for the company"),
    ),
)]
#[get("/vendor/{company_id}")]
async fn vendor(
    service: web::Data<ScoringService>,
    company_id: web::Path<i32>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let company_id = *company_id;
    let risk_score = service
        .calculate_vendor_risk_score(company_id)
        .await?
        .ok_or(Error::NoScore(company_id))?;

    Ok(HttpResponse::Ok().json(VendorRiskScore {
        company_id,
        risk_score,
    }))
}

#[cfg(test)]
mod test;
