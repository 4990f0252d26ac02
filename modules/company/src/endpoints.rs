use crate::{
    model::{
        CompanyCreate, CompanyDetails, CompanyUpdate, ContactCreate, ContactDetails, ContactUpdate,
    },
    service::CompanyService,
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
    let service = CompanyService::new(db);
    config.app_data(web::Data::new(service)).service(
        web::scope("/api/v1/companies")
            .service(all)
            .service(create)
            .service(get)
            .service(update)
            .service(delete)
            .service(all_contacts)
            .service(create_contact)
            .service(update_contact)
            .service(delete_contact),
    );
}

#[derive(OpenApi)]
#[openapi(
    paths(
        all,
        create,
        get,
        update,
        delete,
        all_contacts,
        create_contact,
        update_contact,
        delete_contact
    ),
    components(schemas(
        CompanyCreate,
        CompanyUpdate,
        CompanyDetails,
        ContactCreate,
        ContactUpdate,
        ContactDetails,
    ))
)]
pub struct ApiDoc;

#[utoipa::path(
    tag = "company",
    context_path = "/api/v1/companies",
    params(Paginated),
    responses(
        (status = 200, description = "All companies", body = inline(PaginatedResults<CompanyDetails>)),
    ),
)]
#[get("")]
async fn all(
    service: web::Data<CompanyService>,
    web::Query(paginated): web::Query<Paginated>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let result = service.list(paginated).await?;
    Ok(HttpResponse::Ok().json(PaginatedResults {
        items: result
            .items
            .into_iter()
            .map(CompanyDetails::from)
            .collect::<Vec<_>>(),
        total: result.total,
    }))
}

#[utoipa::path(
    tag = "company",
    context_path = "/api/v1/companies",
    request_body = CompanyCreate,
    responses(
        (status = 201, description = "The created company", body = CompanyDetails),
        (status = 400, description = "Validation failure or duplicate name"),
    ),
)]
#[post("")]
async fn create(
    service: web::Data<CompanyService>,
    web::Json(request): web::Json<CompanyCreate>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.create(request).await?;
    Ok(HttpResponse::Created().json(CompanyDetails::from(model)))
}

#[utoipa::path(
    tag = "company",
    context_path = "/api/v1/companies",
    params(("id", Path, description = "ID of the company")),
    responses(
        (status = 200, description = "The company", body = CompanyDetails),
        (status = 404, description = "No such company"),
    ),
)]
#[get("/{id}")]
async fn get(
    service: web::Data<CompanyService>,
    id: web::Path<i32>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.get(*id).await?;
    Ok(HttpResponse::Ok().json(CompanyDetails::from(model)))
}

#[utoipa::path(
    tag = "company",
    context_path = "/api/v1/companies",
    params(("id", Path, description = "ID of the company")),
    request_body = CompanyUpdate,
    responses(
        (status = 200, description = "The updated company", body = CompanyDetails),
        (status = 404, description = "No such company"),
    ),
)]
#[put("/{id}")]
async fn update(
    service: web::Data<CompanyService>,
    id: web::Path<i32>,
    web::Json(request): web::Json<CompanyUpdate>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.update(*id, request).await?;
    Ok(HttpResponse::Ok().json(CompanyDetails::from(model)))
}

#[utoipa::path(
    tag = "company",
    context_path = "/api/v1/companies",
    params(("id", Path, description = "ID of the company")),
    responses(
        (status = 200, description = "The company and all its dependents were removed"),
        (status = 404, description = "No such company"),
    ),
)]
#[delete("/{id}")]
async fn delete(
    service: web::Data<CompanyService>,
    id: web::Path<i32>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    service.delete(*id).await?;
    Ok(HttpResponse::Ok().finish())
}

#[utoipa::path(
    tag = "company",
    context_path = "/api/v1/companies",
    params(("id", Path, description = "ID of the company")),
    responses(
        (status = 200, description = "Contacts of the company", body = [ContactDetails]),
        (status = 404, description = "No such company"),
    ),
)]
#[get("/{id}/contacts")]
async fn all_contacts(
    service: web::Data<CompanyService>,
    id: web::Path<i32>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let contacts = service.list_contacts(*id).await?;
    Ok(HttpResponse::Ok().json(
        contacts
            .into_iter()
            .map(ContactDetails::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    tag = "company",
    context_path = "/api/v1/companies",
    params(("id", Path, description = "ID of the company")),
    request_body = ContactCreate,
    responses(
        (status = 201, description = "The created contact", body = ContactDetails),
        (status = 404, description = "No such company"),
    ),
)]
#[post("/{id}/contacts")]
async fn create_contact(
    service: web::Data<CompanyService>,
    id: web::Path<i32>,
    web::Json(request): web::Json<ContactCreate>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let model = service.create_contact(*id, request).await?;
    Ok(HttpResponse::Created().json(ContactDetails::from(model)))
}

#[utoipa::path(
    tag = "company",
    context_path = "/api/v1/companies",
    params(
        ("id", Path, description = "ID of the company"),
        ("contact_id", Path, description = "ID of the contact"),
    ),
    request_body = ContactUpdate,
    responses(
        (status = 200, description = "The updated contact", body = ContactDetails),
        (status = 404, description = "No such contact"),
    ),
)]
#[put("/{id}/contacts/{contact_id}")]
async fn update_contact(
    service: web::Data<CompanyService>,
    path: web::Path<(i32, i32)>,
    web::Json(request): web::Json<ContactUpdate>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let (id, contact_id) = path.into_inner();
    let model = service.update_contact(id, contact_id, request).await?;
    Ok(HttpResponse::Ok().json(ContactDetails::from(model)))
}

#[utoipa::path(
    tag = "company",
    context_path = "/api/v1/companies",
    params(
        ("id", Path, description = "ID of the company"),
        ("contact_id", Path, description = "ID of the contact"),
    ),
    responses(
        (status = 200, description = "The contact was removed"),
        (status = 404, description = "No such contact"),
    ),
)]
#[delete("/{id}/contacts/{contact_id}")]
async fn delete_contact(
    service: web::Data<CompanyService>,
    path: web::Path<(i32, i32)>,
    _auth: Authenticated,
) -> Result<impl Responder, Error> {
    let (id, contact_id) = path.into_inner();
    service.delete_contact(id, contact_id).await?;
    Ok(HttpResponse::Ok().finish())
}
