use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "TPRM API",
    description = "Third-party risk management backend"
))]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();

    doc.merge(crate::endpoints::ApiDoc::openapi());
    doc.merge(tprm_module_auth::endpoints::ApiDoc::openapi());
    doc.merge(tprm_module_company::endpoints::ApiDoc::openapi());
    doc.merge(tprm_module_engagement::endpoints::ApiDoc::openapi());
    doc.merge(tprm_module_assessment::endpoints::ApiDoc::openapi());
    doc.merge(tprm_module_task::endpoints::ApiDoc::openapi());
    doc.merge(tprm_module_due_diligence::endpoints::ApiDoc::openapi());
    doc.merge(tprm_module_user::endpoints::ApiDoc::openapi());
    doc.merge(tprm_module_scoring::endpoints::ApiDoc::openapi());
    doc.merge(tprm_module_document::endpoints::ApiDoc::openapi());

    doc
}
