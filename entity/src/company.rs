use crate::{company_status::CompanyStatus, risk_level::RiskLevel};
use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

/// A third party under risk management.
///
/// The company is the root of the object graph: assessments, tasks,
/// due-diligence requests, documents and contacts are all removed with it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, indexed)]
    pub name: String,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub risk_tier: RiskLevel,
    pub status: CompanyStatus,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assessment::Entity")]
    Assessment,
    #[sea_orm(has_many = "super::company_contact::Entity")]
    Contact,
    #[sea_orm(has_many = "super::document::Entity")]
    Document,
    #[sea_orm(has_many = "super::due_diligence_request::Entity")]
    DueDiligenceRequest,
    #[sea_orm(has_many = "super::engagement::Entity")]
    Engagement,
    #[sea_orm(has_many = "super::task::Entity")]
    Task,
}

impl Related<super::assessment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessment.def()
    }
}

impl Related<super::company_contact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contact.def()
    }
}

impl Related<super::document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Document.def()
    }
}

impl Related<super::due_diligence_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DueDiligenceRequest.def()
    }
}

impl Related<super::engagement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Engagement.def()
    }
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
