use crate::{
    assessment_status::AssessmentStatus, assessment_type::AssessmentType, risk_level::RiskLevel,
};
use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

/// A third-party risk assessment.
///
/// `risk_score` stays unset until the assessment has actually been scored;
/// unscored assessments do not contribute to the vendor risk score.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assessment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    pub risk_score: Option<f64>,
    pub risk_level: Option<RiskLevel>,
    pub assessment_type: AssessmentType,
    pub date_assessed: OffsetDateTime,
    pub next_assessment_date: Option<OffsetDateTime>,
    pub status: AssessmentStatus,
    pub assessor_id: Option<i32>,
    pub notes: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id",
        on_delete = "Cascade"
    )]
    Company,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AssessorId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Assessor,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
