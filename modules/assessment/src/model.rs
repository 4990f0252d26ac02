use crate::Error;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tprm_entity::{
    assessment, assessment_status::AssessmentStatus, assessment_type::AssessmentType,
    risk_level::RiskLevel,
};
use utoipa::ToSchema;

fn check_score(risk_score: Option<f64>) -> Result<(), Error> {
    if let Some(score) = risk_score {
        if !(0.0..=100.0).contains(&score) {
            return Err(Error::Validation(format!(
                "risk_score must be within [0, 100], got {score}"
            )));
        }
    }
    Ok(())
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct AssessmentCreate {
    pub company_id: i32,
    pub assessment_type: AssessmentType,
    #[serde(default)]
    pub risk_score: Option<f64>,
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
    /// Defaults to "now" when absent.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_assessed: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub next_assessment_date: Option<OffsetDateTime>,
    #[serde(default = "default::status")]
    pub status: AssessmentStatus,
    #[serde(default)]
    pub assessor_id: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

mod default {
    use super::*;

    pub(super) fn status() -> AssessmentStatus {
        AssessmentStatus::Pending
    }
}

impl AssessmentCreate {
    pub fn validate(&self) -> Result<(), Error> {
        check_score(self.risk_score)
    }
}

/// Partial update. Absent fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct AssessmentUpdate {
    pub risk_score: Option<f64>,
    pub risk_level: Option<RiskLevel>,
    pub assessment_type: Option<AssessmentType>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_assessed: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub next_assessment_date: Option<OffsetDateTime>,
    pub status: Option<AssessmentStatus>,
    pub assessor_id: Option<i32>,
    pub notes: Option<String>,
}

impl AssessmentUpdate {
    pub fn validate(&self) -> Result<(), Error> {
        check_score(self.risk_score)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssessmentDetails {
    pub id: i32,
    pub company_id: i32,
    pub risk_score: Option<f64>,
    pub risk_level: Option<RiskLevel>,
    pub assessment_type: AssessmentType,
    #[serde(with = "time::serde::rfc3339")]
    pub date_assessed: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub next_assessment_date: Option<OffsetDateTime>,
    pub status: AssessmentStatus,
    pub assessor_id: Option<i32>,
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<assessment::Model> for AssessmentDetails {
    fn from(value: assessment::Model) -> Self {
        Self {
            id: value.id,
            company_id: value.company_id,
            risk_score: value.risk_score,
            risk_level: value.risk_level,
            assessment_type: value.assessment_type,
            date_assessed: value.date_assessed,
            next_assessment_date: value.next_assessment_date,
            status: value.status,
            assessor_id: value.assessor_id,
            notes: value.notes,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
