use crate::Error;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tprm_entity::{
    due_diligence_request, due_diligence_status::DueDiligenceStatus, risk_level::RiskLevel,
};
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct DueDiligenceCreate {
    pub company_id: i32,
    pub request_details: String,
    #[serde(default = "default::status")]
    pub status: DueDiligenceStatus,
    #[serde(default = "default::priority")]
    pub priority: RiskLevel,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub due_date: Option<OffsetDateTime>,
    #[serde(default)]
    pub requester_id: Option<i32>,
    #[serde(default)]
    pub assignee_id: Option<i32>,
}

mod default {
    use super::*;

    pub(super) fn status() -> DueDiligenceStatus {
        DueDiligenceStatus::Pending
    }

    pub(super) fn priority() -> RiskLevel {
        RiskLevel::Medium
    }
}

impl DueDiligenceCreate {
    pub fn validate(&self) -> Result<(), Error> {
        if self.request_details.trim().is_empty() {
            return Err(Error::Validation("request_details must not be empty".into()));
        }
        Ok(())
    }
}

/// Partial update. Absent fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct DueDiligenceUpdate {
    pub request_details: Option<String>,
    pub status: Option<DueDiligenceStatus>,
    pub priority: Option<RiskLevel>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub due_date: Option<OffsetDateTime>,
    pub requester_id: Option<i32>,
    pub assignee_id: Option<i32>,
}

impl DueDiligenceUpdate {
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(request_details) = &self.request_details {
            if request_details.trim().is_empty() {
                return Err(Error::Validation("request_details must not be empty".into()));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DueDiligenceDetails {
    pub id: i32,
    pub company_id: i32,
    pub request_details: String,
    #[serde(with = "time::serde::rfc3339")]
    pub request_date: OffsetDateTime,
    pub status: DueDiligenceStatus,
    pub priority: RiskLevel,
    #[serde(with = "time::serde::rfc3339::option")]
    pub due_date: Option<OffsetDateTime>,
    pub requester_id: Option<i32>,
    pub assignee_id: Option<i32>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<due_diligence_request::Model> for DueDiligenceDetails {
    fn from(value: due_diligence_request::Model) -> Self {
        Self {
            id: value.id,
            company_id: value.company_id,
            request_details: value.request_details,
            request_date: value.request_date,
            status: value.status,
            priority: value.priority,
            due_date: value.due_date,
            requester_id: value.requester_id,
            assignee_id: value.assignee_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
