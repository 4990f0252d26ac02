use crate::Error;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tprm_entity::{risk_level::RiskLevel, task, task_status::TaskStatus};
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct TaskCreate {
    pub company_id: i32,
    #[serde(default)]
    pub assessment_id: Option<i32>,
    pub description: String,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub due_date: Option<OffsetDateTime>,
    #[serde(default = "default::status")]
    pub status: TaskStatus,
    #[serde(default = "default::priority")]
    pub priority: RiskLevel,
}

mod default {
    use super::*;

    pub(super) fn status() -> TaskStatus {
        TaskStatus::Pending
    }

    pub(super) fn priority() -> RiskLevel {
        RiskLevel::Medium
    }
}

impl TaskCreate {
    pub fn validate(&self) -> Result<(), Error> {
        if self.description.trim().is_empty() {
            return Err(Error::Validation("description must not be empty".into()));
        }
        Ok(())
    }
}

/// Partial update. Absent fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct TaskUpdate {
    pub assessment_id: Option<i32>,
    pub description: Option<String>,
    pub assigned_to: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub due_date: Option<OffsetDateTime>,
    pub status: Option<TaskStatus>,
    pub priority: Option<RiskLevel>,
}

impl TaskUpdate {
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(description) = &self.description {
            if description.trim().is_empty() {
                return Err(Error::Validation("description must not be empty".into()));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TaskDetails {
    pub id: i32,
    pub company_id: i32,
    pub assessment_id: Option<i32>,
    pub description: String,
    pub assigned_to: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub due_date: Option<OffsetDateTime>,
    pub status: TaskStatus,
    pub priority: RiskLevel,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<task::Model> for TaskDetails {
    fn from(value: task::Model) -> Self {
        Self {
            id: value.id,
            company_id: value.company_id,
            assessment_id: value.assessment_id,
            description: value.description,
            assigned_to: value.assigned_to,
            due_date: value.due_date,
            status: value.status,
            priority: value.priority,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
