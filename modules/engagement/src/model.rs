use crate::Error;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tprm_entity::{engagement, engagement_status::EngagementStatus};
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct EngagementCreate {
    pub company_id: i32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_date: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
    #[serde(default = "default::status")]
    pub status: EngagementStatus,
}

mod default {
    use super::*;

    pub(super) fn status() -> EngagementStatus {
        EngagementStatus::Active
    }
}

impl EngagementCreate {
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("name must not be empty".into()));
        }
        Ok(())
    }
}

/// Partial update. Absent fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct EngagementUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_date: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
    pub status: Option<EngagementStatus>,
}

impl EngagementUpdate {
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(Error::Validation("name must not be empty".into()));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EngagementDetails {
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub start_date: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
    pub status: EngagementStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<engagement::Model> for EngagementDetails {
    fn from(value: engagement::Model) -> Self {
        Self {
            id: value.id,
            company_id: value.company_id,
            name: value.name,
            description: value.description,
            start_date: value.start_date,
            end_date: value.end_date,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
