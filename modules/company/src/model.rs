use crate::Error;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tprm_entity::{
    company, company_contact, company_status::CompanyStatus, risk_level::RiskLevel,
};
use utoipa::ToSchema;

/// Longest value accepted for any of the short string columns.
const MAX_NAME: usize = 255;

fn require_name(field: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{field} must not be empty")));
    }
    if value.len() > MAX_NAME {
        return Err(Error::Validation(format!(
            "{field} must be at most {MAX_NAME} characters"
        )));
    }
    Ok(())
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CompanyCreate {
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default = "default::risk_tier")]
    pub risk_tier: RiskLevel,
    #[serde(default = "default::status")]
    pub status: CompanyStatus,
}

mod default {
    use super::*;

    pub(super) fn risk_tier() -> RiskLevel {
        RiskLevel::Low
    }

    pub(super) fn status() -> CompanyStatus {
        CompanyStatus::Active
    }
}

impl CompanyCreate {
    pub fn validate(&self) -> Result<(), Error> {
        require_name("name", &self.name)
    }
}

/// Partial update. Absent fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CompanyUpdate {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub risk_tier: Option<RiskLevel>,
    pub status: Option<CompanyStatus>,
}

impl CompanyUpdate {
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(name) = &self.name {
            require_name("name", name)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompanyDetails {
    pub id: i32,
    pub name: String,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub risk_tier: RiskLevel,
    pub status: CompanyStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<company::Model> for CompanyDetails {
    fn from(value: company::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            industry: value.industry,
            country: value.country,
            risk_tier: value.risk_tier,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ContactCreate {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

impl ContactCreate {
    pub fn validate(&self) -> Result<(), Error> {
        require_name("name", &self.name)
    }
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub is_primary: Option<bool>,
}

impl ContactUpdate {
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(name) = &self.name {
            require_name("name", name)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactDetails {
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub is_primary: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<company_contact::Model> for ContactDetails {
    fn from(value: company_contact::Model) -> Self {
        Self {
            id: value.id,
            company_id: value.company_id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            role: value.role,
            is_primary: value.is_primary,
            created_at: value.created_at,
        }
    }
}
