use crate::Error;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tprm_entity::{user, user_role::UserRole};
use utoipa::ToSchema;

fn check_email(email: &str) -> Result<(), Error> {
    if !email.contains('@') {
        return Err(Error::Validation(format!("'{email}' is not an email address")));
    }
    Ok(())
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    /// Plaintext on the wire only; stored as an argon2 hash.
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default = "default::role")]
    pub role: UserRole,
    #[serde(default = "default::is_active")]
    pub is_active: bool,
}

mod default {
    use super::*;

    pub(super) fn role() -> UserRole {
        UserRole::User
    }

    pub(super) fn is_active() -> bool {
        true
    }
}

impl UserCreate {
    pub fn validate(&self) -> Result<(), Error> {
        if self.username.trim().is_empty() || self.username.len() > 50 {
            return Err(Error::Validation(
                "username must be between 1 and 50 characters".into(),
            ));
        }
        check_email(&self.email)?;
        if self.password.len() < 8 {
            return Err(Error::Validation(
                "password must be at least 8 characters".into(),
            ));
        }
        Ok(())
    }
}

/// Partial update. Absent fields are left untouched; the username is
/// immutable and password changes are not offered here.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

impl UserUpdate {
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(email) = &self.email {
            check_email(email)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDetails {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_login: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<user::Model> for UserDetails {
    fn from(value: user::Model) -> Self {
        Self {
            id: value.id,
            username: value.username,
            email: value.email,
            full_name: value.full_name,
            role: value.role,
            is_active: value.is_active,
            last_login: value.last_login,
            created_at: value.created_at,
        }
    }
}
