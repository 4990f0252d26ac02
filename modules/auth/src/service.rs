use crate::{model::Claims, password, Error};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};
use time::OffsetDateTime;
use tprm_common::{config::AuthConfig, db::Database};
use tprm_entity::user;
use tprm_module_audit::service::{AuditEntry, AuditService};

/// Credential verification and token lifecycle.
#[derive(Clone)]
pub struct AuthService {
    db: Database,
    config: AuthConfig,
    audit: AuditService,
}

impl AuthService {
    pub fn new(db: Database, config: AuthConfig) -> Self {
        let audit = AuditService::new(db.clone());
        Self { db, config, audit }
    }

    /// Look up a user by username and verify the supplied password against
    /// the stored hash.
    ///
    /// Absent users, inactive users and bad passwords all collapse into the
    /// same [`Error::InvalidCredentials`] so the response does not reveal
    /// which part failed.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<user::Model, Error> {
        let user = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?
            .ok_or(Error::InvalidCredentials)?;

        if !user.is_active {
            return Err(Error::InvalidCredentials);
        }

        if !password::verify_password(password, &user.password)? {
            return Err(Error::InvalidCredentials);
        }

        Ok(user)
    }

    /// Issue a signed HS256 access token for the user.
    ///
    /// Returns the token together with its lifetime in seconds.
    pub fn issue_token(&self, user: &user::Model) -> Result<(String, i64), Error> {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let expires_in = self.config.token_expiry_minutes * 60;
        let claims = Claims {
            sub: user.username.clone(),
            role: user.role,
            iat: now,
            exp: now + expires_in,
        };

        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.secret.as_bytes()),
        )
        .map_err(|err| Error::Crypto(format!("token encode: {err}")))?;

        Ok((token, expires_in))
    }

    /// Verify signature, expiry and subject claim of a token.
    pub fn verify_token(&self, token: &str) -> Result<Claims, Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "exp"]);

        jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|err| match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => Error::TokenExpired,
            _ => Error::TokenInvalid(err.to_string()),
        })
    }

    /// Verify the token and load the user it refers to.
    pub async fn resolve_current_user(&self, token: &str) -> Result<user::Model, Error> {
        let claims = self.verify_token(token)?;

        user::Entity::find()
            .filter(user::Column::Username.eq(&claims.sub))
            .one(&self.db)
            .await?
            .ok_or(Error::InvalidCredentials)
    }

    /// Full credential exchange: authenticate, stamp `last_login`, append an
    /// audit record and issue a token.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<(user::Model, String, i64), Error> {
        let user = self.authenticate(username, password).await?;

        let mut active: user::ActiveModel = user.clone().into();
        active.last_login = Set(Some(OffsetDateTime::now_utc()));
        let user = active.update(&self.db).await?;

        self.audit
            .record(AuditEntry {
                user_id: Some(user.id),
                action: "LOGIN".into(),
                resource_type: "user".into(),
                resource_id: Some(user.id),
                ip_address,
                user_agent,
                ..Default::default()
            })
            .await?;

        let (token, expires_in) = self.issue_token(&user)?;
        Ok((user, token, expires_in))
    }
}
