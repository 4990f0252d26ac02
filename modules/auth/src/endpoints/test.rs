use crate::{endpoints::configure, model::TokenResponse, password, service::AuthService, Error};
use actix_web::{http::header, test as actix_test, App};
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use time::OffsetDateTime;
use tprm_common::{config::AuthConfig, db::Database};
use tprm_entity::{user, user_role::UserRole};

fn test_config() -> AuthConfig {
    AuthConfig {
        secret: "test-secret".into(),
        token_expiry_minutes: 30,
    }
}

async fn seed_user(db: &Database, username: &str, plaintext: &str) -> anyhow::Result<user::Model> {
    let model = user::ActiveModel {
        username: Set(username.into()),
        email: Set(format!("{username}@example.com")),
        password: Set(password::hash_password(plaintext)?),
        full_name: Set(Some("Test User".into())),
        role: Set(UserRole::Assessor),
        is_active: Set(true),
        last_login: Set(None),
        created_at: Set(OffsetDateTime::now_utc()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(model)
}

#[test_log::test(tokio::test)]
async fn wrong_password_is_rejected() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    seed_user(&db, "alice", "correct horse").await?;

    let service = AuthService::new(db, test_config());
    let result = service.authenticate("alice", "battery staple").await;
    assert!(matches!(result, Err(Error::InvalidCredentials)));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn inactive_user_is_rejected() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let seeded = seed_user(&db, "bob", "pw").await?;

    let mut active: user::ActiveModel = seeded.into();
    active.is_active = Set(false);
    active.update(&db).await?;

    let service = AuthService::new(db, test_config());
    let result = service.authenticate("bob", "pw").await;
    assert!(matches!(result, Err(Error::InvalidCredentials)));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn token_roundtrip() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let user = seed_user(&db, "carol", "pw").await?;

    let service = AuthService::new(db, test_config());
    let (token, expires_in) = service.issue_token(&user)?;
    assert_eq!(expires_in, 30 * 60);

    let claims = service.verify_token(&token)?;
    assert_eq!(claims.sub, "carol");
    assert_eq!(claims.role, UserRole::Assessor);

    let resolved = service.resolve_current_user(&token).await?;
    assert_eq!(resolved.id, user.id);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn expired_token_is_rejected() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let user = seed_user(&db, "dave", "pw").await?;

    let config = AuthConfig {
        secret: "test-secret".into(),
        token_expiry_minutes: -1,
    };
    let service = AuthService::new(db, config);
    let (token, _) = service.issue_token(&user)?;

    let result = service.verify_token(&token);
    assert!(matches!(result, Err(Error::TokenExpired)));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn tampered_token_is_rejected() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let user = seed_user(&db, "erin", "pw").await?;

    let issuer = AuthService::new(db.clone(), test_config());
    let (token, _) = issuer.issue_token(&user)?;

    let other = AuthService::new(
        db,
        AuthConfig {
            secret: "a different secret".into(),
            token_expiry_minutes: 30,
        },
    );
    let result = other.verify_token(&token);
    assert!(matches!(result, Err(Error::TokenInvalid(_))));

    Ok(())
}

#[test_log::test(actix_web::test)]
async fn login_then_me() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    seed_user(&db, "frank", "pw").await?;

    let service = AuthService::new(db, test_config());
    let app = actix_test::init_service(
        App::new().configure(|config| configure(config, service.clone())),
    )
    .await;

    // bad credentials are a 401
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({"username": "frank", "password": "nope"}))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // good credentials return a usable token
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({"username": "frank", "password": "pw"}))
        .to_request();
    let token: TokenResponse = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(token.token_type, "bearer");

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header((
            header::AUTHORIZATION,
            format!("Bearer {}", token.access_token),
        ))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["username"], "frank");
    assert!(body.get("password").is_none());

    // no token at all is a 401
    let req = actix_test::TestRequest::get().uri("/api/v1/auth/me").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    Ok(())
}
