use crate::configure;
use actix_web::{http::header, test, App};
use serde_json::{json, Value};
use tprm_common::{config::AuthConfig, db::Database};
use tprm_module_auth::service::AuthService;
use tprm_module_document::service::{fs::FileSystemBackend, DispatchBackend};

async fn parts() -> anyhow::Result<(Database, AuthService, DispatchBackend, tempfile::TempDir)> {
    let db = Database::memory().await?;
    let dir = tempfile::tempdir()?;
    let backend = FileSystemBackend::new(dir.path()).await?.into();
    let auth = AuthService::new(
        db.clone(),
        AuthConfig {
            secret: "test-secret".into(),
            token_expiry_minutes: 30,
        },
    );
    Ok((db, auth, backend, dir))
}

#[test_log::test(actix_web::test)]
async fn health_is_public() -> anyhow::Result<()> {
    let (db, auth, backend, _dir) = parts().await?;
    let app =
        test::init_service(App::new().configure(|svc| configure(svc, db, auth, backend))).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");

    Ok(())
}

/// The full bootstrap path through the assembled app: create the first user
/// over the public endpoint, log in, and use the token against a protected
/// endpoint.
#[test_log::test(actix_web::test)]
async fn bootstrap_user_login_and_first_company() -> anyhow::Result<()> {
    let (db, auth, backend, _dir) = parts().await?;
    let app =
        test::init_service(App::new().configure(|svc| configure(svc, db, auth, backend))).await;

    // user creation is open so the system can be bootstrapped
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({
                "username": "admin",
                "email": "admin@example.com",
                "password": "correct horse battery staple",
                "role": "ADMIN",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);

    // a protected endpoint without a token is rejected
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/companies").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({
                "username": "admin",
                "password": "correct horse battery staple",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let token: Value = test::read_body_json(resp).await;
    let bearer = format!("Bearer {}", token["access_token"].as_str().unwrap());

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/companies")
            .insert_header((header::AUTHORIZATION, bearer.clone()))
            .set_json(json!({"name": "Acme Corp"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);
    let company: Value = test::read_body_json(resp).await;
    let company_id = company["id"].as_i64().unwrap();

    // no assessments yet, so no vendor risk score
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/scoring/vendor/{company_id}"))
            .insert_header((header::AUTHORIZATION, bearer))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);

    Ok(())
}
