use crate::{
    model::{DueDiligenceCreate, DueDiligenceUpdate},
    service::DueDiligenceService,
    Error,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use time::OffsetDateTime;
use tprm_common::db::Database;
use tprm_entity::{
    company, company_status::CompanyStatus, due_diligence_request,
    due_diligence_status::DueDiligenceStatus, risk_level::RiskLevel, user, user_role::UserRole,
};

async fn seed_company(db: &Database, name: &str) -> anyhow::Result<company::Model> {
    let now = OffsetDateTime::now_utc();
    Ok(company::ActiveModel {
        name: Set(name.into()),
        industry: Set(None),
        country: Set(None),
        risk_tier: Set(RiskLevel::Low),
        status: Set(CompanyStatus::Active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?)
}

async fn seed_user(db: &Database, username: &str) -> anyhow::Result<user::Model> {
    Ok(user::ActiveModel {
        username: Set(username.into()),
        email: Set(format!("{username}@example.com")),
        password: Set("$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$x".into()),
        full_name: Set(None),
        role: Set(UserRole::Approver),
        is_active: Set(true),
        last_login: Set(None),
        created_at: Set(OffsetDateTime::now_utc()),
        ..Default::default()
    }
    .insert(db)
    .await?)
}

fn soc2_request(company_id: i32) -> DueDiligenceCreate {
    DueDiligenceCreate {
        company_id,
        request_details: "verify SOC 2 scope covers all data centers".into(),
        status: DueDiligenceStatus::Pending,
        priority: RiskLevel::Medium,
        due_date: None,
        requester_id: None,
        assignee_id: None,
    }
}

#[test_log::test(tokio::test)]
async fn create_and_get_roundtrip() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let company = seed_company(&db, "Acme Corp").await?;
    let requester = seed_user(&db, "requester").await?;
    let service = DueDiligenceService::new(db);

    let created = service
        .create(DueDiligenceCreate {
            requester_id: Some(requester.id),
            ..soc2_request(company.id)
        })
        .await?;

    let fetched = service.get(created.id).await?;
    assert_eq!(fetched, created);
    assert_eq!(fetched.requester_id, Some(requester.id));
    assert_eq!(fetched.status, DueDiligenceStatus::Pending);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn unknown_references_are_rejected() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let company = seed_company(&db, "Acme Corp").await?;
    let service = DueDiligenceService::new(db);

    let result = service.create(soc2_request(42)).await;
    assert!(matches!(result, Err(Error::CompanyNotFound)));

    let result = service
        .create(DueDiligenceCreate {
            assignee_id: Some(42),
            ..soc2_request(company.id)
        })
        .await;
    assert!(matches!(result, Err(Error::UserNotFound)));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn partial_update_preserves_unset_fields() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let company = seed_company(&db, "Acme Corp").await?;
    let service = DueDiligenceService::new(db);

    let created = service.create(soc2_request(company.id)).await?;
    let updated = service
        .update(
            created.id,
            DueDiligenceUpdate {
                status: Some(DueDiligenceStatus::Approved),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.status, DueDiligenceStatus::Approved);
    assert_eq!(updated.priority, created.priority);
    assert_eq!(updated.request_details, created.request_details);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn deleting_the_requester_keeps_the_request() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let company = seed_company(&db, "Acme Corp").await?;
    let requester = seed_user(&db, "requester").await?;
    let service = DueDiligenceService::new(db.clone());

    let created = service
        .create(DueDiligenceCreate {
            requester_id: Some(requester.id),
            ..soc2_request(company.id)
        })
        .await?;

    user::Entity::delete_by_id(requester.id).exec(&db).await?;

    let fetched = service.get(created.id).await?;
    assert_eq!(fetched.requester_id, None);
    assert_eq!(
        due_diligence_request::Entity::find().all(&db).await?.len(),
        1
    );

    Ok(())
}

#[test_log::test(tokio::test)]
async fn missing_request_is_not_found() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let service = DueDiligenceService::new(db);

    assert!(matches!(service.get(42).await, Err(Error::NotFound)));
    assert!(matches!(service.delete(42).await, Err(Error::NotFound)));

    Ok(())
}
