use crate::{
    model::{EngagementCreate, EngagementUpdate},
    service::EngagementService,
    Error,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use time::OffsetDateTime;
use tprm_common::{db::Database, model::Paginated};
use tprm_entity::{
    company, company_status::CompanyStatus, engagement_status::EngagementStatus,
    risk_level::RiskLevel,
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

fn annual_review(company_id: i32) -> EngagementCreate {
    EngagementCreate {
        company_id,
        name: "Annual review".into(),
        description: Some("Yearly onboarding re-check".into()),
        start_date: None,
        end_date: None,
        status: EngagementStatus::Active,
    }
}

#[test_log::test(tokio::test)]
async fn create_and_get_roundtrip() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let company = seed_company(&db, "Acme Corp").await?;
    let service = EngagementService::new(db);

    let created = service.create(annual_review(company.id)).await?;
    let fetched = service.get(created.id).await?;
    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Annual review");

    Ok(())
}

#[test_log::test(tokio::test)]
async fn create_for_missing_company_fails() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let service = EngagementService::new(db);

    let result = service.create(annual_review(42)).await;
    assert!(matches!(result, Err(Error::CompanyNotFound)));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn partial_update_preserves_unset_fields() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let company = seed_company(&db, "Acme Corp").await?;
    let service = EngagementService::new(db);

    let created = service.create(annual_review(company.id)).await?;
    let updated = service
        .update(
            created.id,
            EngagementUpdate {
                status: Some(EngagementStatus::Completed),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.status, EngagementStatus::Completed);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.description, created.description);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn list_filters_by_company() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let first = seed_company(&db, "Acme Corp").await?;
    let second = seed_company(&db, "Globex").await?;
    let service = EngagementService::new(db);

    service.create(annual_review(first.id)).await?;
    service.create(annual_review(first.id)).await?;
    service.create(annual_review(second.id)).await?;

    let all = service.list(None, Paginated::default()).await?;
    assert_eq!(all.total, 3);

    let scoped = service.list(Some(first.id), Paginated::default()).await?;
    assert_eq!(scoped.total, 2);
    assert!(scoped.items.iter().all(|e| e.company_id == first.id));

    let windowed = service
        .list(None, Paginated {
            limit: 2,
            offset: 2,
        })
        .await?;
    assert_eq!(windowed.total, 3);
    assert_eq!(windowed.items.len(), 1);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn missing_engagement_is_not_found() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let service = EngagementService::new(db);

    assert!(matches!(service.get(42).await, Err(Error::NotFound)));
    assert!(matches!(service.delete(42).await, Err(Error::NotFound)));

    Ok(())
}
