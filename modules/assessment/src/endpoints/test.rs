use crate::{
    model::{AssessmentCreate, AssessmentUpdate},
    service::AssessmentService,
    Error,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use time::OffsetDateTime;
use tprm_common::{db::Database, model::Paginated};
use tprm_entity::{
    assessment_status::AssessmentStatus, assessment_type::AssessmentType, company,
    company_status::CompanyStatus, risk_level::RiskLevel,
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

fn internal(company_id: i32) -> AssessmentCreate {
    AssessmentCreate {
        company_id,
        assessment_type: AssessmentType::Internal,
        risk_score: None,
        risk_level: None,
        date_assessed: None,
        next_assessment_date: None,
        status: AssessmentStatus::Pending,
        assessor_id: None,
        notes: None,
    }
}

#[test_log::test(tokio::test)]
async fn create_and_get_roundtrip() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let company = seed_company(&db, "Acme Corp").await?;
    let service = AssessmentService::new(db);

    let created = service
        .create(AssessmentCreate {
            risk_score: Some(72.5),
            risk_level: Some(RiskLevel::High),
            notes: Some("questionnaire returned".into()),
            ..internal(company.id)
        })
        .await?;

    let fetched = service.get(created.id).await?;
    assert_eq!(fetched, created);
    assert_eq!(fetched.risk_score, Some(72.5));
    assert_eq!(fetched.status, AssessmentStatus::Pending);
    // date_assessed is stamped at creation when the caller leaves it out
    assert!(fetched.date_assessed <= OffsetDateTime::now_utc());

    Ok(())
}

#[test_log::test(tokio::test)]
async fn out_of_range_score_is_rejected() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let company = seed_company(&db, "Acme Corp").await?;
    let service = AssessmentService::new(db);

    for score in [-0.1, 100.1, f64::NAN] {
        let result = service
            .create(AssessmentCreate {
                risk_score: Some(score),
                ..internal(company.id)
            })
            .await;
        assert!(matches!(result, Err(Error::Validation(_))), "score {score}");
    }

    // the bounds themselves are fine
    for score in [0.0, 100.0] {
        service
            .create(AssessmentCreate {
                risk_score: Some(score),
                ..internal(company.id)
            })
            .await?;
    }

    Ok(())
}

#[test_log::test(tokio::test)]
async fn create_for_missing_company_fails() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let service = AssessmentService::new(db);

    let result = service.create(internal(42)).await;
    assert!(matches!(result, Err(Error::CompanyNotFound)));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn unknown_assessor_is_rejected() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let company = seed_company(&db, "Acme Corp").await?;
    let service = AssessmentService::new(db);

    let result = service
        .create(AssessmentCreate {
            assessor_id: Some(42),
            ..internal(company.id)
        })
        .await;
    assert!(matches!(result, Err(Error::AssessorNotFound)));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn partial_update_preserves_unset_fields() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let company = seed_company(&db, "Acme Corp").await?;
    let service = AssessmentService::new(db);

    let created = service
        .create(AssessmentCreate {
            risk_score: Some(50.0),
            notes: Some("initial".into()),
            ..internal(company.id)
        })
        .await?;

    let updated = service
        .update(
            created.id,
            AssessmentUpdate {
                status: Some(AssessmentStatus::Completed),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.status, AssessmentStatus::Completed);
    assert_eq!(updated.risk_score, Some(50.0));
    assert_eq!(updated.notes.as_deref(), Some("initial"));
    assert_eq!(updated.assessment_type, created.assessment_type);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn list_filters_by_company() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let first = seed_company(&db, "Acme Corp").await?;
    let second = seed_company(&db, "Globex").await?;
    let service = AssessmentService::new(db);

    service.create(internal(first.id)).await?;
    service.create(internal(second.id)).await?;

    let scoped = service.list(Some(first.id), Paginated::default()).await?;
    assert_eq!(scoped.total, 1);
    assert_eq!(scoped.items[0].company_id, first.id);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn missing_assessment_is_not_found() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let service = AssessmentService::new(db);

    assert!(matches!(service.get(42).await, Err(Error::NotFound)));
    assert!(matches!(
        service.update(42, AssessmentUpdate::default()).await,
        Err(Error::NotFound)
    ));
    assert!(matches!(service.delete(42).await, Err(Error::NotFound)));

    Ok(())
}
