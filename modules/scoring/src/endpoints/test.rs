use crate::service::ScoringService;
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use time::OffsetDateTime;
use tprm_common::db::Database;
use tprm_entity::{
    assessment, assessment_status::AssessmentStatus, assessment_type::AssessmentType, company,
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

async fn seed_assessment(
    db: &Database,
    company_id: i32,
    risk_score: Option<f64>,
) -> anyhow::Result<()> {
    let now = OffsetDateTime::now_utc();
    assessment::ActiveModel {
        company_id: Set(company_id),
        risk_score: Set(risk_score),
        risk_level: Set(None),
        assessment_type: Set(AssessmentType::Internal),
        date_assessed: Set(now),
        next_assessment_date: Set(None),
        status: Set(AssessmentStatus::Completed),
        assessor_id: Set(None),
        notes: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(())
}

#[test_log::test(tokio::test)]
async fn mean_of_scored_assessments() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let company = seed_company(&db, "Acme Corp").await?;
    for score in [80.0, 60.0, 100.0] {
        seed_assessment(&db, company.id, Some(score)).await?;
    }

    let service = ScoringService::new(db);
    let score = service.calculate_vendor_risk_score(company.id).await?;
    assert_eq!(score, Some(80.0));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn no_assessments_means_no_score() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let company = seed_company(&db, "Acme Corp").await?;

    let service = ScoringService::new(db);
    let score = service.calculate_vendor_risk_score(company.id).await?;
    assert_eq!(score, None);

    // an unknown company also has no score
    let score = service.calculate_vendor_risk_score(42).await?;
    assert_eq!(score, None);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn unscored_assessments_are_excluded() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let company = seed_company(&db, "Acme Corp").await?;
    seed_assessment(&db, company.id, Some(40.0)).await?;
    seed_assessment(&db, company.id, None).await?;
    seed_assessment(&db, company.id, Some(60.0)).await?;

    let service = ScoringService::new(db.clone());
    // null scores count towards neither numerator nor denominator
    let score = service.calculate_vendor_risk_score(company.id).await?;
    assert_eq!(score, Some(50.0));

    // all-null is the same as having no assessments
    let other = seed_company(&db, "Globex").await?;
    seed_assessment(&db, other.id, None).await?;
    let score = service.calculate_vendor_risk_score(other.id).await?;
    assert_eq!(score, None);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn scores_do_not_leak_across_companies() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let first = seed_company(&db, "Acme Corp").await?;
    let second = seed_company(&db, "Globex").await?;
    seed_assessment(&db, first.id, Some(10.0)).await?;
    seed_assessment(&db, second.id, Some(90.0)).await?;

    let service = ScoringService::new(db);
    assert_eq!(
        service.calculate_vendor_risk_score(first.id).await?,
        Some(10.0)
    );
    assert_eq!(
        service.calculate_vendor_risk_score(second.id).await?,
        Some(90.0)
    );

    Ok(())
}
