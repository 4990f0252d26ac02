use crate::{
    model::{TaskCreate, TaskUpdate},
    service::TaskService,
    Error,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use time::OffsetDateTime;
use tprm_common::db::Database;
use tprm_entity::{
    assessment, assessment_status::AssessmentStatus, assessment_type::AssessmentType, company,
    company_status::CompanyStatus, risk_level::RiskLevel, task, task_status::TaskStatus,
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

async fn seed_assessment(db: &Database, company_id: i32) -> anyhow::Result<assessment::Model> {
    let now = OffsetDateTime::now_utc();
    Ok(assessment::ActiveModel {
        company_id: Set(company_id),
        risk_score: Set(None),
        risk_level: Set(None),
        assessment_type: Set(AssessmentType::Internal),
        date_assessed: Set(now),
        next_assessment_date: Set(None),
        status: Set(AssessmentStatus::Pending),
        assessor_id: Set(None),
        notes: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?)
}

fn collect_soc2(company_id: i32) -> TaskCreate {
    TaskCreate {
        company_id,
        assessment_id: None,
        description: "collect SOC 2 report".into(),
        assigned_to: None,
        due_date: None,
        status: TaskStatus::Pending,
        priority: RiskLevel::Low,
    }
}

#[test_log::test(tokio::test)]
async fn create_and_get_roundtrip() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let company = seed_company(&db, "Acme Corp").await?;
    let service = TaskService::new(db);

    let created = service.create(collect_soc2(company.id)).await?;
    let fetched = service.get(created.id).await?;
    assert_eq!(fetched, created);
    assert_eq!(fetched.description, "collect SOC 2 report");

    Ok(())
}

#[test_log::test(tokio::test)]
async fn status_only_update_keeps_priority() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let company = seed_company(&db, "Acme Corp").await?;
    let service = TaskService::new(db);

    let created = service.create(collect_soc2(company.id)).await?;
    assert_eq!(created.status, TaskStatus::Pending);
    assert_eq!(created.priority, RiskLevel::Low);

    let updated = service
        .update(
            created.id,
            TaskUpdate {
                status: Some(TaskStatus::Completed),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.status, TaskStatus::Completed);
    assert_eq!(updated.priority, RiskLevel::Low);
    assert_eq!(updated.description, created.description);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn empty_description_is_rejected() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let company = seed_company(&db, "Acme Corp").await?;
    let service = TaskService::new(db);

    let result = service
        .create(TaskCreate {
            description: " ".into(),
            ..collect_soc2(company.id)
        })
        .await;
    assert!(matches!(result, Err(Error::Validation(_))));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn unknown_references_are_rejected() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let company = seed_company(&db, "Acme Corp").await?;
    let service = TaskService::new(db);

    let result = service.create(collect_soc2(42)).await;
    assert!(matches!(result, Err(Error::CompanyNotFound)));

    let result = service
        .create(TaskCreate {
            assessment_id: Some(42),
            ..collect_soc2(company.id)
        })
        .await;
    assert!(matches!(result, Err(Error::AssessmentNotFound)));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn deleting_the_assessment_detaches_the_task() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let company = seed_company(&db, "Acme Corp").await?;
    let assessment = seed_assessment(&db, company.id).await?;
    let service = TaskService::new(db.clone());

    let created = service
        .create(TaskCreate {
            assessment_id: Some(assessment.id),
            ..collect_soc2(company.id)
        })
        .await?;

    assessment::Entity::delete_by_id(assessment.id)
        .exec(&db)
        .await?;

    // the task survives with the link nulled out
    let fetched = service.get(created.id).await?;
    assert_eq!(fetched.assessment_id, None);
    assert_eq!(task::Entity::find().all(&db).await?.len(), 1);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn missing_task_is_not_found() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let service = TaskService::new(db);

    assert!(matches!(service.get(42).await, Err(Error::NotFound)));
    assert!(matches!(
        service.update(42, TaskUpdate::default()).await,
        Err(Error::NotFound)
    ));
    assert!(matches!(service.delete(42).await, Err(Error::NotFound)));

    Ok(())
}
