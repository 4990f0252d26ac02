use crate::{
    model::UploadRequest,
    service::{fs::FileSystemBackend, DocumentService},
    Error,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use time::OffsetDateTime;
use tprm_common::{db::Database, model::Paginated};
use tprm_entity::{
    audit_log, company, company_status::CompanyStatus, document, document_status::DocumentStatus,
    document_type::DocumentType, risk_level::RiskLevel,
};

async fn setup() -> anyhow::Result<(Database, DocumentService, company::Model, tempfile::TempDir)>
{
    let db = Database::memory().await?;
    let dir = tempfile::tempdir()?;
    let backend = FileSystemBackend::new(dir.path()).await?;
    let service = DocumentService::new(db.clone(), backend.into());

    let now = OffsetDateTime::now_utc();
    let company = company::ActiveModel {
        name: Set("Acme Corp".into()),
        industry: Set(None),
        country: Set(None),
        risk_tier: Set(RiskLevel::Low),
        status: Set(CompanyStatus::Active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    Ok((db, service, company, dir))
}

fn soc2_report(company_id: i32) -> UploadRequest {
    UploadRequest {
        company_id,
        file_name: "soc2-report.pdf".into(),
        content_type: "application/pdf".into(),
        document_type: DocumentType::Compliance,
        metadata: None,
    }
}

/// Write the object the handed-out URL points at, simulating the client's
/// PUT against the store.
fn put_object(upload_url: &str, content: &[u8]) -> anyhow::Result<()> {
    let path = upload_url
        .strip_prefix("file://")
        .ok_or_else(|| anyhow::anyhow!("not a file url: {upload_url}"))?;
    std::fs::write(path, content)?;
    Ok(())
}

#[test_log::test(tokio::test)]
async fn two_phase_upload_lifecycle() -> anyhow::Result<()> {
    let (db, service, company, _dir) = setup().await?;

    let (created, upload_url) = service.request_upload(soc2_report(company.id), None).await?;
    assert_eq!(created.status, DocumentStatus::Pending);
    assert_eq!(created.file_size, 0);
    assert_eq!(created.upload_date, None);

    put_object(&upload_url, b"pdf bytes")?;

    let confirmed = service.confirm_upload(created.id, 9).await?;
    assert_eq!(confirmed.status, DocumentStatus::Active);
    assert_eq!(confirmed.file_size, 9);
    assert!(confirmed.upload_date.is_some());

    let metadata = service.metadata(created.id).await?;
    assert_eq!(metadata.content_length, Some(9));

    let download_url = service.download_url(created.id).await?;
    assert!(download_url.starts_with("file://"));

    // the lifecycle transitions leave an audit trail
    let trail = audit_log::Entity::find().all(&db).await?;
    assert_eq!(trail.len(), 1);
    assert_eq!(trail[0].action, "UPLOAD");

    Ok(())
}

#[test_log::test(tokio::test)]
async fn confirm_against_missing_object_leaves_the_row_pending() -> anyhow::Result<()> {
    let (db, service, company, _dir) = setup().await?;

    let (created, _upload_url) = service.request_upload(soc2_report(company.id), None).await?;

    // nothing was uploaded
    let result = service.confirm_upload(created.id, 9).await;
    assert!(matches!(result, Err(Error::ObjectMissing(_))));

    let row = document::Entity::find_by_id(created.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(row.status, DocumentStatus::Pending);
    assert_eq!(row.upload_date, None);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn double_confirm_is_rejected() -> anyhow::Result<()> {
    let (_db, service, company, _dir) = setup().await?;

    let (created, upload_url) = service.request_upload(soc2_report(company.id), None).await?;
    put_object(&upload_url, b"pdf bytes")?;
    service.confirm_upload(created.id, 9).await?;

    let result = service.confirm_upload(created.id, 9).await;
    assert!(matches!(result, Err(Error::InvalidTransition(_))));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn disallowed_content_type_is_rejected() -> anyhow::Result<()> {
    let (_db, service, company, _dir) = setup().await?;

    let result = service
        .request_upload(
            UploadRequest {
                content_type: "application/x-msdownload".into(),
                ..soc2_report(company.id)
            },
            None,
        )
        .await;
    assert!(matches!(result, Err(Error::Validation(_))));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn upload_for_missing_company_fails() -> anyhow::Result<()> {
    let (_db, service, _company, _dir) = setup().await?;

    let result = service.request_upload(soc2_report(42), None).await;
    assert!(matches!(result, Err(Error::CompanyNotFound)));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn path_components_are_stripped_from_file_names() -> anyhow::Result<()> {
    let (_db, service, company, _dir) = setup().await?;

    let (created, _) = service
        .request_upload(
            UploadRequest {
                file_name: "../../../etc/passwd.pdf".into(),
                ..soc2_report(company.id)
            },
            None,
        )
        .await?;

    assert_eq!(created.file_name, "passwd.pdf");
    assert!(!created.blob_name.contains(".."));
    assert_eq!(created.original_name, "../../../etc/passwd.pdf");

    Ok(())
}

#[test_log::test(tokio::test)]
async fn soft_delete_is_terminal() -> anyhow::Result<()> {
    let (db, service, company, _dir) = setup().await?;

    let (created, upload_url) = service.request_upload(soc2_report(company.id), None).await?;
    put_object(&upload_url, b"pdf bytes")?;
    service.confirm_upload(created.id, 9).await?;

    service.delete(created.id, None).await?;

    // the row survives, flagged deleted
    let row = document::Entity::find_by_id(created.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(row.status, DocumentStatus::Deleted);

    // but every door is closed
    assert!(matches!(service.get(created.id).await, Err(Error::NotFound)));
    assert!(matches!(
        service.download_url(created.id).await,
        Err(Error::NotFound)
    ));
    assert!(matches!(
        service.delete(created.id, None).await,
        Err(Error::NotFound)
    ));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn listing_filters_by_document_type() -> anyhow::Result<()> {
    let (_db, service, company, _dir) = setup().await?;

    service.request_upload(soc2_report(company.id), None).await?;
    service
        .request_upload(
            UploadRequest {
                file_name: "msa.pdf".into(),
                document_type: DocumentType::Contract,
                ..soc2_report(company.id)
            },
            None,
        )
        .await?;

    let all = service.list(company.id, None, Paginated::default()).await?;
    assert_eq!(all.total, 2);

    let contracts = service
        .list(
            company.id,
            Some(DocumentType::Contract),
            Paginated::default(),
        )
        .await?;
    assert_eq!(contracts.total, 1);
    assert_eq!(contracts.items[0].file_name, "msa.pdf");

    Ok(())
}
