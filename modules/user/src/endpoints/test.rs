use crate::{
    model::{UserCreate, UserUpdate},
    service::UserService,
    Error,
};
use tprm_common::{db::Database, model::Paginated};
use tprm_entity::user_role::UserRole;
use tprm_module_auth::password;

fn alice() -> UserCreate {
    UserCreate {
        username: "alice".into(),
        email: "alice@example.com".into(),
        password: "correct horse battery staple".into(),
        full_name: Some("Alice Example".into()),
        role: UserRole::Assessor,
        is_active: true,
    }
}

#[test_log::test(tokio::test)]
async fn create_hashes_the_password() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let service = UserService::new(db);

    let created = service.create(alice()).await?;
    assert_ne!(created.password, "correct horse battery staple");
    assert!(password::verify_password(
        "correct horse battery staple",
        &created.password
    )?);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn duplicate_username_or_email_is_a_conflict() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let service = UserService::new(db);

    service.create(alice()).await?;

    let result = service
        .create(UserCreate {
            email: "other@example.com".into(),
            ..alice()
        })
        .await;
    assert!(matches!(result, Err(Error::Conflict(_))));

    let result = service
        .create(UserCreate {
            username: "alice2".into(),
            ..alice()
        })
        .await;
    assert!(matches!(result, Err(Error::Conflict(_))));

    assert_eq!(service.list(Paginated::default()).await?.total, 1);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn weak_input_is_rejected() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let service = UserService::new(db);

    let result = service
        .create(UserCreate {
            password: "short".into(),
            ..alice()
        })
        .await;
    assert!(matches!(result, Err(Error::Validation(_))));

    let result = service
        .create(UserCreate {
            email: "not-an-address".into(),
            ..alice()
        })
        .await;
    assert!(matches!(result, Err(Error::Validation(_))));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn partial_update_preserves_unset_fields() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let service = UserService::new(db);

    let created = service.create(alice()).await?;
    let updated = service
        .update(
            created.id,
            UserUpdate {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert!(!updated.is_active);
    assert_eq!(updated.username, "alice");
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.role, created.role);
    // the stored hash is untouched
    assert_eq!(updated.password, created.password);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn email_change_rechecks_uniqueness() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let service = UserService::new(db);

    service.create(alice()).await?;
    let bob = service
        .create(UserCreate {
            username: "bob".into(),
            email: "bob@example.com".into(),
            ..alice()
        })
        .await?;

    let result = service
        .update(
            bob.id,
            UserUpdate {
                email: Some("alice@example.com".into()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(Error::Conflict(_))));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn missing_user_is_not_found() -> anyhow::Result<()> {
    let db = Database::memory().await?;
    let service = UserService::new(db);

    assert!(matches!(service.get(42).await, Err(Error::NotFound)));
    assert!(matches!(
        service.update(42, UserUpdate::default()).await,
        Err(Error::NotFound)
    ));
    assert!(matches!(service.delete(42).await, Err(Error::NotFound)));

    Ok(())
}
