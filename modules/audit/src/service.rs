use crate::Error;
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use time::OffsetDateTime;
use tprm_common::db::Database;
use tprm_entity::audit_log;

/// What happened, to what, and who did it.
#[derive(Clone, Debug, Default)]
pub struct AuditEntry {
    pub user_id: Option<i32>,
    pub action: String,
    pub resource_type: String,
    pub resource_id: Option<i32>,
    pub details: Option<serde_json::Value>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Append-only audit trail.
///
/// There is deliberately no update or delete operation here.
#[derive(Clone, Debug)]
pub struct AuditService {
    db: Database,
}

impl AuditService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn record(&self, entry: AuditEntry) -> Result<(), Error> {
        audit_log::ActiveModel {
            user_id: Set(entry.user_id),
            action: Set(entry.action),
            resource_type: Set(entry.resource_type),
            resource_id: Set(entry.resource_id),
            details: Set(entry.details),
            ip_address: Set(entry.ip_address),
            user_agent: Set(entry.user_agent),
            created_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sea_orm::EntityTrait;

    #[test_log::test(tokio::test)]
    async fn record_appends() -> anyhow::Result<()> {
        let db = Database::memory().await?;
        let service = AuditService::new(db.clone());

        service
            .record(AuditEntry {
                action: "LOGIN".into(),
                resource_type: "user".into(),
                ..Default::default()
            })
            .await?;

        let rows = audit_log::Entity::find().all(&db).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].action, "LOGIN");

        Ok(())
    }
}
