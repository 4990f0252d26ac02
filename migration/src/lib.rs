pub use sea_orm_migration::prelude::*;

mod m0000010_create_company;
mod m0000020_create_user;
mod m0000030_create_company_contact;
mod m0000040_create_engagement;
mod m0000050_create_assessment;
mod m0000060_create_task;
mod m0000070_create_due_diligence_request;
mod m0000080_create_document;
mod m0000090_create_audit_log;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m0000010_create_company::Migration),
            Box::new(m0000020_create_user::Migration),
            Box::new(m0000030_create_company_contact::Migration),
            Box::new(m0000040_create_engagement::Migration),
            Box::new(m0000050_create_assessment::Migration),
            Box::new(m0000060_create_task::Migration),
            Box::new(m0000070_create_due_diligence_request::Migration),
            Box::new(m0000080_create_document::Migration),
            Box::new(m0000090_create_audit_log::Migration),
        ]
    }
}
