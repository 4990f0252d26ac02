use crate::{m0000010_create_company::Company, m0000020_create_user::Users};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DueDiligenceRequest::Table)
                    .col(
                        ColumnDef::new(DueDiligenceRequest::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DueDiligenceRequest::CompanyId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DueDiligenceRequest::RequestDetails)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DueDiligenceRequest::RequestDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(DueDiligenceRequest::Status)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DueDiligenceRequest::Priority)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(DueDiligenceRequest::DueDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(DueDiligenceRequest::RequesterId).integer())
                    .col(ColumnDef::new(DueDiligenceRequest::AssigneeId).integer())
                    .col(
                        ColumnDef::new(DueDiligenceRequest::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(DueDiligenceRequest::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_due_diligence_request_company")
                            .from(DueDiligenceRequest::Table, DueDiligenceRequest::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_due_diligence_request_requester")
                            .from(DueDiligenceRequest::Table, DueDiligenceRequest::RequesterId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_due_diligence_request_assignee")
                            .from(DueDiligenceRequest::Table, DueDiligenceRequest::AssigneeId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DueDiligenceRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DueDiligenceRequest {
    Table,
    Id,
    CompanyId,
    RequestDetails,
    RequestDate,
    Status,
    Priority,
    DueDate,
    RequesterId,
    AssigneeId,
    CreatedAt,
    UpdatedAt,
}
