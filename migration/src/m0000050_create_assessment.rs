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
                    .table(Assessment::Table)
                    .col(
                        ColumnDef::new(Assessment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assessment::CompanyId).integer().not_null())
                    .col(ColumnDef::new(Assessment::RiskScore).double())
                    .col(ColumnDef::new(Assessment::RiskLevel).string_len(50))
                    .col(
                        ColumnDef::new(Assessment::AssessmentType)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assessment::DateAssessed)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Assessment::NextAssessmentDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Assessment::Status).string_len(50).not_null())
                    .col(ColumnDef::new(Assessment::AssessorId).integer())
                    .col(ColumnDef::new(Assessment::Notes).text())
                    .col(
                        ColumnDef::new(Assessment::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Assessment::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assessment_company")
                            .from(Assessment::Table, Assessment::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assessment_assessor")
                            .from(Assessment::Table, Assessment::AssessorId)
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
            .drop_table(Table::drop().table(Assessment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Assessment {
    Table,
    Id,
    CompanyId,
    RiskScore,
    RiskLevel,
    AssessmentType,
    DateAssessed,
    NextAssessmentDate,
    Status,
    AssessorId,
    Notes,
    CreatedAt,
    UpdatedAt,
}
