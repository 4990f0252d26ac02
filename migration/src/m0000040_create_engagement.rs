use crate::m0000010_create_company::Company;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Engagement::Table)
                    .col(
                        ColumnDef::new(Engagement::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Engagement::CompanyId).integer().not_null())
                    .col(ColumnDef::new(Engagement::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Engagement::Description).text())
                    .col(ColumnDef::new(Engagement::StartDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Engagement::EndDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Engagement::Status).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Engagement::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Engagement::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_engagement_company")
                            .from(Engagement::Table, Engagement::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Engagement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Engagement {
    Table,
    Id,
    CompanyId,
    Name,
    Description,
    StartDate,
    EndDate,
    Status,
    CreatedAt,
    UpdatedAt,
}
