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
                    .table(CompanyContact::Table)
                    .col(
                        ColumnDef::new(CompanyContact::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CompanyContact::CompanyId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyContact::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CompanyContact::Email).string_len(255))
                    .col(ColumnDef::new(CompanyContact::Phone).string_len(50))
                    .col(ColumnDef::new(CompanyContact::Role).string_len(100))
                    .col(
                        ColumnDef::new(CompanyContact::IsPrimary)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CompanyContact::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_contact_company")
                            .from(CompanyContact::Table, CompanyContact::CompanyId)
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
            .drop_table(Table::drop().table(CompanyContact::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CompanyContact {
    Table,
    Id,
    CompanyId,
    Name,
    Email,
    Phone,
    Role,
    IsPrimary,
    CreatedAt,
}
