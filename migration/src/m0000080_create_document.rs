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
                    .table(Document::Table)
                    .col(
                        ColumnDef::new(Document::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Document::CompanyId).integer().not_null())
                    .col(ColumnDef::new(Document::FileName).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Document::OriginalName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Document::BlobName)
                            .string_len(255)
                            .unique_key()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Document::ContentType)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Document::FileSize)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Document::DocumentType)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Document::Status).string_len(50).not_null())
                    .col(ColumnDef::new(Document::UploadDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Document::UploadedBy).integer())
                    .col(ColumnDef::new(Document::Metadata).json_binary())
                    .col(
                        ColumnDef::new(Document::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_company")
                            .from(Document::Table, Document::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_uploader")
                            .from(Document::Table, Document::UploadedBy)
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
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Document {
    Table,
    Id,
    CompanyId,
    FileName,
    OriginalName,
    BlobName,
    ContentType,
    FileSize,
    DocumentType,
    Status,
    UploadDate,
    UploadedBy,
    Metadata,
    CreatedAt,
}
