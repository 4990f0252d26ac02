use crate::{document_status::DocumentStatus, document_type::DocumentType};
use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

/// A document held in blob storage.
///
/// Rows are never hard-deleted; deletion flips `status` to
/// [`DocumentStatus::Deleted`] and leaves the blob in place.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "document")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    pub file_name: String,
    pub original_name: String,
    /// Server-generated storage key, unique per document.
    pub blob_name: String,
    pub content_type: String,
    pub file_size: i64,
    pub document_type: DocumentType,
    pub status: DocumentStatus,
    pub upload_date: Option<OffsetDateTime>,
    pub uploaded_by: Option<i32>,
    pub metadata: Option<Json>,
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id",
        on_delete = "Cascade"
    )]
    Company,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UploadedBy",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Uploader,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
