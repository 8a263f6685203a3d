use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub uuid: String,
    /// Cleared (not cascaded) when the document type is deleted, so document
    /// rows survive until their own per-instance delete runs.
    pub document_type_id: Option<i32>,
    pub label: String,
    /// Stored file path relative to the storage root; None until upload completes.
    pub file_path: Option<String>,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::document_types::Entity",
        from = "Column::DocumentTypeId",
        to = "super::document_types::Column::Id",
        on_delete = "SetNull"
    )]
    DocumentType,
    #[sea_orm(has_many = "super::document_metadata::Entity")]
    DocumentMetadata,
}

impl Related<super::document_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocumentType.def()
    }
}

impl Related<super::document_metadata::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocumentMetadata.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
