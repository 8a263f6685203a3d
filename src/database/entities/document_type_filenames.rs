use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Quick-select filename offered when uploading a document of a given type.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "document_type_filenames")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub document_type_id: i32,
    pub filename: String,
    pub enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::document_types::Entity",
        from = "Column::DocumentTypeId",
        to = "super::document_types::Column::Id",
        on_delete = "Cascade"
    )]
    DocumentType,
}

impl Related<super::document_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocumentType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
