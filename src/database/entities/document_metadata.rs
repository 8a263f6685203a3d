use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Value of a metadata type attached to a single document.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "document_metadata")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub document_id: i32,
    pub metadata_type_id: i32,
    pub value: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::documents::Entity",
        from = "Column::DocumentId",
        to = "super::documents::Column::Id",
        on_delete = "Cascade"
    )]
    Document,
    #[sea_orm(
        belongs_to = "super::metadata_types::Entity",
        from = "Column::MetadataTypeId",
        to = "super::metadata_types::Column::Id",
        on_delete = "Cascade"
    )]
    MetadataType,
}

impl Related<super::documents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Document.def()
    }
}

impl Related<super::metadata_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MetadataType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
