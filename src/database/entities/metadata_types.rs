use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Named field definition attachable to documents. `default_value` and `lookup`
/// hold expressions evaluated by the metadata subsystem, not here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "metadata_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub title: String,
    pub default_value: Option<String>,
    pub lookup: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::document_metadata::Entity")]
    DocumentMetadata,
}

impl Related<super::document_metadata::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocumentMetadata.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
