use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tree node of an index template. `expression` is evaluated against document
/// metadata by the indexing subsystem; `link_documents` marks nodes where
/// matching documents attach.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "index_template_nodes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// None only for the root node of an index.
    pub parent_id: Option<i32>,
    pub index_id: i32,
    pub expression: String,
    pub enabled: bool,
    pub link_documents: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::indexes::Entity",
        from = "Column::IndexId",
        to = "super::indexes::Column::Id",
        on_delete = "Cascade"
    )]
    Index,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_delete = "Cascade"
    )]
    Parent,
}

impl Related<super::indexes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Index.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
