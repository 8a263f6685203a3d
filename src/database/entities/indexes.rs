use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Named index under which documents are filed by the indexing subsystem.
/// Every index owns a tree of template nodes rooted at a node with no parent.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "indexes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub title: String,
    pub enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::index_template_nodes::Entity")]
    IndexTemplateNodes,
}

impl Related<super::index_template_nodes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IndexTemplateNodes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
