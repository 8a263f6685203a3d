use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tag_properties::Entity")]
    TagProperties,
}

impl Related<super::tag_properties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TagProperties.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
