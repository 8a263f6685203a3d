use anyhow::{anyhow, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use crate::database::entities::{index_template_nodes, indexes};

/// Creates indexes together with their template node trees. An index is never
/// valid without a root node, so both rows are inserted here in one call.
pub struct IndexService {
    db: DatabaseConnection,
}

impl IndexService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert an index and its root template node, returning both.
    pub async fn create_index(
        &self,
        name: &str,
        title: &str,
        enabled: bool,
    ) -> Result<(indexes::Model, index_template_nodes::Model)> {
        let index = indexes::ActiveModel {
            name: Set(name.to_string()),
            title: Set(title.to_string()),
            enabled: Set(enabled),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        let root = index_template_nodes::ActiveModel {
            parent_id: Set(None),
            index_id: Set(index.id),
            expression: Set(String::new()),
            enabled: Set(true),
            link_documents: Set(false),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok((index, root))
    }

    /// The root template node of an index (the one without a parent).
    pub async fn template_root(&self, index_id: i32) -> Result<index_template_nodes::Model> {
        index_template_nodes::Entity::find()
            .filter(index_template_nodes::Column::IndexId.eq(index_id))
            .filter(index_template_nodes::Column::ParentId.is_null())
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow!("Index {} has no root template node", index_id))
    }

    /// Append a template node under an existing parent node.
    pub async fn add_node(
        &self,
        parent: &index_template_nodes::Model,
        expression: &str,
        enabled: bool,
        link_documents: bool,
    ) -> Result<index_template_nodes::Model> {
        let node = index_template_nodes::ActiveModel {
            parent_id: Set(Some(parent.id)),
            index_id: Set(parent.index_id),
            expression: Set(expression.to_string()),
            enabled: Set(enabled),
            link_documents: Set(link_documents),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(node)
    }
}
