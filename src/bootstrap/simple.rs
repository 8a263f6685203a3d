use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tracing::info;

use crate::bootstrap::BootstrapProfile;
use crate::database::entities::metadata_types;
use crate::services::IndexService;

/// Minimal setup: an upload date metadata type and a date-segmented index.
pub struct BootstrapSimple;

#[async_trait]
impl BootstrapProfile for BootstrapSimple {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn label(&self) -> &'static str {
        "Simple"
    }

    fn description(&self) -> &'static str {
        "A simple setup providing an uploaded date metadata and index plus an \
         alphabetic index based on document filenames."
    }

    async fn execute(&self, db: &DatabaseConnection) -> Result<()> {
        info!("Applying bootstrap profile: simple");

        // Create metadata types
        metadata_types::ActiveModel {
            name: Set("upload_date".to_string()),
            title: Set("Upload date".to_string()),
            default_value: Set(Some("current_date()".to_string())),
            lookup: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await?;

        // Create a segmented date index
        let index_service = IndexService::new(db.clone());
        let (_index, template_root) = index_service
            .create_index("date_tree", "Segmented date index", true)
            .await?;

        // Year / month / day chain; documents attach at the day level
        let node1 = index_service
            .add_node(&template_root, "metadata.upload_date[0:4]", true, false)
            .await?;
        let node2 = index_service
            .add_node(&node1, "metadata.upload_date[5:7]", true, false)
            .await?;
        index_service
            .add_node(&node2, "metadata.upload_date[8:10]", true, true)
            .await?;

        Ok(())
    }
}
