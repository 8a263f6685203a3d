use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tracing::info;

use crate::bootstrap::BootstrapProfile;
use crate::database::entities::{document_type_filenames, document_types, metadata_types};
use crate::services::IndexService;

/// Setup for handling permits and related documents: form and blueprint
/// document types, permit/project/date/user/client metadata, and a permit
/// index with one branch per way of filing.
pub struct BootstrapPermits;

impl BootstrapPermits {
    async fn create_document_type(
        db: &DatabaseConnection,
        name: &str,
        filenames: &[&str],
    ) -> Result<document_types::Model> {
        let document_type = document_types::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        for filename in filenames {
            document_type_filenames::ActiveModel {
                document_type_id: Set(document_type.id),
                filename: Set(filename.to_string()),
                enabled: Set(true),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        Ok(document_type)
    }

    async fn create_metadata_type(
        db: &DatabaseConnection,
        name: &str,
        title: &str,
        default_value: Option<&str>,
        lookup: Option<&str>,
    ) -> Result<metadata_types::Model> {
        let metadata_type = metadata_types::ActiveModel {
            name: Set(name.to_string()),
            title: Set(title.to_string()),
            default_value: Set(default_value.map(|s| s.to_string())),
            lookup: Set(lookup.map(|s| s.to_string())),
            ..Default::default()
        }
        .insert(db)
        .await?;
        Ok(metadata_type)
    }
}

#[async_trait]
impl BootstrapProfile for BootstrapPermits {
    fn name(&self) -> &'static str {
        "permits"
    }

    fn label(&self) -> &'static str {
        "Permits"
    }

    fn description(&self) -> &'static str {
        "A setup for handling permits and related documents."
    }

    async fn execute(&self, db: &DatabaseConnection) -> Result<()> {
        info!("Applying bootstrap profile: permits");

        // Create document types
        Self::create_document_type(
            db,
            "Form",
            &["Building construction form", "Building usage form"],
        )
        .await?;
        Self::create_document_type(db, "Blueprint", &["Floorplan", "Plot plan"]).await?;

        // Create metadata types
        Self::create_metadata_type(db, "date", "Date", Some("current_date()"), None).await?;
        Self::create_metadata_type(db, "client", "Client", None, None).await?;
        Self::create_metadata_type(db, "permit", "Permit number", None, None).await?;
        Self::create_metadata_type(db, "project", "Project", None, None).await?;
        Self::create_metadata_type(
            db,
            "user",
            "User",
            None,
            Some("sorted([user.get_full_name() or user for user in users if user.is_active])"),
        )
        .await?;

        // Create the permit index
        let index_service = IndexService::new(db.clone());
        let (_index, template_root) = index_service
            .create_index("main_index", "Permit index", true)
            .await?;

        let per_permit = index_service
            .add_node(&template_root, "'Per permit'", true, false)
            .await?;
        index_service
            .add_node(&per_permit, "metadata.permit", true, true)
            .await?;

        let per_project = index_service
            .add_node(&template_root, "'Per project'", true, false)
            .await?;
        let per_project_child = index_service
            .add_node(&per_project, "metadata.project", true, false)
            .await?;
        let per_permit = index_service
            .add_node(&per_project_child, "'Per permit'", true, false)
            .await?;
        index_service
            .add_node(&per_permit, "metadata.permit", true, true)
            .await?;

        let per_date = index_service
            .add_node(&template_root, "'Per date'", true, false)
            .await?;
        index_service
            .add_node(&per_date, "metadata.date", true, true)
            .await?;

        let per_user = index_service
            .add_node(&template_root, "'Per user'", true, false)
            .await?;
        index_service
            .add_node(&per_user, "metadata.user", true, true)
            .await?;

        let per_client = index_service
            .add_node(&template_root, "'Per client'", true, false)
            .await?;
        index_service
            .add_node(&per_client, "metadata.client", true, true)
            .await?;

        Ok(())
    }
}
