use std::path::Path;

use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait};
use tracing::info;

use crate::database::entities::{
    document_types, documents, folders, groups, history_events, indexes, metadata_sets,
    metadata_types, recent_searches, roles, staging_folders, tag_properties, tags, users,
    web_forms,
};
use crate::keyring::Keyring;
use crate::services::DocumentService;

/// Wipe nearly all application data for a fresh start.
///
/// Every collection is cleared with per-instance deletes rather than a single
/// set-scoped statement, so that per-record side effects fire: stored files
/// are removed with their documents, and foreign key cascades take dependent
/// rows (document type filenames, index template nodes, metadata values, tag
/// properties) with their parents. Superuser and staff accounts are kept.
/// Finishes by purging the entire keyring.
pub async fn nuke_database(
    db: &DatabaseConnection,
    storage_root: &Path,
    keyring: &Keyring,
) -> Result<()> {
    info!("Nuking application database");

    // Document types; quick-select filenames cascade
    for obj in document_types::Entity::find().all(db).await? {
        obj.delete(db).await?;
    }

    // Documents one by one to trigger stored file removal; metadata values cascade
    let document_service = DocumentService::new(db.clone(), storage_root);
    for obj in documents::Entity::find().all(db).await? {
        document_service.delete(obj).await?;
    }

    for obj in metadata_types::Entity::find().all(db).await? {
        obj.delete(db).await?;
    }

    for obj in metadata_sets::Entity::find().all(db).await? {
        obj.delete(db).await?;
    }

    // Indexes; template node trees cascade
    for obj in indexes::Entity::find().all(db).await? {
        obj.delete(db).await?;
    }

    // Document sources
    for obj in web_forms::Entity::find().all(db).await? {
        obj.delete(db).await?;
    }
    for obj in staging_folders::Entity::find().all(db).await? {
        obj.delete(db).await?;
    }

    for obj in groups::Entity::find().all(db).await? {
        obj.delete(db).await?;
    }

    // Keep superuser and staff accounts
    for obj in users::Entity::find().all(db).await? {
        if !obj.is_superuser && !obj.is_staff {
            obj.delete(db).await?;
        }
    }

    for obj in roles::Entity::find().all(db).await? {
        obj.delete(db).await?;
    }

    for obj in history_events::Entity::find().all(db).await? {
        obj.delete(db).await?;
    }

    for obj in tags::Entity::find().all(db).await? {
        obj.delete(db).await?;
    }

    // Any tag property left after its tag cascaded
    for obj in tag_properties::Entity::find().all(db).await? {
        obj.delete(db).await?;
    }

    for obj in folders::Entity::find().all(db).await? {
        obj.delete(db).await?;
    }

    for obj in recent_searches::Entity::find().all(db).await? {
        obj.delete(db).await?;
    }

    // Clear the entire keyring, public and private keys alike
    keyring.delete_all_keys()?;

    info!("Database nuked");
    Ok(())
}
