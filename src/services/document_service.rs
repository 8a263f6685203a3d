use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, ModelTrait, Set};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::database::entities::documents;

/// Owns document rows together with their stored files. Deleting through this
/// service removes the file from the storage root before the row, which is why
/// the reset procedure deletes documents one at a time instead of issuing a
/// set-scoped delete.
pub struct DocumentService {
    db: DatabaseConnection,
    storage_root: PathBuf,
}

impl DocumentService {
    pub fn new(db: DatabaseConnection, storage_root: impl Into<PathBuf>) -> Self {
        Self {
            db,
            storage_root: storage_root.into(),
        }
    }

    /// Create a document row and store its content under a uuid-derived path.
    pub async fn create(
        &self,
        document_type_id: i32,
        label: &str,
        content: &[u8],
    ) -> Result<documents::Model> {
        let uuid = Uuid::new_v4().to_string();
        let relative_path = format!("{}.bin", uuid);

        std::fs::create_dir_all(&self.storage_root)?;
        std::fs::write(self.storage_root.join(&relative_path), content)?;

        let document = documents::ActiveModel {
            uuid: Set(uuid),
            document_type_id: Set(Some(document_type_id)),
            label: Set(label.to_string()),
            file_path: Set(Some(relative_path)),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let document = document.insert(&self.db).await?;
        debug!("Created document {} ({})", document.id, document.label);
        Ok(document)
    }

    /// Delete one document: stored file first, then the row. Metadata values
    /// follow via the foreign key cascade.
    pub async fn delete(&self, document: documents::Model) -> Result<()> {
        if let Some(relative_path) = &document.file_path {
            let path = self.storage_root.join(relative_path);
            match std::fs::remove_file(&path) {
                Ok(()) => debug!("Removed stored file {}", path.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    warn!("Stored file {} already missing", path.display())
                }
                Err(e) => return Err(e.into()),
            }
        }
        document.delete(&self.db).await?;
        Ok(())
    }
}
