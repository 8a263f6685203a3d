//! Bootstrap profile and reset tests
//!
//! Covers the profile registry, the record sets each profile creates, and the
//! destructive database reset.

use anyhow::Result;
use chrono::Utc;
use docstore::bootstrap::{self, nuke_database, BootstrapError, BOOTSTRAP_OPTIONS};
use docstore::database::entities::*;
use docstore::database::setup_database;
use docstore::keyring::Keyring;
use docstore::services::DocumentService;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use tempfile::{NamedTempFile, TempDir};

async fn setup_test_db() -> Result<(DatabaseConnection, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let db = Database::connect(&db_url).await?;
    setup_database(&db).await?;

    Ok((db, temp_file))
}

/// Children of a template node, in creation order.
async fn children(
    db: &DatabaseConnection,
    parent_id: i32,
) -> Result<Vec<index_template_nodes::Model>> {
    Ok(index_template_nodes::Entity::find()
        .filter(index_template_nodes::Column::ParentId.eq(parent_id))
        .order_by_asc(index_template_nodes::Column::Id)
        .all(db)
        .await?)
}

/// Follow single-child links down from `node` and return the leaf.
async fn leaf_of_branch(
    db: &DatabaseConnection,
    node: index_template_nodes::Model,
) -> Result<index_template_nodes::Model> {
    let mut current = node;
    loop {
        let mut kids = children(db, current.id).await?;
        match kids.len() {
            0 => return Ok(current),
            1 => current = kids.remove(0),
            n => anyhow::bail!("Branch node {} has {} children", current.id, n),
        }
    }
}

#[test]
fn test_registry_contains_exactly_the_known_profiles() {
    let mut names: Vec<&str> = BOOTSTRAP_OPTIONS.keys().copied().collect();
    names.sort();
    assert_eq!(names, vec!["permits", "simple"]);

    let simple = &BOOTSTRAP_OPTIONS["simple"];
    assert_eq!(simple.label(), "Simple");
    assert!(!simple.description().is_empty());

    let permits = &BOOTSTRAP_OPTIONS["permits"];
    assert_eq!(permits.label(), "Permits");
}

#[test]
fn test_unknown_profile_lookup_fails() {
    let err = bootstrap::get_profile("advanced").err().unwrap();
    assert!(matches!(err, BootstrapError::UnknownProfile(ref name) if name == "advanced"));
}

#[tokio::test]
async fn test_simple_profile_creates_date_index() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    bootstrap::get_profile("simple")?.execute(&db).await?;

    // Exactly one metadata type, named upload_date
    let types = metadata_types::Entity::find().all(&db).await?;
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].name, "upload_date");
    assert_eq!(types[0].title, "Upload date");
    assert_eq!(types[0].default_value.as_deref(), Some("current_date()"));

    // One enabled index with a three-level chain under its root
    let all_indexes = indexes::Entity::find().all(&db).await?;
    assert_eq!(all_indexes.len(), 1);
    assert_eq!(all_indexes[0].name, "date_tree");
    assert!(all_indexes[0].enabled);

    let root = index_template_nodes::Entity::find()
        .filter(index_template_nodes::Column::IndexId.eq(all_indexes[0].id))
        .filter(index_template_nodes::Column::ParentId.is_null())
        .one(&db)
        .await?
        .expect("Index should have a root node");

    let level1 = children(&db, root.id).await?;
    assert_eq!(level1.len(), 1);
    assert_eq!(level1[0].expression, "metadata.upload_date[0:4]");
    assert!(!level1[0].link_documents);

    let level2 = children(&db, level1[0].id).await?;
    assert_eq!(level2.len(), 1);
    assert_eq!(level2[0].expression, "metadata.upload_date[5:7]");
    assert!(!level2[0].link_documents);

    let level3 = children(&db, level2[0].id).await?;
    assert_eq!(level3.len(), 1);
    assert_eq!(level3[0].expression, "metadata.upload_date[8:10]");
    assert!(level3[0].link_documents);

    assert_eq!(children(&db, level3[0].id).await?.len(), 0);

    Ok(())
}

#[tokio::test]
async fn test_permits_profile_creates_permit_fixtures() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    bootstrap::get_profile("permits")?.execute(&db).await?;

    // Two document types with two quick-select filenames each
    let types = document_types::Entity::find()
        .order_by_asc(document_types::Column::Id)
        .all(&db)
        .await?;
    assert_eq!(types.len(), 2);
    assert_eq!(types[0].name, "Form");
    assert_eq!(types[1].name, "Blueprint");

    for document_type in &types {
        let filenames = document_type_filenames::Entity::find()
            .filter(document_type_filenames::Column::DocumentTypeId.eq(document_type.id))
            .all(&db)
            .await?;
        assert_eq!(filenames.len(), 2);
    }

    // Five metadata types
    let mut names: Vec<String> = metadata_types::Entity::find()
        .all(&db)
        .await?
        .into_iter()
        .map(|t| t.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["client", "date", "permit", "project", "user"]);

    // One index with five top-level branches
    let all_indexes = indexes::Entity::find().all(&db).await?;
    assert_eq!(all_indexes.len(), 1);
    assert_eq!(all_indexes[0].name, "main_index");

    let root = index_template_nodes::Entity::find()
        .filter(index_template_nodes::Column::IndexId.eq(all_indexes[0].id))
        .filter(index_template_nodes::Column::ParentId.is_null())
        .one(&db)
        .await?
        .expect("Index should have a root node");

    let branches = children(&db, root.id).await?;
    let expressions: Vec<&str> = branches.iter().map(|n| n.expression.as_str()).collect();
    assert_eq!(
        expressions,
        vec![
            "'Per permit'",
            "'Per project'",
            "'Per date'",
            "'Per user'",
            "'Per client'"
        ]
    );

    // Every branch terminates in a node where documents attach
    for branch in branches {
        assert!(!branch.link_documents);
        let leaf = leaf_of_branch(&db, branch).await?;
        assert!(leaf.link_documents, "Leaf {} should link documents", leaf.expression);
    }

    Ok(())
}

#[tokio::test]
async fn test_rerunning_a_profile_duplicates_records() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let profile = bootstrap::get_profile("simple")?;
    profile.execute(&db).await?;
    profile.execute(&db).await?;

    // No idempotence check by design
    assert_eq!(metadata_types::Entity::find().all(&db).await?.len(), 2);
    assert_eq!(indexes::Entity::find().all(&db).await?.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_nuke_database_wipes_everything_but_privileged_users() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let storage = TempDir::new()?;
    let keyring_dir = TempDir::new()?;

    // Seed application data via a profile, then add everything it doesn't cover
    bootstrap::get_profile("permits")?.execute(&db).await?;

    let document_type = document_types::Entity::find()
        .one(&db)
        .await?
        .expect("Profile should have created a document type");

    let document_service = DocumentService::new(db.clone(), storage.path());
    let document = document_service
        .create(document_type.id, "Signed form", b"pdf bytes")
        .await?;
    let stored_file = storage
        .path()
        .join(document.file_path.as_deref().expect("Document should have a file"));
    assert!(stored_file.exists());

    let metadata_type = metadata_types::Entity::find()
        .one(&db)
        .await?
        .expect("Profile should have created a metadata type");
    document_metadata::ActiveModel {
        document_id: Set(document.id),
        metadata_type_id: Set(metadata_type.id),
        value: Set(Some("2026-08-29".to_string())),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    metadata_sets::ActiveModel {
        title: Set("Permit paperwork".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    web_forms::ActiveModel {
        title: Set("Default upload form".to_string()),
        enabled: Set(true),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    staging_folders::ActiveModel {
        title: Set("Scanner output".to_string()),
        folder_path: Set("/var/spool/scanner".to_string()),
        enabled: Set(true),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    for (username, is_staff, is_superuser) in [
        ("admin", false, true),
        ("operator", true, false),
        ("clerk", false, false),
    ] {
        users::ActiveModel {
            username: Set(username.to_string()),
            full_name: Set(None),
            is_active: Set(true),
            is_staff: Set(is_staff),
            is_superuser: Set(is_superuser),
            ..Default::default()
        }
        .insert(&db)
        .await?;
    }

    groups::ActiveModel {
        name: Set("Archivists".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    roles::ActiveModel {
        label: Set("Reviewer".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    history_events::ActiveModel {
        summary: Set("Document uploaded".to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let tag = tags::ActiveModel {
        name: Set("urgent".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    tag_properties::ActiveModel {
        tag_id: Set(tag.id),
        color: Set("#ff0000".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    folders::ActiveModel {
        title: Set("Inbox".to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    recent_searches::ActiveModel {
        query: Set("permit 42".to_string()),
        hits: Set(3),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let keyring = Keyring::new(keyring_dir.path());
    keyring.import_key("signing", b"private key material")?;
    keyring.import_key("signing.pub", b"public key material")?;

    nuke_database(&db, storage.path(), &keyring).await?;

    // Every collection empty
    assert_eq!(document_types::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(
        document_type_filenames::Entity::find().all(&db).await?.len(),
        0
    );
    assert_eq!(documents::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(document_metadata::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(metadata_types::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(metadata_sets::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(indexes::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(index_template_nodes::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(web_forms::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(staging_folders::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(groups::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(roles::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(history_events::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(tags::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(tag_properties::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(folders::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(recent_searches::Entity::find().all(&db).await?.len(), 0);

    // Except superuser and staff accounts
    let mut remaining: Vec<String> = users::Entity::find()
        .all(&db)
        .await?
        .into_iter()
        .map(|u| u.username)
        .collect();
    remaining.sort();
    assert_eq!(remaining, vec!["admin", "operator"]);

    // Stored files and key material are gone
    assert!(!stored_file.exists());
    assert_eq!(keyring.key_count()?, 0);

    Ok(())
}

#[tokio::test]
async fn test_nuke_on_empty_database_succeeds() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let storage = TempDir::new()?;
    let keyring = Keyring::new(storage.path().join("keys"));

    nuke_database(&db, storage.path(), &keyring).await?;
    Ok(())
}
