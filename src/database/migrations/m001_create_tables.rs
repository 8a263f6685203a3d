use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Document types and their quick-select filenames
        manager
            .create_table(
                Table::create()
                    .table(DocumentTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DocumentTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DocumentTypes::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DocumentTypeFilenames::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DocumentTypeFilenames::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DocumentTypeFilenames::DocumentTypeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DocumentTypeFilenames::Filename)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DocumentTypeFilenames::Enabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-document_type_filenames-document_type_id")
                            .from(
                                DocumentTypeFilenames::Table,
                                DocumentTypeFilenames::DocumentTypeId,
                            )
                            .to(DocumentTypes::Table, DocumentTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Documents and per-document metadata values
        manager
            .create_table(
                Table::create()
                    .table(Documents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Documents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Documents::Uuid).string().not_null())
                    .col(ColumnDef::new(Documents::DocumentTypeId).integer())
                    .col(ColumnDef::new(Documents::Label).string().not_null())
                    .col(ColumnDef::new(Documents::FilePath).string())
                    .col(
                        ColumnDef::new(Documents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-documents-document_type_id")
                            .from(Documents::Table, Documents::DocumentTypeId)
                            .to(DocumentTypes::Table, DocumentTypes::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MetadataTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MetadataTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MetadataTypes::Name).string().not_null())
                    .col(ColumnDef::new(MetadataTypes::Title).string().not_null())
                    .col(ColumnDef::new(MetadataTypes::DefaultValue).string())
                    .col(ColumnDef::new(MetadataTypes::Lookup).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DocumentMetadata::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DocumentMetadata::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DocumentMetadata::DocumentId).integer().not_null())
                    .col(
                        ColumnDef::new(DocumentMetadata::MetadataTypeId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DocumentMetadata::Value).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-document_metadata-document_id")
                            .from(DocumentMetadata::Table, DocumentMetadata::DocumentId)
                            .to(Documents::Table, Documents::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-document_metadata-metadata_type_id")
                            .from(DocumentMetadata::Table, DocumentMetadata::MetadataTypeId)
                            .to(MetadataTypes::Table, MetadataTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MetadataSets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MetadataSets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MetadataSets::Title).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Indexes and their template node trees
        manager
            .create_table(
                Table::create()
                    .table(Indexes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Indexes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Indexes::Name).string().not_null())
                    .col(ColumnDef::new(Indexes::Title).string().not_null())
                    .col(
                        ColumnDef::new(Indexes::Enabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IndexTemplateNodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IndexTemplateNodes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(IndexTemplateNodes::ParentId).integer())
                    .col(ColumnDef::new(IndexTemplateNodes::IndexId).integer().not_null())
                    .col(
                        ColumnDef::new(IndexTemplateNodes::Expression)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IndexTemplateNodes::Enabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(IndexTemplateNodes::LinkDocuments)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-index_template_nodes-index_id")
                            .from(IndexTemplateNodes::Table, IndexTemplateNodes::IndexId)
                            .to(Indexes::Table, Indexes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-index_template_nodes-parent_id")
                            .from(IndexTemplateNodes::Table, IndexTemplateNodes::ParentId)
                            .to(IndexTemplateNodes::Table, IndexTemplateNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Document sources
        manager
            .create_table(
                Table::create()
                    .table(WebForms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WebForms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WebForms::Title).string().not_null())
                    .col(
                        ColumnDef::new(WebForms::Enabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StagingFolders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StagingFolders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StagingFolders::Title).string().not_null())
                    .col(ColumnDef::new(StagingFolders::FolderPath).string().not_null())
                    .col(
                        ColumnDef::new(StagingFolders::Enabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // Accounts
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Username).string().not_null())
                    .col(ColumnDef::new(Users::FullName).string())
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Users::IsStaff)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::IsSuperuser)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Groups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Groups::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Groups::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Roles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Roles::Label).string().not_null())
                    .to_owned(),
            )
            .await?;

        // History, tags, folders, searches
        manager
            .create_table(
                Table::create()
                    .table(HistoryEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HistoryEvents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HistoryEvents::Summary).string().not_null())
                    .col(
                        ColumnDef::new(HistoryEvents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tags::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tags::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TagProperties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TagProperties::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TagProperties::TagId).integer().not_null())
                    .col(ColumnDef::new(TagProperties::Color).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tag_properties-tag_id")
                            .from(TagProperties::Table, TagProperties::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Folders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Folders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Folders::Title).string().not_null())
                    .col(
                        ColumnDef::new(Folders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RecentSearches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RecentSearches::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RecentSearches::Query).string().not_null())
                    .col(
                        ColumnDef::new(RecentSearches::Hits)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(RecentSearches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children before parents
        manager
            .drop_table(Table::drop().table(RecentSearches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Folders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TagProperties::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HistoryEvents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Groups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StagingFolders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WebForms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IndexTemplateNodes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Indexes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MetadataSets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DocumentMetadata::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MetadataTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Documents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DocumentTypeFilenames::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DocumentTypes::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum DocumentTypes {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum DocumentTypeFilenames {
    Table,
    Id,
    DocumentTypeId,
    Filename,
    Enabled,
}

#[derive(DeriveIden)]
enum Documents {
    Table,
    Id,
    Uuid,
    DocumentTypeId,
    Label,
    FilePath,
    CreatedAt,
}

#[derive(DeriveIden)]
enum MetadataTypes {
    Table,
    Id,
    Name,
    Title,
    DefaultValue,
    Lookup,
}

#[derive(DeriveIden)]
enum DocumentMetadata {
    Table,
    Id,
    DocumentId,
    MetadataTypeId,
    Value,
}

#[derive(DeriveIden)]
enum MetadataSets {
    Table,
    Id,
    Title,
}

#[derive(DeriveIden)]
enum Indexes {
    Table,
    Id,
    Name,
    Title,
    Enabled,
}

#[derive(DeriveIden)]
enum IndexTemplateNodes {
    Table,
    Id,
    ParentId,
    IndexId,
    Expression,
    Enabled,
    LinkDocuments,
}

#[derive(DeriveIden)]
enum WebForms {
    Table,
    Id,
    Title,
    Enabled,
}

#[derive(DeriveIden)]
enum StagingFolders {
    Table,
    Id,
    Title,
    FolderPath,
    Enabled,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    FullName,
    IsActive,
    IsStaff,
    IsSuperuser,
}

#[derive(DeriveIden)]
enum Groups {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Roles {
    Table,
    Id,
    Label,
}

#[derive(DeriveIden)]
enum HistoryEvents {
    Table,
    Id,
    Summary,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum TagProperties {
    Table,
    Id,
    TagId,
    Color,
}

#[derive(DeriveIden)]
enum Folders {
    Table,
    Id,
    Title,
    CreatedAt,
}

#[derive(DeriveIden)]
enum RecentSearches {
    Table,
    Id,
    Query,
    Hits,
    CreatedAt,
}
