pub mod document_metadata;
pub mod document_type_filenames;
pub mod document_types;
pub mod documents;
pub mod folders;
pub mod groups;
pub mod history_events;
pub mod index_template_nodes;
pub mod indexes;
pub mod metadata_sets;
pub mod metadata_types;
pub mod recent_searches;
pub mod roles;
pub mod staging_folders;
pub mod tag_properties;
pub mod tags;
pub mod users;
pub mod web_forms;
