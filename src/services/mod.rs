pub mod document_service;
pub mod index_service;

pub use document_service::*;
pub use index_service::*;
