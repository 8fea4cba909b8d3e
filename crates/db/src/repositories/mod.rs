pub mod blob_repo;
pub mod document_repo;
pub mod template_clone_repo;
pub mod template_repo;

pub use blob_repo::BlobRepo;
pub use document_repo::DocumentRepo;
pub use template_clone_repo::{CloneError, ClonedTemplate, TemplateCloneRepo};
pub use template_repo::TemplateRepo;
