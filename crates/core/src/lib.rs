//! Formloom domain core.
//!
//! Pure domain logic shared by the persistence and API crates: the template
//! content model, the schema identifier remapper, and common error/type
//! definitions. Nothing in this crate touches the database or the network.

pub mod error;
pub mod remap;
pub mod template;
pub mod types;
