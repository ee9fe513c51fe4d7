#![forbid(unsafe_code)]

pub mod embedded;
pub mod json;
pub mod repository;

pub use repository::{CatalogSource, InMemoryRepository, QuestionSource, Storage, StorageError};
