use async_trait::async_trait;
use quiz_core::model::{CategoryCatalog, Question};

use crate::json::{parse_catalog, parse_questions};
use crate::repository::{CatalogSource, QuestionSource, StorageError};

/// Default question bank shipped with the app.
pub const QUESTIONS_JSON: &str = include_str!("../data/questions.json");

/// Default category catalog shipped with the app.
pub const CATALOG_JSON: &str = include_str!("../data/catalog.json");

#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedQuestions;

#[async_trait]
impl QuestionSource for EmbeddedQuestions {
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        parse_questions(QUESTIONS_JSON)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

#[async_trait]
impl CatalogSource for EmbeddedCatalog {
    async fn load_catalog(&self) -> Result<CategoryCatalog, StorageError> {
        parse_catalog(CATALOG_JSON)
    }
}
