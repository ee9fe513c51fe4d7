use async_trait::async_trait;
use quiz_core::model::{CatalogError, CategoryCatalog, Question};
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::embedded::{EmbeddedCatalog, EmbeddedQuestions};
use crate::json::{JsonCatalogFile, JsonQuestionFile};

/// Errors surfaced by question and catalog sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Supplies the unordered question bank.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Load every question.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the data is unreachable or cannot be parsed.
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError>;
}

/// Supplies the category display table.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the category catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the data is unreachable, cannot be parsed or
    /// fails catalog validation.
    async fn load_catalog(&self) -> Result<CategoryCatalog, StorageError>;
}

/// Simple in-memory source for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    questions: Arc<Mutex<Vec<Question>>>,
    catalog: Arc<Mutex<CategoryCatalog>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let repo = Self::new();
        repo.replace_questions(questions);
        repo
    }

    /// Replace the stored question bank.
    pub fn replace_questions(&self, questions: Vec<Question>) {
        if let Ok(mut guard) = self.questions.lock() {
            *guard = questions;
        }
    }

    /// Replace the stored catalog.
    pub fn replace_catalog(&self, catalog: CategoryCatalog) {
        if let Ok(mut guard) = self.catalog.lock() {
            *guard = catalog;
        }
    }
}

#[async_trait]
impl QuestionSource for InMemoryRepository {
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl CatalogSource for InMemoryRepository {
    async fn load_catalog(&self) -> Result<CategoryCatalog, StorageError> {
        let guard = self
            .catalog
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        Ok(guard.clone())
    }
}

/// Aggregates the data sources used by the app.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionSource>,
    pub catalog: Arc<dyn CatalogSource>,
}

impl Storage {
    /// Question bank and catalog compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            questions: Arc::new(EmbeddedQuestions),
            catalog: Arc::new(EmbeddedCatalog),
        }
    }

    /// Use JSON files where given and the embedded data otherwise.
    #[must_use]
    pub fn from_paths(questions: Option<&Path>, catalog: Option<&Path>) -> Self {
        let questions: Arc<dyn QuestionSource> = match questions {
            Some(path) => Arc::new(JsonQuestionFile::new(path)),
            None => Arc::new(EmbeddedQuestions),
        };
        let catalog: Arc<dyn CatalogSource> = match catalog {
            Some(path) => Arc::new(JsonCatalogFile::new(path)),
            None => Arc::new(EmbeddedCatalog),
        };
        Self { questions, catalog }
    }
}
