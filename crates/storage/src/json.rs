use async_trait::async_trait;
use quiz_core::model::{CategoryCatalog, Question};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::repository::{CatalogSource, QuestionSource, StorageError};

/// Parse a question bank: a JSON array of `{ "question", "category" }` records.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the text is not a valid bank.
pub fn parse_questions(raw: &str) -> Result<Vec<Question>, StorageError> {
    serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Parse a catalog: a JSON object keyed by category code.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON and
/// `StorageError::Catalog` for entries that fail validation.
pub fn parse_catalog(raw: &str) -> Result<CategoryCatalog, StorageError> {
    let catalog: CategoryCatalog =
        serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))?;
    catalog.validate()?;
    Ok(catalog)
}

async fn read_file(path: &Path) -> Result<String, StorageError> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StorageError::NotFound(path.display().to_string())
        } else {
            StorageError::Io(format!("{}: {e}", path.display()))
        }
    })
}

/// Question bank read from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct JsonQuestionFile {
    path: PathBuf,
}

impl JsonQuestionFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for JsonQuestionFile {
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        let raw = read_file(&self.path).await?;
        let questions = parse_questions(&raw)?;
        tracing::debug!(path = %self.path.display(), count = questions.len(), "loaded questions");
        Ok(questions)
    }
}

/// Category catalog read from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct JsonCatalogFile {
    path: PathBuf,
}

impl JsonCatalogFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonCatalogFile {
    async fn load_catalog(&self) -> Result<CategoryCatalog, StorageError> {
        let raw = read_file(&self.path).await?;
        let catalog = parse_catalog(&raw)?;
        tracing::debug!(path = %self.path.display(), entries = catalog.len(), "loaded catalog");
        Ok(catalog)
    }
}
