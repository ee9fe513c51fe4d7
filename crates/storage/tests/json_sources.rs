use std::path::PathBuf;

use quiz_core::model::{CategoryId, Question};
use storage::json::{JsonCatalogFile, JsonQuestionFile};
use storage::{CatalogSource, InMemoryRepository, QuestionSource, Storage, StorageError};

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("quiz-storage-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn json_question_file_loads_records() {
    let path = scratch_file(
        "questions.json",
        r#"[
            { "question": "I like maps.", "category": "CatB" },
            { "question": "I like rhythm.", "category": "CatC" }
        ]"#,
    );

    let questions = JsonQuestionFile::new(&path).load_questions().await.unwrap();
    assert_eq!(
        questions,
        vec![
            Question::new("I like maps.", CategoryId::B),
            Question::new("I like rhythm.", CategoryId::C),
        ]
    );
}

#[tokio::test]
async fn missing_question_file_is_not_found() {
    let path = std::env::temp_dir().join("quiz-storage-does-not-exist.json");
    let err = JsonQuestionFile::new(path).load_questions().await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn malformed_question_file_is_serialization_error() {
    let path = scratch_file("broken.json", "{ not json");
    let err = JsonQuestionFile::new(path).load_questions().await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)), "got {err:?}");
}

#[tokio::test]
async fn json_catalog_file_loads_entries() {
    let path = scratch_file(
        "catalog.json",
        r##"{ "CatG": { "name": "Body", "color": "#C42BA6", "description": "Moving." } }"##,
    );
    let catalog = JsonCatalogFile::new(path).load_catalog().await.unwrap();
    assert_eq!(catalog.get(CategoryId::G).unwrap().description, "Moving.");
}

#[tokio::test]
async fn embedded_storage_loads_defaults() {
    let storage = Storage::embedded();
    let questions = storage.questions.load_questions().await.unwrap();
    let catalog = storage.catalog.load_catalog().await.unwrap();
    assert_eq!(questions.len(), 64);
    assert_eq!(catalog.len(), 8);
}

#[tokio::test]
async fn from_paths_prefers_files_over_embedded() {
    let path = scratch_file(
        "single.json",
        r#"[{ "question": "Only one.", "category": "CatH" }]"#,
    );
    let storage = Storage::from_paths(Some(path.as_path()), None);
    let questions = storage.questions.load_questions().await.unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(storage.catalog.load_catalog().await.unwrap().len(), 8);
}

#[tokio::test]
async fn in_memory_repository_returns_replaced_bank() {
    let repo = InMemoryRepository::new();
    assert!(repo.load_questions().await.unwrap().is_empty());

    repo.replace_questions(vec![Question::new("Q", CategoryId::A)]);
    assert_eq!(repo.load_questions().await.unwrap().len(), 1);
    assert!(repo.load_catalog().await.unwrap().is_empty());
}
