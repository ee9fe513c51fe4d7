use std::sync::Arc;

use quiz_core::model::{CategoryCatalog, ParticipantName, Question};
use quiz_core::{QuizError, QuizSession};
use rand::SeedableRng;
use rand::rngs::StdRng;
use storage::{CatalogSource, QuestionSource};

use crate::error::QuizServiceError;
use crate::shuffle::shuffled_order;

/// Loads the question bank, shuffles it and opens quiz sessions.
#[derive(Clone)]
pub struct QuizService {
    questions: Arc<dyn QuestionSource>,
    catalog: Arc<dyn CatalogSource>,
    seed: Option<u64>,
}

impl QuizService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionSource>, catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            questions,
            catalog,
            seed: None,
        }
    }

    /// Use a fixed shuffle seed instead of the thread RNG.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load the category catalog.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Catalog` if the source fails.
    pub async fn load_catalog(&self) -> Result<CategoryCatalog, QuizServiceError> {
        let catalog = self.catalog.load_catalog().await.map_err(|err| {
            tracing::error!(error = %err, "failed to load category catalog");
            QuizServiceError::Catalog(err)
        })?;
        let missing = catalog.missing();
        if !missing.is_empty() {
            tracing::warn!(?missing, "catalog has no entry for some categories; fallback text will be used");
        }
        Ok(catalog)
    }

    /// Validate the participant name, load and shuffle the questions, and
    /// return a session already showing its first question.
    ///
    /// The name is checked before any data is loaded. A session over an
    /// empty bank is returned already finished.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz(QuizError::EmptyName)` for a blank name
    /// and `QuizServiceError::Load` if the question source fails.
    pub async fn start_session(&self, raw_name: &str) -> Result<QuizSession, QuizServiceError> {
        let name = ParticipantName::parse(raw_name).map_err(QuizError::from)?;

        let questions = self.questions.load_questions().await.map_err(|err| {
            tracing::error!(error = %err, "failed to load questions");
            QuizServiceError::Load(err)
        })?;
        let bank: Arc<[Question]> = questions.into();

        let order = match self.seed {
            Some(seed) => shuffled_order(bank.len(), &mut StdRng::seed_from_u64(seed)),
            None => shuffled_order(bank.len(), &mut rand::rng()),
        };

        let mut session = QuizSession::new(bank, order)?;
        session.submit_name(name.as_str())?;
        tracing::info!(questions = session.len(), "quiz session started");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::QuizState;
    use quiz_core::model::CategoryId;
    use storage::InMemoryRepository;
    use storage::StorageError;
    use storage::json::JsonQuestionFile;

    fn service(questions: Vec<Question>) -> QuizService {
        let repo = InMemoryRepository::with_questions(questions);
        QuizService::new(Arc::new(repo.clone()), Arc::new(repo)).with_seed(11)
    }

    #[tokio::test]
    async fn blank_name_fails_before_loading() {
        let svc = service(vec![Question::new("Q", CategoryId::A)]);
        let err = svc.start_session("  ").await.unwrap_err();
        assert!(matches!(err, QuizServiceError::Quiz(QuizError::EmptyName)));
    }

    #[tokio::test]
    async fn missing_question_file_is_a_load_error() {
        let missing = std::env::temp_dir().join(format!(
            "quiz-service-missing-{}.json",
            std::process::id()
        ));
        let repo = InMemoryRepository::new();
        let svc = QuizService::new(Arc::new(JsonQuestionFile::new(missing)), Arc::new(repo));

        let err = svc.start_session("Ada").await.unwrap_err();
        assert!(matches!(err, QuizServiceError::Load(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn session_starts_on_first_question() {
        let svc = service(vec![
            Question::new("Q1", CategoryId::A),
            Question::new("Q2", CategoryId::B),
        ]);
        let session = svc.start_session("Ada").await.unwrap();
        assert_eq!(session.state(), QuizState::Presenting { index: 0 });
        assert_eq!(session.len(), 2);
        assert_eq!(session.participant().unwrap().as_str(), "Ada");
    }

    #[tokio::test]
    async fn empty_bank_is_finished_immediately() {
        let svc = service(Vec::new());
        let session = svc.start_session("Ada").await.unwrap();
        assert!(session.is_finished());
        assert!(session.results().unwrap().scoreboard.is_empty());
    }

    #[tokio::test]
    async fn seeded_sessions_share_order() {
        let bank: Vec<_> = (0..12)
            .map(|i| Question::new(format!("Q{i}"), CategoryId::ALL[i % 8]))
            .collect();
        let svc = service(bank);
        let a: Vec<String> = svc
            .start_session("Ada")
            .await
            .unwrap()
            .questions()
            .map(|q| q.text().to_owned())
            .collect();
        let b: Vec<String> = svc
            .start_session("Bob")
            .await
            .unwrap()
            .questions()
            .map(|q| q.text().to_owned())
            .collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
    }
}
