use quiz_core::model::Rating;
use quiz_core::{QuizError, QuizEvent, QuizResults, QuizSession};
use services::{QuizService, QuizServiceError};

use crate::audio::SoundCue;
use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Select(Rating),
    Confirm,
    Export,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Selected(Rating),
    Advanced,
    Finished(QuizResults),
}

impl QuizOutcome {
    #[must_use]
    pub fn sound(&self) -> SoundCue {
        match self {
            QuizOutcome::Selected(_) => SoundCue::Select,
            QuizOutcome::Advanced => SoundCue::Confirm,
            QuizOutcome::Finished(_) => SoundCue::Complete,
        }
    }
}

fn map_quiz_error(err: QuizError) -> ViewError {
    match err {
        QuizError::EmptyName => ViewError::EmptyName,
        QuizError::NoRatingSelected => ViewError::NoRatingSelected,
        _ => ViewError::Unknown,
    }
}

pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn question_text(&self) -> Option<&str> {
        self.session.current_question().map(|q| q.text())
    }

    /// "Question 3 of 64" while a question is on screen.
    #[must_use]
    pub fn progress_label(&self) -> Option<String> {
        self.session
            .position()
            .map(|position| format!("Question {position} of {}", self.session.len()))
    }

    #[must_use]
    pub fn pending(&self) -> Option<Rating> {
        self.session.pending_rating()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    #[must_use]
    pub fn results(&self) -> Option<QuizResults> {
        self.session.results()
    }

    /// Cue for a freshly started quiz. Only an empty bank, which finishes
    /// immediately, has one.
    #[must_use]
    pub fn start_sound(&self) -> Option<SoundCue> {
        self.is_finished().then_some(SoundCue::Complete)
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if no question is on screen.
    pub fn select(&mut self, rating: Rating) -> Result<QuizOutcome, ViewError> {
        self.session
            .select_rating(rating)
            .map(|_| QuizOutcome::Selected(rating))
            .map_err(map_quiz_error)
    }

    /// # Errors
    ///
    /// Returns `ViewError::NoRatingSelected` when nothing was picked yet.
    pub fn confirm(&mut self) -> Result<QuizOutcome, ViewError> {
        match self.session.confirm().map_err(map_quiz_error)? {
            QuizEvent::Finished => self
                .session
                .results()
                .map(QuizOutcome::Finished)
                .ok_or(ViewError::Unknown),
            _ => Ok(QuizOutcome::Advanced),
        }
    }
}

/// # Errors
///
/// Returns `ViewError::EmptyName` for a blank name and
/// `ViewError::LoadFailed` when the questions cannot be read.
pub async fn start_quiz(service: &QuizService, name: &str) -> Result<QuizVm, ViewError> {
    match service.start_session(name).await {
        Ok(session) => Ok(QuizVm::new(session)),
        Err(QuizServiceError::Quiz(err)) => Err(map_quiz_error(err)),
        Err(QuizServiceError::Load(_) | QuizServiceError::Catalog(_)) => {
            Err(ViewError::LoadFailed)
        }
        Err(_) => Err(ViewError::Unknown),
    }
}
