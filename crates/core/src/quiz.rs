use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::model::{CategoryId, NameError, ParticipantName, Question, Rating, ScoreBoard};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("please enter a valid name to start")]
    EmptyName,

    #[error("please select a score before confirming")]
    NoRatingSelected,

    #[error("the quiz is already finished")]
    Finished,

    #[error("{action} is not allowed while {state}")]
    InvalidAction {
        action: &'static str,
        state: &'static str,
    },

    #[error("presentation order is not a permutation of {bank_len} questions")]
    InvalidOrder { bank_len: usize },
}

impl From<NameError> for QuizError {
    fn from(value: NameError) -> Self {
        match value {
            NameError::Empty => QuizError::EmptyName,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizState {
    AwaitingName,
    Presenting { index: usize },
    Scoring { index: usize, pending: Rating },
    Finished,
}

impl QuizState {
    fn name(self) -> &'static str {
        match self {
            QuizState::AwaitingName => "awaiting a name",
            QuizState::Presenting { .. } => "presenting a question",
            QuizState::Scoring { .. } => "scoring a question",
            QuizState::Finished => "finished",
        }
    }

    /// Index of the question on screen, if any.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            QuizState::Presenting { index } | QuizState::Scoring { index, .. } => Some(index),
            QuizState::AwaitingName | QuizState::Finished => None,
        }
    }
}

/// Discrete user input, independent of any UI toolkit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizAction {
    SubmitName(String),
    SelectRating(Rating),
    Confirm,
}

impl QuizAction {
    fn name(&self) -> &'static str {
        match self {
            QuizAction::SubmitName(_) => "submitting a name",
            QuizAction::SelectRating(_) => "selecting a rating",
            QuizAction::Confirm => "confirming",
        }
    }
}

/// What a successful action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizEvent {
    Started,
    RatingSelected(Rating),
    Answered { category: CategoryId, rating: Rating },
    Finished,
}

/// Final hand-off to the chart and report renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResults {
    pub participant: ParticipantName,
    pub scoreboard: ScoreBoard,
}

/// Walks a fixed presentation order over a shared question bank. Each
/// question must be rated and confirmed before the next one is shown.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<[Question]>,
    order: Vec<usize>,
    participant: Option<ParticipantName>,
    state: QuizState,
    scoreboard: ScoreBoard,
}

impl QuizSession {
    /// Create a session presenting `bank` in the given order.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidOrder` unless `order` contains every bank
    /// index exactly once.
    pub fn new(bank: Arc<[Question]>, order: Vec<usize>) -> Result<Self, QuizError> {
        let bank_len = bank.len();
        let mut seen = HashSet::with_capacity(order.len());
        let is_permutation = order.len() == bank_len
            && order.iter().all(|&idx| idx < bank_len && seen.insert(idx));
        if !is_permutation {
            return Err(QuizError::InvalidOrder { bank_len });
        }

        Ok(Self {
            bank,
            order,
            participant: None,
            state: QuizState::AwaitingName,
            scoreboard: ScoreBoard::new(),
        })
    }

    /// Create a session presenting `bank` as stored.
    #[must_use]
    pub fn in_bank_order(bank: Arc<[Question]>) -> Self {
        let order = (0..bank.len()).collect();
        Self {
            bank,
            order,
            participant: None,
            state: QuizState::AwaitingName,
            scoreboard: ScoreBoard::new(),
        }
    }

    /// Apply one user action.
    ///
    /// Rejected actions leave the session untouched.
    ///
    /// # Errors
    ///
    /// - `QuizError::EmptyName` for a blank name.
    /// - `QuizError::NoRatingSelected` when confirming without a pending rating.
    /// - `QuizError::Finished` for any action after the last question.
    /// - `QuizError::InvalidAction` for actions that do not fit the current state.
    pub fn apply(&mut self, action: QuizAction) -> Result<QuizEvent, QuizError> {
        let invalid = |state: QuizState, action: &QuizAction| QuizError::InvalidAction {
            action: action.name(),
            state: state.name(),
        };

        match (self.state, action) {
            (QuizState::Finished, _) => Err(QuizError::Finished),

            (QuizState::AwaitingName, QuizAction::SubmitName(raw)) => {
                let name = ParticipantName::parse(&raw)?;
                self.participant = Some(name);
                if self.order.is_empty() {
                    self.state = QuizState::Finished;
                    return Ok(QuizEvent::Finished);
                }
                self.state = QuizState::Presenting { index: 0 };
                Ok(QuizEvent::Started)
            }

            (
                QuizState::Presenting { index } | QuizState::Scoring { index, .. },
                QuizAction::SelectRating(rating),
            ) => {
                self.state = QuizState::Scoring {
                    index,
                    pending: rating,
                };
                Ok(QuizEvent::RatingSelected(rating))
            }

            (QuizState::Presenting { .. }, QuizAction::Confirm) => {
                Err(QuizError::NoRatingSelected)
            }

            (QuizState::Scoring { index, pending }, QuizAction::Confirm) => {
                let category = self.question_at(index).category();
                self.scoreboard.add(category, pending);

                let next = index + 1;
                if next >= self.order.len() {
                    self.state = QuizState::Finished;
                    return Ok(QuizEvent::Finished);
                }
                self.state = QuizState::Presenting { index: next };
                Ok(QuizEvent::Answered {
                    category,
                    rating: pending,
                })
            }

            (state, action) => Err(invalid(state, &action)),
        }
    }

    /// # Errors
    ///
    /// See [`QuizSession::apply`].
    pub fn submit_name(&mut self, raw: &str) -> Result<QuizEvent, QuizError> {
        self.apply(QuizAction::SubmitName(raw.to_owned()))
    }

    /// # Errors
    ///
    /// See [`QuizSession::apply`].
    pub fn select_rating(&mut self, rating: Rating) -> Result<QuizEvent, QuizError> {
        self.apply(QuizAction::SelectRating(rating))
    }

    /// # Errors
    ///
    /// See [`QuizSession::apply`].
    pub fn confirm(&mut self) -> Result<QuizEvent, QuizError> {
        self.apply(QuizAction::Confirm)
    }

    fn question_at(&self, index: usize) -> &Question {
        &self.bank[self.order[index]]
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.state.index().map(|index| self.question_at(index))
    }

    #[must_use]
    pub fn pending_rating(&self) -> Option<Rating> {
        match self.state {
            QuizState::Scoring { pending, .. } => Some(pending),
            _ => None,
        }
    }

    /// One-based position of the question on screen.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.state.index().map(|index| index + 1)
    }

    /// Number of questions in this session.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == QuizState::Finished
    }

    #[must_use]
    pub fn participant(&self) -> Option<&ParticipantName> {
        self.participant.as_ref()
    }

    #[must_use]
    pub fn scoreboard(&self) -> &ScoreBoard {
        &self.scoreboard
    }

    /// Questions in presentation order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> + '_ {
        self.order.iter().map(|&idx| &self.bank[idx])
    }

    /// Final results, available once the session has finished.
    #[must_use]
    pub fn results(&self) -> Option<QuizResults> {
        if !self.is_finished() {
            return None;
        }
        self.participant.clone().map(|participant| QuizResults {
            participant,
            scoreboard: self.scoreboard.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(categories: &[CategoryId]) -> Arc<[Question]> {
        categories
            .iter()
            .enumerate()
            .map(|(i, cat)| Question::new(format!("Q{}", i + 1), *cat))
            .collect::<Vec<_>>()
            .into()
    }

    fn rating(value: u8) -> Rating {
        Rating::new(value).unwrap()
    }

    fn answer_all(session: &mut QuizSession, ratings: &[u8]) {
        for value in ratings {
            session.select_rating(rating(*value)).unwrap();
            session.confirm().unwrap();
        }
    }

    #[test]
    fn blank_name_keeps_awaiting() {
        let mut session = QuizSession::in_bank_order(bank(&[CategoryId::A]));
        assert_eq!(session.submit_name("   "), Err(QuizError::EmptyName));
        assert_eq!(session.state(), QuizState::AwaitingName);
        assert!(session.participant().is_none());

        assert_eq!(session.submit_name(" Ada "), Ok(QuizEvent::Started));
        assert_eq!(session.state(), QuizState::Presenting { index: 0 });
        assert_eq!(session.participant().unwrap().as_str(), "Ada");
    }

    #[test]
    fn name_is_accepted_once() {
        let mut session = QuizSession::in_bank_order(bank(&[CategoryId::A]));
        session.submit_name("Ada").unwrap();
        assert!(matches!(
            session.submit_name("Bob"),
            Err(QuizError::InvalidAction { .. })
        ));
        assert_eq!(session.participant().unwrap().as_str(), "Ada");
    }

    #[test]
    fn mixed_categories_accumulate() {
        let mut session =
            QuizSession::in_bank_order(bank(&[CategoryId::A, CategoryId::B, CategoryId::A]));
        session.submit_name("Ada").unwrap();
        answer_all(&mut session, &[4, 2, 5]);

        assert!(session.is_finished());
        let entries: Vec<_> = session.scoreboard().iter().collect();
        assert_eq!(entries, vec![(CategoryId::A, 9), (CategoryId::B, 2)]);
    }

    #[test]
    fn single_category_of_ones() {
        let mut session = QuizSession::in_bank_order(bank(&[CategoryId::F; 5]));
        session.submit_name("Ada").unwrap();
        answer_all(&mut session, &[1, 1, 1, 1, 1]);

        assert_eq!(session.scoreboard().get(CategoryId::F), Some(5));
        assert_eq!(session.scoreboard().len(), 1);
    }

    #[test]
    fn confirm_without_rating_is_rejected() {
        let mut session = QuizSession::in_bank_order(bank(&[CategoryId::A, CategoryId::B]));
        session.submit_name("Ada").unwrap();

        assert_eq!(session.confirm(), Err(QuizError::NoRatingSelected));
        assert_eq!(session.state(), QuizState::Presenting { index: 0 });
        assert!(session.scoreboard().is_empty());
    }

    #[test]
    fn reselecting_replaces_pending_rating() {
        let mut session = QuizSession::in_bank_order(bank(&[CategoryId::C, CategoryId::C]));
        session.submit_name("Ada").unwrap();
        session.select_rating(rating(5)).unwrap();
        session.select_rating(rating(2)).unwrap();
        assert_eq!(session.pending_rating(), Some(rating(2)));

        assert_eq!(
            session.confirm(),
            Ok(QuizEvent::Answered {
                category: CategoryId::C,
                rating: rating(2)
            })
        );
        assert_eq!(session.scoreboard().get(CategoryId::C), Some(2));
        assert_eq!(session.pending_rating(), None);
        // The pending rating was consumed; confirming again needs a new selection.
        assert_eq!(session.confirm(), Err(QuizError::NoRatingSelected));
    }

    #[test]
    fn selecting_before_name_is_invalid() {
        let mut session = QuizSession::in_bank_order(bank(&[CategoryId::A]));
        assert!(matches!(
            session.select_rating(rating(3)),
            Err(QuizError::InvalidAction { .. })
        ));
        assert_eq!(session.state(), QuizState::AwaitingName);
    }

    #[test]
    fn empty_bank_finishes_after_name() {
        let mut session = QuizSession::in_bank_order(bank(&[]));
        assert_eq!(session.submit_name("Ada"), Ok(QuizEvent::Finished));
        assert!(session.is_finished());

        let results = session.results().unwrap();
        assert!(results.scoreboard.is_empty());
        assert_eq!(results.participant.as_str(), "Ada");
    }

    #[test]
    fn finished_session_rejects_everything() {
        let mut session = QuizSession::in_bank_order(bank(&[CategoryId::A]));
        session.submit_name("Ada").unwrap();
        session.select_rating(rating(3)).unwrap();
        assert_eq!(session.confirm(), Ok(QuizEvent::Finished));

        assert_eq!(session.select_rating(rating(1)), Err(QuizError::Finished));
        assert_eq!(session.confirm(), Err(QuizError::Finished));
        assert_eq!(session.scoreboard().get(CategoryId::A), Some(3));
    }

    #[test]
    fn follows_given_order() {
        let questions = bank(&[CategoryId::A, CategoryId::B, CategoryId::C]);
        let mut session = QuizSession::new(questions, vec![2, 0, 1]).unwrap();
        session.submit_name("Ada").unwrap();

        assert_eq!(session.current_question().unwrap().text(), "Q3");
        assert_eq!(session.position(), Some(1));
        session.select_rating(rating(1)).unwrap();
        session.confirm().unwrap();
        assert_eq!(session.current_question().unwrap().text(), "Q1");

        let order: Vec<_> = session.questions().map(Question::text).collect();
        assert_eq!(order, ["Q3", "Q1", "Q2"]);
    }

    #[test]
    fn rejects_non_permutation_order() {
        let questions = bank(&[CategoryId::A, CategoryId::B]);
        assert_eq!(
            QuizSession::new(Arc::clone(&questions), vec![0, 0]).unwrap_err(),
            QuizError::InvalidOrder { bank_len: 2 }
        );
        assert!(QuizSession::new(Arc::clone(&questions), vec![0]).is_err());
        assert!(QuizSession::new(questions, vec![0, 2]).is_err());
    }

    #[test]
    fn results_unavailable_until_finished() {
        let mut session = QuizSession::in_bank_order(bank(&[CategoryId::A]));
        session.submit_name("Ada").unwrap();
        assert!(session.results().is_none());
    }

    #[test]
    fn scoreboard_sum_matches_confirmed_ratings() {
        let cats = [
            CategoryId::A,
            CategoryId::H,
            CategoryId::B,
            CategoryId::H,
            CategoryId::G,
            CategoryId::A,
        ];
        let ratings = [3, 5, 1, 4, 2, 2];
        let mut session = QuizSession::in_bank_order(bank(&cats));
        session.submit_name("Ada").unwrap();
        answer_all(&mut session, &ratings);

        let expected: u32 = ratings.iter().map(|r| u32::from(*r)).sum();
        assert_eq!(session.scoreboard().total(), expected);
        for cat in CategoryId::ALL {
            let want: u32 = cats
                .iter()
                .zip(ratings)
                .filter(|(c, _)| **c == cat)
                .map(|(_, r)| u32::from(r))
                .sum();
            assert_eq!(session.scoreboard().get(cat).unwrap_or(0), want);
        }
    }
}
