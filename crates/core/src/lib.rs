#![forbid(unsafe_code)]

pub mod model;
pub mod quiz;

pub use quiz::{QuizAction, QuizError, QuizEvent, QuizResults, QuizSession, QuizState};
