use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RatingError {
    #[error("rating must be between 1 and 5, got {value}")]
    OutOfRange { value: u8 },
}

/// How often a statement applies, from 1 (never) to 5 (always).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const NEVER: Rating = Rating(1);
    pub const SELDOM: Rating = Rating(2);
    pub const SOMETIMES: Rating = Rating(3);
    pub const OFTEN: Rating = Rating(4);
    pub const ALWAYS: Rating = Rating(5);

    /// Every rating in ascending order, as offered to the participant.
    pub const ALL: [Rating; 5] = [
        Rating::NEVER,
        Rating::SELDOM,
        Rating::SOMETIMES,
        Rating::OFTEN,
        Rating::ALWAYS,
    ];

    /// # Errors
    ///
    /// Returns `RatingError::OutOfRange` unless `1 <= value <= 5`.
    pub fn new(value: u8) -> Result<Self, RatingError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange { value })
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "NEVER",
            2 => "SELDOM",
            3 => "SOMETIMES",
            4 => "OFTEN",
            _ => "ALWAYS",
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
