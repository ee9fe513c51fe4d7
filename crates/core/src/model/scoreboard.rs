use crate::model::{CategoryId, Rating};

/// Accumulated rating totals per category.
///
/// Only categories that received at least one rating are present. Iteration
/// follows the order in which categories were first scored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    entries: Vec<(CategoryId, u32)>,
}

impl ScoreBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a confirmed rating into its category total.
    pub fn add(&mut self, category: CategoryId, rating: Rating) {
        let points = u32::from(rating.value());
        match self.entries.iter_mut().find(|(id, _)| *id == category) {
            Some((_, total)) => *total = total.saturating_add(points),
            None => self.entries.push((category, points)),
        }
    }

    #[must_use]
    pub fn get(&self, category: CategoryId) -> Option<u32> {
        self.entries
            .iter()
            .find(|(id, _)| *id == category)
            .map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, u32)> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over all categories.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.entries
            .iter()
            .fold(0_u32, |acc, (_, total)| acc.saturating_add(*total))
    }
}
