use serde::{Deserialize, Serialize};

use crate::model::CategoryId;

/// A single quiz statement and the category its rating counts toward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    text: String,
    category: CategoryId,
}

impl Question {
    #[must_use]
    pub fn new(text: impl Into<String>, category: CategoryId) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn category(&self) -> CategoryId {
        self.category
    }
}
