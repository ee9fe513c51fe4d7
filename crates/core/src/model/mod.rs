mod category;
mod participant;
mod question;
mod rating;
mod scoreboard;

pub use category::{
    CatalogError, CategoryCatalog, CategoryId, CategoryInfo, CategoryView, Color,
    FALLBACK_COLOR, FALLBACK_DESCRIPTION,
};
pub use participant::{NameError, ParticipantName};
pub use question::Question;
pub use rating::{Rating, RatingError};
pub use scoreboard::ScoreBoard;
