mod chart;
mod name_entry;
mod question;
mod quiz;
mod results;
mod state;

pub use chart::ChartView;
pub use name_entry::NameEntry;
pub use question::QuestionPanel;
pub use quiz::QuizView;
pub use results::{ExportStatus, ResultsPanel};
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
