use std::path::{Path, PathBuf};

use quiz_core::QuizResults;
use quiz_core::model::{CategoryCatalog, ParticipantName};

use crate::error::ReportError;
use crate::pdf::render_pdf;
use crate::report::ReportLayout;

/// File name for a participant's report, with path-hostile characters replaced.
#[must_use]
pub fn export_file_name(participant: &ParticipantName) -> String {
    let safe: String = participant
        .as_str()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{safe}-Intelligence-Results.pdf")
}

async fn write_report(dir: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(path, bytes).await
}

/// Renders results to PDF and saves them under the export directory.
#[derive(Debug, Clone)]
pub struct ReportService {
    export_dir: PathBuf,
}

impl ReportService {
    #[must_use]
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    /// Render the report without saving it.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Pdf` if rendering fails.
    pub fn render(
        &self,
        results: &QuizResults,
        catalog: &CategoryCatalog,
    ) -> Result<Vec<u8>, ReportError> {
        let document = ReportLayout::new(catalog).build(results);
        render_pdf(&document)
    }

    /// Render and write the report, returning the written path.
    ///
    /// The results are only borrowed, so a failed export can be retried.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` if rendering or writing fails.
    pub async fn export(
        &self,
        results: &QuizResults,
        catalog: &CategoryCatalog,
    ) -> Result<PathBuf, ReportError> {
        let bytes = self.render(results, catalog).inspect_err(|err| {
            tracing::error!(error = %err, "failed to render report");
        })?;

        let path = self.export_dir.join(export_file_name(&results.participant));
        if let Err(err) = write_report(&self.export_dir, &path, &bytes).await {
            tracing::error!(error = %err, path = %path.display(), "failed to write report");
            return Err(err.into());
        }

        tracing::info!(path = %path.display(), bytes = bytes.len(), "report exported");
        Ok(path)
    }
}
