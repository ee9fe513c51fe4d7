use std::sync::Arc;

use services::{QuizService, ReportService};

use crate::audio::SoundSettings;

pub trait UiApp: Send + Sync {
    fn quiz_service(&self) -> Arc<QuizService>;
    fn report_service(&self) -> Arc<ReportService>;
    fn sound_settings(&self) -> SoundSettings;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_service: Arc<QuizService>,
    report_service: Arc<ReportService>,
    sounds: SoundSettings,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_service: app.quiz_service(),
            report_service: app.report_service(),
            sounds: app.sound_settings(),
        }
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    #[must_use]
    pub fn report_service(&self) -> Arc<ReportService> {
        Arc::clone(&self.report_service)
    }

    #[must_use]
    pub fn sounds(&self) -> &SoundSettings {
        &self.sounds
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
