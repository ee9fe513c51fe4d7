use std::path::PathBuf;

use dioxus::document::eval;
use dioxus::prelude::spawn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    /// A rating button was pressed.
    Select,
    /// An answer was confirmed.
    Confirm,
    /// The last question was answered.
    Complete,
}

impl SoundCue {
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            SoundCue::Select => "buttonsound.mp3",
            SoundCue::Confirm => "entersound.mp3",
            SoundCue::Complete => "trumpets.mp3",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoundSettings {
    dir: PathBuf,
    muted: bool,
}

impl SoundSettings {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, muted: bool) -> Self {
        Self {
            dir: dir.into(),
            muted,
        }
    }

    #[must_use]
    pub fn muted() -> Self {
        Self::new(PathBuf::new(), true)
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Source handed to the webview's `Audio` element.
    #[must_use]
    pub fn source(&self, cue: SoundCue) -> String {
        self.dir.join(cue.file_name()).to_string_lossy().replace('\\', "/")
    }
}

fn play_script(source: &str) -> String {
    format!(
        r"try {{
            await new Audio({source:?}).play();
            return '';
        }} catch (err) {{
            return String(err);
        }}"
    )
}

/// Start playing `cue` unless sounds are muted. Failures are only logged.
pub fn play(settings: &SoundSettings, cue: SoundCue) {
    if settings.is_muted() {
        return;
    }
    let source = settings.source(cue);
    spawn(async move {
        match eval(&play_script(&source)).join::<String>().await {
            Ok(message) if message.is_empty() => {
                tracing::debug!(?cue, "sound played");
            }
            Ok(message) => {
                tracing::warn!(?cue, %source, %message, "sound playback failed");
            }
            Err(err) => {
                tracing::warn!(?cue, %source, error = ?err, "sound playback unavailable");
            }
        }
    });
}
