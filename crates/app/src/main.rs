mod config;

use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{QuizService, ReportService};
use storage::Storage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, SoundSettings, UiApp, build_app_context};

use crate::config::{AppConfig, Parsed, print_usage};

const DEFAULT_LOG_FILTER: &str = "app=info,ui=info,services=info,storage=info";

struct DesktopApp {
    quiz_service: Arc<QuizService>,
    report_service: Arc<ReportService>,
    sounds: SoundSettings,
}

impl UiApp for DesktopApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    fn report_service(&self) -> Arc<ReportService> {
        Arc::clone(&self.report_service)
    }

    fn sound_settings(&self) -> SoundSettings {
        self.sounds.clone()
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match AppConfig::from_env().inspect_err(|_| print_usage())? {
        Parsed::Run(config) => config,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };
    tracing::info!(?config, "configuration loaded");

    let storage = Storage::from_paths(config.questions_path.as_deref(), config.catalog_path.as_deref());
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_service: Arc::new(QuizService::new(storage.questions, storage.catalog)),
        report_service: Arc::new(ReportService::new(config.export_dir)),
        sounds: SoundSettings::new(config.sounds_dir, config.mute),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Intelligence Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        tracing::error!(error = %err, "app failed to start");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
