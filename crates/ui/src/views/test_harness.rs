use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::Question;
use services::{QuizService, ReportService};
use storage::json::{JsonCatalogFile, JsonQuestionFile};
use storage::{CatalogSource, InMemoryRepository, QuestionSource};

use crate::audio::SoundSettings;
use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;

struct TestApp {
    quiz_service: Arc<QuizService>,
    report_service: Arc<ReportService>,
}

impl UiApp for TestApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    fn report_service(&self) -> Arc<ReportService> {
        Arc::clone(&self.report_service)
    }

    fn sound_settings(&self) -> SoundSettings {
        SoundSettings::muted()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub repo: InMemoryRepository,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..4 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(questions: Vec<Question>) -> ViewHarness {
    let repo = InMemoryRepository::with_questions(questions);
    build_harness(repo.clone(), Arc::new(repo.clone()), Arc::new(repo))
}

fn missing_file(kind: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("quiz-ui-missing-{kind}-{}.json", std::process::id()))
}

/// Harness whose question bank points at a file that does not exist.
pub fn setup_missing_questions_harness() -> ViewHarness {
    let repo = InMemoryRepository::new();
    let questions = Arc::new(JsonQuestionFile::new(missing_file("questions")));
    build_harness(repo.clone(), questions, Arc::new(repo))
}

/// Harness whose catalog points at a file that does not exist.
pub fn setup_missing_catalog_harness(questions: Vec<Question>) -> ViewHarness {
    let repo = InMemoryRepository::with_questions(questions);
    let catalog = Arc::new(JsonCatalogFile::new(missing_file("catalog")));
    build_harness(repo.clone(), Arc::new(repo), catalog)
}

fn build_harness(
    repo: InMemoryRepository,
    questions: Arc<dyn QuestionSource>,
    catalog: Arc<dyn CatalogSource>,
) -> ViewHarness {
    let quiz_service = Arc::new(QuizService::new(questions, catalog).with_seed(1));
    let export_dir = std::env::temp_dir().join(format!("quiz-ui-{}", std::process::id()));
    let app = Arc::new(TestApp {
        quiz_service,
        report_service: Arc::new(ReportService::new(export_dir)),
    });
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, repo, handles }
}
