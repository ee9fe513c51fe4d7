use dioxus::prelude::*;
use quiz_core::QuizResults;
use quiz_core::model::CategoryCatalog;

use crate::audio::play;
use crate::context::AppContext;
use crate::views::chart::read_pixel_ratio;
use crate::views::{
    ExportStatus, NameEntry, QuestionPanel, ResultsPanel, ViewError, ViewState,
    view_state_from_resource,
};
use crate::vm::{QuizIntent, QuizOutcome, QuizVm, start_quiz};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

fn apply_answer(
    mut vm: Signal<Option<QuizVm>>,
    intent: QuizIntent,
) -> Option<Result<QuizOutcome, ViewError>> {
    let mut guard = vm.write();
    let active = guard.as_mut()?;
    match intent {
        QuizIntent::Select(rating) => Some(active.select(rating)),
        QuizIntent::Confirm => Some(active.confirm()),
        QuizIntent::Start | QuizIntent::Export => None,
    }
}

fn catalog_failed(resource: &Resource<Result<CategoryCatalog, ViewError>>) -> bool {
    matches!(&*resource.value().read(), Some(Err(_)))
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_service = ctx.quiz_service();
    let report_service = ctx.report_service();
    let sounds = ctx.sounds().clone();

    let name = use_signal(String::new);
    let vm = use_signal(|| None::<QuizVm>);
    let results = use_signal(|| None::<QuizResults>);
    let error = use_signal(|| None::<ViewError>);
    let starting = use_signal(|| false);
    let halted = use_signal(|| false);
    let export = use_signal(|| ExportStatus::Idle);

    let catalog_resource = {
        let quiz_service = quiz_service.clone();
        use_resource(move || {
            let quiz_service = quiz_service.clone();
            async move {
                quiz_service
                    .load_catalog()
                    .await
                    .map_err(|_| ViewError::LoadFailed)
            }
        })
    };
    let pixel_ratio = use_resource(read_pixel_ratio);

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut results = results;
        let mut error = error;
        let mut starting = starting;
        let mut halted = halted;
        let mut export = export;

        match intent {
            QuizIntent::Start => {
                if starting() || halted() || catalog_failed(&catalog_resource) {
                    return;
                }
                starting.set(true);
                let raw = name.read().clone();
                let quiz_service = quiz_service.clone();
                let sounds = sounds.clone();
                spawn(async move {
                    match start_quiz(&quiz_service, &raw).await {
                        Ok(started) => {
                            error.set(None);
                            if let Some(cue) = started.start_sound() {
                                play(&sounds, cue);
                            }
                            if let Some(done) = started.results() {
                                results.set(Some(done));
                            } else {
                                vm.set(Some(started));
                            }
                        }
                        Err(ViewError::LoadFailed) => {
                            tracing::warn!("question bank unavailable, quiz halted on start screen");
                            halted.set(true);
                        }
                        Err(err) => error.set(Some(err)),
                    }
                    starting.set(false);
                });
            }
            QuizIntent::Select(_) | QuizIntent::Confirm => match apply_answer(vm, intent) {
                Some(Ok(outcome)) => {
                    tracing::debug!(?intent, "quiz intent applied");
                    error.set(None);
                    play(&sounds, outcome.sound());
                    if let QuizOutcome::Finished(done) = outcome {
                        tracing::info!(total = done.scoreboard.total(), "quiz finished");
                        vm.set(None);
                        results.set(Some(done));
                    }
                }
                Some(Err(err)) => error.set(Some(err)),
                None => {}
            },
            QuizIntent::Export => {
                if *export.read() == ExportStatus::Saving {
                    return;
                }
                let Some(done) = results.read().clone() else {
                    return;
                };
                let catalog = catalog_resource
                    .value()
                    .read()
                    .as_ref()
                    .and_then(|loaded| loaded.as_ref().ok())
                    .cloned()
                    .unwrap_or_default();
                export.set(ExportStatus::Saving);
                let report_service = report_service.clone();
                spawn(async move {
                    match report_service.export(&done, &catalog).await {
                        Ok(path) => export.set(ExportStatus::Saved(path.display().to_string())),
                        Err(_) => export.set(ExportStatus::Failed),
                    }
                });
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, name);
            }
        }
    }

    let ratio = (*pixel_ratio.value().read()).unwrap_or(1.0);
    let question = vm.read().as_ref().and_then(|active| {
        Some((
            active.question_text()?.to_owned(),
            active.progress_label()?,
            active.pending(),
        ))
    });

    rsx! {
        div { class: "page quiz-page",
            match view_state_from_resource(&catalog_resource) {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading..." }
                },
                ViewState::Error(_) => rsx! {
                    NameEntry {
                        name,
                        error: None,
                        disabled: true,
                        on_start: move |()| dispatch.call(QuizIntent::Start),
                    }
                },
                ViewState::Ready(catalog) => {
                    if let Some(done) = results() {
                        rsx! {
                            ResultsPanel {
                                results: done,
                                catalog,
                                pixel_ratio: ratio,
                                export: export(),
                                on_export: move |()| dispatch.call(QuizIntent::Export),
                            }
                        }
                    } else if let Some((text, progress, pending)) = question {
                        rsx! {
                            QuestionPanel {
                                text,
                                progress,
                                pending,
                                error: error(),
                                on_intent: move |intent| dispatch.call(intent),
                            }
                        }
                    } else {
                        rsx! {
                            NameEntry {
                                name,
                                error: error(),
                                disabled: starting() || halted(),
                                on_start: move |()| dispatch.call(QuizIntent::Start),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    name: Rc<RefCell<Option<Signal<String>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, name: Signal<String>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.name.borrow_mut() = Some(name);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn name(&self) -> Signal<String> {
        (*self.name.borrow()).expect("quiz name registered")
    }
}
