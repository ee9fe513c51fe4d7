use dioxus::prelude::WritableExt;
use quiz_core::model::{CategoryCatalog, CategoryId, CategoryInfo, Color, Question, Rating};

use super::test_harness::{
    setup_missing_catalog_harness, setup_missing_questions_harness, setup_view_harness,
};
use crate::vm::QuizIntent;

fn bank() -> Vec<Question> {
    vec![
        Question::new("I enjoy reading books.", CategoryId::A),
        Question::new("I think in pictures.", CategoryId::B),
    ]
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_starts_on_name_entry() {
    let mut harness = setup_view_harness(bank());
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("name-input"), "missing name input in {html}");
    assert!(html.contains("Start"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn blank_name_shows_validation_message() {
    let mut harness = setup_view_harness(bank());
    harness.rebuild();
    harness.drive_async().await;

    harness.handles.dispatch().call(QuizIntent::Start);
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Please enter a valid name to start."),
        "missing name error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn answering_every_question_shows_results() {
    let mut harness = setup_view_harness(bank());
    let catalog = CategoryCatalog::new([(
        CategoryId::A,
        CategoryInfo {
            display_name: "Linguistic".into(),
            color: Color::rgb(0xF7, 0x9D, 0x00),
            description: "You enjoy words and language.".into(),
        },
    )])
    .unwrap();
    harness.repo.replace_catalog(catalog);
    harness.rebuild();
    harness.drive_async().await;

    harness.handles.name().set("Ada".to_string());
    harness.handles.dispatch().call(QuizIntent::Start);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");
    assert!(html.contains("rating-5"), "missing rating buttons in {html}");

    let dispatch = harness.handles.dispatch();
    dispatch.call(QuizIntent::Confirm);
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Please select a score before pressing Enter."),
        "missing rating error in {html}"
    );

    dispatch.call(QuizIntent::Select(Rating::OFTEN));
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("rating--selected"), "missing highlight in {html}");

    dispatch.call(QuizIntent::Confirm);
    harness.drive_async().await;
    assert!(harness.render().contains("Question 2 of 2"));

    dispatch.call(QuizIntent::Select(Rating::OFTEN));
    dispatch.call(QuizIntent::Confirm);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Congratulations, Ada!"), "missing title in {html}");
    assert!(html.contains("Linguistic: 4"), "missing tooltip in {html}");
    assert!(html.contains("CatB: 4"), "missing fallback tooltip in {html}");
    assert!(html.contains("You enjoy words and language."), "missing description in {html}");
    assert!(html.contains("Download Results as PDF"), "missing export in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn empty_bank_goes_straight_to_results() {
    let mut harness = setup_view_harness(Vec::new());
    harness.rebuild();
    harness.drive_async().await;

    harness.handles.name().set("Ada".to_string());
    harness.handles.dispatch().call(QuizIntent::Start);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Congratulations, Ada!"), "missing title in {html}");
    assert!(html.contains("No answers were recorded."), "missing empty note in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn missing_question_bank_stays_on_name_entry() {
    let mut harness = setup_missing_questions_harness();
    harness.rebuild();
    harness.drive_async().await;

    harness.handles.name().set("Ada".to_string());
    harness.handles.dispatch().call(QuizIntent::Start);
    harness.drive_async().await;
    harness.handles.dispatch().call(QuizIntent::Start);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("name-input"), "missing name input in {html}");
    assert!(!html.contains("question-text"), "question shown in {html}");
    assert!(!html.contains("name-error"), "load error shown to user in {html}");
    assert!(!html.contains("Retry"), "retry offered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn missing_catalog_blocks_the_start() {
    let mut harness = setup_missing_catalog_harness(bank());
    harness.rebuild();
    harness.drive_async().await;

    harness.handles.name().set("Ada".to_string());
    harness.handles.dispatch().call(QuizIntent::Start);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("name-input"), "missing name input in {html}");
    assert!(!html.contains("question-text"), "question shown in {html}");
    assert!(!html.contains("Retry"), "retry offered in {html}");
}
