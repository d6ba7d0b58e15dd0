use quiz_core::model::{OptionLetter, QuizResult, ReviewOptions, ReviewRecord};
use services::api::StubBackend;

use super::test_harness::{ViewKind, setup_view_harness, signed_in_stub};
use crate::vm::QuizIntent;

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_welcome() {
    let mut harness = setup_view_harness(ViewKind::Home, StubBackend::new());
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Welcome to Quiz App"));
    assert!(html.contains("Register"));
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_shows_user_and_admin_panel() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, signed_in_stub());
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("admin@example.com"), "{html}");
    assert!(html.contains("Upload Questions"));
    assert!(html.contains("Questions available"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_confirm_view_smoke_estimates_minutes() {
    let mut harness = setup_view_harness(ViewKind::QuizConfirm, signed_in_stub());
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    // Five sample questions at 30 seconds each.
    assert!(html.contains(r#"id="totalQuestions">5<"#), "{html}");
    assert!(html.contains(r#"id="totalTime">3<"#), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn timed_quiz_view_smoke_navigates_questions() {
    let mut harness = setup_view_harness(ViewKind::Quiz { timed: true }, signed_in_stub());
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "{html}");
    assert!(html.contains("30s"));
    assert!(html.contains("Next"));

    harness.send(QuizIntent::Select(OptionLetter::A));
    harness.send(QuizIntent::Next);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Question 2 of 5"), "{html}");
    assert!(html.contains("1 of 5 answered"));
}

#[tokio::test(flavor = "current_thread")]
async fn untimed_quiz_view_smoke_has_no_timer() {
    let mut harness = setup_view_harness(ViewKind::Quiz { timed: false }, signed_in_stub());
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "{html}");
    assert!(!html.contains(r#"id="timer""#));
}

#[tokio::test(flavor = "current_thread")]
async fn quit_prompt_smoke_shows_confirmation() {
    let mut harness = setup_view_harness(ViewKind::Quiz { timed: true }, signed_in_stub());
    harness.rebuild();
    harness.settle().await;

    harness.send(QuizIntent::RequestQuit);
    harness.settle().await;
    assert!(harness.render().contains("Your progress will be lost."));

    harness.send(QuizIntent::CancelQuit);
    harness.settle().await;
    assert!(!harness.render().contains("Your progress will be lost."));
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_reads_figures_from_address() {
    let mut harness = setup_view_harness(
        ViewKind::Results {
            score: 2,
            total: 3,
            percentage: 66.67,
        },
        StubBackend::new(),
    );
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains(r#"id="score">2<"#), "{html}");
    assert!(html.contains(r#"id="total">3<"#));
    assert!(html.contains("66.67%"));
    assert!(html.contains(r#"id="incorrect">1<"#));
}

#[tokio::test(flavor = "current_thread")]
async fn answers_view_smoke_without_cache_asks_for_quiz() {
    let mut harness = setup_view_harness(ViewKind::Answers, StubBackend::new());
    harness.rebuild();
    harness.settle().await;

    assert!(
        harness
            .render()
            .contains("No quiz data found. Please take a quiz first.")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn answers_view_smoke_lists_cached_review() {
    let mut harness = setup_view_harness(ViewKind::Answers, StubBackend::new());
    let result = QuizResult {
        score: 1,
        total: 2,
        percentage: 50.0,
        results: vec![ReviewRecord {
            question: "What is the default port number for Flask development server?".into(),
            options: ReviewOptions {
                a: "5000".into(),
                b: "8000".into(),
                c: "3000".into(),
                d: "80".into(),
            },
            selected: OptionLetter::A,
            correct: OptionLetter::A,
            is_correct: true,
        }],
    };
    harness.services.results().save(&result).await.unwrap();

    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("✅ Question 1"), "{html}");
    assert!(html.contains("A - 5000"));
    assert!(html.contains("Correct Answer: A"));
    assert!(harness.stub.submissions().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn failed_submit_stays_on_question_and_retry_succeeds() {
    let mut harness = setup_view_harness(ViewKind::Quiz { timed: true }, signed_in_stub());
    harness.rebuild();
    harness.settle().await;

    harness.send(QuizIntent::Select(OptionLetter::B));
    harness.stub.set_offline(true);
    harness.send(QuizIntent::Submit);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "{html}");
    assert!(html.contains("Service unavailable"), "{html}");
    assert!(harness.stub.submissions().is_empty());

    harness.stub.set_offline(false);
    harness.send(QuizIntent::Submit);
    harness.settle().await;

    assert_eq!(harness.stub.submissions().len(), 1);
    assert!(harness.render().contains(r#"id="left-view""#));
    assert!(harness.services.results().load().await.unwrap().result().is_some());
}

#[tokio::test(flavor = "current_thread")]
async fn submit_is_ignored_while_quit_prompt_is_open() {
    let mut harness = setup_view_harness(ViewKind::Quiz { timed: false }, signed_in_stub());
    harness.rebuild();
    harness.settle().await;

    harness.send(QuizIntent::RequestQuit);
    harness.send(QuizIntent::Submit);
    harness.settle().await;

    assert!(harness.stub.submissions().is_empty());
    let html = harness.render();
    assert!(html.contains("Your progress will be lost."), "{html}");
    assert!(html.contains("Question 1 of 5"));
}
