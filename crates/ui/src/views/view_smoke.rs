use quiz_core::model::Question;
use services::QuizResults;

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn landing_view_smoke_lists_quizzes() {
    let mut harness = setup_view_harness(ViewKind::Landing);
    harness.rebuild();
    let html = harness.render();

    for expected in ["general", "science", "easy", "hard"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(html.contains("cat=general&amp;diff=easy") || html.contains("cat=general&diff=easy"));
}

#[tokio::test(flavor = "current_thread")]
async fn landing_view_smoke_shows_pending_notice_once() {
    let mut harness = setup_view_harness(ViewKind::Landing);
    harness.ctx.set_notice("unknown category `history`");
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("unknown category"), "missing notice in {html}");
    assert_eq!(harness.ctx.take_notice(), None);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz("cat=general&diff=easy".into()));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Question 1 of 3"), "missing heading in {html}");
    assert!(html.contains("Time: 30s"), "missing timer in {html}");
    assert!(html.contains("Submit"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_rejects_unknown_category() {
    let mut harness = setup_view_harness(ViewKind::Quiz("cat=history&diff=easy".into()));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let notice = harness.ctx.take_notice().unwrap_or_default();
    assert!(notice.contains("history"), "unexpected notice {notice:?}");
    assert!(!harness.render().contains("Question 1"));
    assert!(QuizResults::load(harness.storage.session.as_ref()).is_err());
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_handoff() {
    let mut harness = setup_view_harness(ViewKind::Results);
    QuizResults {
        score: 1,
        total: 2,
        elapsed_seconds: vec![5, 30],
        answers: vec![Some("4".into()), None],
        questions: vec![
            Question::new("2 + 2?", vec!["3".into(), "4".into()], "4").unwrap(),
            Question::new("Sky?", vec!["Blue".into(), "Red".into()], "Blue").unwrap(),
        ],
        category: "general".into(),
        difficulty: "easy".into(),
    }
    .persist(harness.storage.session.as_ref())
    .unwrap();

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Score: 1 / 2 (50%)"), "missing score in {html}");
    assert!(html.contains("No answer"), "missing sentinel in {html}");
    assert!(html.contains("Correct answer: Blue"), "missing correction in {html}");
    assert!(html.contains("0:35"), "missing total time in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_without_handoff() {
    let mut harness = setup_view_harness(ViewKind::Results);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("No results yet"), "missing empty state in {html}");
}
