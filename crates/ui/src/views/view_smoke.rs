use services::QuestionBank;
use trivia_core::model::QuestionPool;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_bank};

#[test]
fn title_view_smoke_renders_play_link() {
    let mut harness = setup_view_harness(ViewKind::Title);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("10 questions in the bank"), "missing count in {html}");
    assert!(html.contains("Play"), "missing play link in {html}");
}

#[test]
fn game_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Game);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Android Trivia (Question 1/3)"),
        "missing title in {html}"
    );
    assert_eq!(html.matches("radio").count(), 4, "expected four choices in {html}");
    assert!(html.contains("Submit"), "missing submit in {html}");
}

#[test]
fn game_view_smoke_renders_empty_pool_error() {
    let mut harness =
        setup_view_harness_with_bank(ViewKind::Game, QuestionBank::from(QuestionPool::default()));
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("No trivia questions are available."),
        "missing error in {html}"
    );
    assert!(!html.contains("Submit"), "unexpected submit in {html}");
}

#[test]
fn won_view_smoke_renders_counts() {
    let mut harness = setup_view_harness(ViewKind::Won {
        target_count: 3,
        cleared_count: 3,
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Congratulations!"), "missing headline in {html}");
    assert!(
        html.contains("You answered 3 out of 3 questions correctly."),
        "missing detail in {html}"
    );
    assert!(html.contains("Next Match"), "missing action in {html}");
}

#[test]
fn lost_view_smoke_renders_retry() {
    let mut harness = setup_view_harness(ViewKind::Lost);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Game Over"), "missing headline in {html}");
    assert!(html.contains("Try Again"), "missing retry in {html}");
}
