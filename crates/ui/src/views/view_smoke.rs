use std::sync::Arc;
use std::time::Duration;

use quiz_core::model::{AdvancePolicy, Category, CategoryId, SetId};
use storage::repository::{
    CategoryRecord, QuestionBankRepository, SetRecord, Storage, StorageError,
};

use crate::vm::QuizIntent;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

const SETTLE: Duration = Duration::from_millis(500);

#[tokio::test(flavor = "current_thread")]
async fn sets_view_smoke_lists_sets_with_counts() {
    let mut harness = setup_view_harness(ViewKind::Sets, AdvancePolicy::Manual);
    harness.rebuild();
    let html = harness.drive_until("Geography", SETTLE).await;
    assert!(html.contains("Choose a question set"), "missing title in {html}");
    assert!(html.contains("Geography"), "missing set in {html}");
    assert!(html.contains("History"), "missing set in {html}");
    assert!(html.contains("3 categories"), "missing count in {html}");
    assert!(html.contains("1 category"), "missing count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn categories_view_smoke_lists_pool_sizes() {
    let mut harness = setup_view_harness(ViewKind::Categories(0), AdvancePolicy::Manual);
    harness.rebuild();
    let html = harness.drive_until("Rivers", SETTLE).await;
    assert!(html.contains("Choose a category"), "missing title in {html}");
    assert!(html.contains("5 questions"), "missing pool size in {html}");
    assert!(html.contains("0 questions"), "missing empty pool in {html}");
    assert!(html.contains("up to 20 random questions"), "missing quiz size in {html}");
    assert!(html.contains("Back to sets"), "missing back link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn categories_view_smoke_unknown_set() {
    let mut harness = setup_view_harness(ViewKind::Categories(9), AdvancePolicy::Manual);
    harness.rebuild();
    let html = harness.drive_until("does not exist", SETTLE).await;
    assert!(html.contains("does not exist"), "missing not-found in {html}");
    assert!(!html.contains("Retry"), "unexpected retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz(0, 0), AdvancePolicy::Manual);
    harness.rebuild();
    let html = harness.drive_until("Question 1 / 5", SETTLE).await;
    assert!(html.contains("Question 1 / 5"), "missing progress in {html}");
    assert!(html.contains("Geography / Rivers"), "missing breadcrumb in {html}");
    for letter in ["A.", "B.", "C.", "D."] {
        assert!(html.contains(letter), "missing {letter} in {html}");
    }
    assert!(!html.contains("Next question"), "advance shown too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_wrong_answer_locks_and_advances_manually() {
    let mut harness = setup_view_harness(ViewKind::Quiz(0, 1), AdvancePolicy::Manual);
    harness.rebuild();
    harness.drive_until("Question 1 / 2", SETTLE).await;

    let wrong = harness.option_index(false);
    harness.dispatch(QuizIntent::Choose(wrong));
    let html = harness.render();
    assert!(html.contains("Not quite. Keep going!"), "missing feedback in {html}");
    assert!(html.contains("quiz-option--incorrect"), "missing wrong mark in {html}");
    assert!(html.contains("quiz-option--correct"), "missing right mark in {html}");
    assert!(html.contains("Next question"), "missing next button in {html}");

    // locked: a second pick changes nothing
    let right = harness.option_index(true);
    harness.dispatch(QuizIntent::Choose(right));
    assert_eq!(harness.with_vm(|vm| vm.run().session().score()), 0);

    harness.dispatch(QuizIntent::Advance);
    let html = harness.render();
    assert!(html.contains("Question 2 / 2"), "did not advance in {html}");
    assert!(!html.contains("Not quite"), "feedback not cleared in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_one_of_five_shows_red_twenty_percent() {
    let mut harness = setup_view_harness(ViewKind::Quiz(0, 0), AdvancePolicy::Manual);
    harness.rebuild();
    harness.drive_until("Question 1 / 5", SETTLE).await;

    for round in 0..5 {
        let pick = harness.option_index(round == 0);
        harness.dispatch(QuizIntent::Choose(pick));
        harness.dispatch(QuizIntent::Advance);
    }

    let html = harness.render();
    assert!(html.contains("Finished!"), "missing results in {html}");
    assert!(html.contains("20%"), "missing percentage in {html}");
    assert!(html.contains("results__score--red"), "missing tier in {html}");
    assert!(html.contains("Score: 1 / 5"), "missing score in {html}");
    assert!(html.contains("Choose another category"), "missing back action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_empty_category_shows_no_questions() {
    let mut harness = setup_view_harness(ViewKind::Quiz(0, 2), AdvancePolicy::Manual);
    harness.rebuild();
    let html = harness.drive_until("Finished!", SETTLE).await;
    assert!(html.contains("No questions"), "missing empty result in {html}");
    assert!(html.contains("Score: 0 / 0"), "missing score in {html}");
    assert!(!html.contains("NaN"), "NaN rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_retry_draws_a_fresh_session() {
    let mut harness = setup_view_harness(ViewKind::Quiz(0, 1), AdvancePolicy::Manual);
    harness.rebuild();
    harness.drive_until("Question 1 / 2", SETTLE).await;
    let first_id = harness.with_vm(|vm| vm.run().session().id());

    for _ in 0..2 {
        let pick = harness.option_index(true);
        harness.dispatch(QuizIntent::Choose(pick));
        harness.dispatch(QuizIntent::Advance);
    }
    assert!(harness.render().contains("100%"));

    harness.dispatch(QuizIntent::Retry);
    let html = harness.drive_until("Question 1 / 2", SETTLE).await;
    assert!(html.contains("Question 1 / 2"), "did not restart in {html}");
    assert_ne!(harness.with_vm(|vm| vm.run().session().id()), first_id);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_timed_advance_moves_on_by_itself() {
    let policy = AdvancePolicy::timed_secs(1).unwrap();
    let mut harness = setup_view_harness(ViewKind::Quiz(1, 0), policy);
    harness.rebuild();
    harness.drive_until("Question 1 / 3", SETTLE).await;

    let right = harness.option_index(true);
    harness.dispatch(QuizIntent::Choose(right));
    let html = harness.render();
    assert!(html.contains("Next question in 1 s"), "missing countdown in {html}");
    assert!(!html.contains("quiz-next"), "manual button shown in {html}");

    let html = harness
        .drive_until("Question 2 / 3", Duration::from_secs(3))
        .await;
    assert!(html.contains("Question 2 / 3"), "did not auto-advance in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_manual_advance_cancels_pending_timer() {
    let policy = AdvancePolicy::timed_secs(1).unwrap();
    let mut harness = setup_view_harness(ViewKind::Quiz(1, 0), policy);
    harness.rebuild();
    harness.drive_until("Question 1 / 3", SETTLE).await;

    let right = harness.option_index(true);
    harness.dispatch(QuizIntent::Choose(right));
    harness.dispatch(QuizIntent::Advance);
    assert!(harness.render().contains("Question 2 / 3"));

    // let the first timer's deadline pass; question 2 must stay put
    tokio::time::sleep(Duration::from_millis(1100)).await;
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question 2 / 3"), "skipped a question in {html}");
    assert!(harness.with_vm(|vm| !vm.is_locked()));
    assert_eq!(harness.with_vm(|vm| vm.run().session().answered_count()), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_leaving_cancels_pending_timer() {
    let policy = AdvancePolicy::timed_secs(1).unwrap();
    let mut harness = setup_view_harness(ViewKind::Quiz(1, 0), policy);
    harness.rebuild();
    harness.drive_until("Question 1 / 3", SETTLE).await;

    let right = harness.option_index(true);
    harness.dispatch(QuizIntent::Choose(right));
    let handles = harness.quiz_handles.clone().unwrap();
    assert!(handles.has_pending_advance());

    harness.unmount();
    assert!(!handles.has_pending_advance(), "timer survived unmount");

    tokio::time::sleep(Duration::from_millis(1100)).await;
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Unmounted"), "view still mounted in {html}");
    assert!(!handles.has_pending_advance());
}

struct FailingBank;

#[async_trait::async_trait]
impl QuestionBankRepository for FailingBank {
    async fn list_sets(&self) -> Result<Vec<SetRecord>, StorageError> {
        Err(StorageError::Serialization("fail".to_string()))
    }

    async fn get_set(&self, _set: SetId) -> Result<SetRecord, StorageError> {
        Err(StorageError::Serialization("fail".to_string()))
    }

    async fn list_categories(&self, _set: SetId) -> Result<Vec<CategoryRecord>, StorageError> {
        Err(StorageError::Serialization("fail".to_string()))
    }

    async fn get_category(
        &self,
        _set: SetId,
        _category: CategoryId,
    ) -> Result<Category, StorageError> {
        Err(StorageError::Serialization("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn sets_view_smoke_renders_error_state() {
    let storage = Storage {
        bank: Arc::new(FailingBank),
    };
    let mut harness = setup_view_harness_with_storage(ViewKind::Sets, AdvancePolicy::Manual, storage);
    harness.rebuild();
    let html = harness.drive_until("Something went wrong", SETTLE).await;
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}
