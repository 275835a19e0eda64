use quiz_core::Session;
use quiz_core::model::{Difficulty, Region};
use services::fallback_questions;

use std::sync::Arc;

use super::test_harness::{PendingSource, ScreenTestHarness, render_screen};

fn playing(difficulty: Difficulty, region: Region) -> Session {
    Session::new()
        .begin_selection(difficulty)
        .begin_session(region)
        .questions_loaded(fallback_questions())
}

fn answer_all(mut session: Session, correct: bool) -> Session {
    while let Some(question) = session.current_question() {
        let option = if correct {
            question.correct_answer().to_string()
        } else {
            question
                .options()
                .iter()
                .find(|option| !question.is_correct(option))
                .cloned()
                .unwrap()
        };
        session = session.submit_answer(&option).advance_turn();
    }
    session
}

#[test]
fn intro_view_lists_difficulties() {
    let html = render_screen(Session::new());
    assert!(html.contains("Sauce Chef Quiz"), "missing title in {html}");
    for difficulty in Difficulty::ALL {
        assert!(html.contains(difficulty.label()), "missing {difficulty} in {html}");
    }
    assert!(html.contains("⚖️ Conformité"), "missing compliance trigger in {html}");
    assert!(html.contains("Politique de Lanceur"), "missing policy link in {html}");
    assert!(!html.contains("modal-backdrop"), "legal modal open on load: {html}");
}

#[test]
fn map_view_lists_regions_and_world() {
    let html = render_screen(Session::new().begin_selection(Difficulty::Easy));
    assert!(html.contains("Retour au menu"), "missing back button in {html}");
    for region in Region::PICKABLE {
        assert!(html.contains(region.label()), "missing {region} in {html}");
    }
    assert!(html.contains("Surprise (Monde Entier)"), "missing world in {html}");
}

#[test]
fn loading_view_names_the_destination() {
    let loading = Session::new()
        .begin_selection(Difficulty::Easy)
        .begin_session(Region::Oceania);
    let mut harness = ScreenTestHarness::with_source(loading, Arc::new(PendingSource));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Le chef prépare le menu..."), "missing spinner text in {html}");
    assert!(html.contains("Recherche de plats pour Océanie"), "missing region in {html}");
}

#[test]
fn game_view_renders_first_question() {
    let html = render_screen(playing(Difficulty::Medium, Region::Europe));
    assert!(html.contains("Question 1/3"), "missing progress in {html}");
    assert!(html.contains("0 pts"), "missing score in {html}");
    assert!(html.contains("📍 Italie"), "missing country in {html}");
    assert!(html.contains("Sous-Chef"), "missing difficulty tag in {html}");
    assert!(html.contains("Risotto"), "missing option in {html}");
    assert!(html.contains("Danger: 0%"), "missing trap in {html}");
    assert!(!html.contains("Saviez-vous"), "feedback before answering in {html}");
}

#[test]
fn game_view_reveals_feedback_after_answer() {
    let html = render_screen(playing(Difficulty::Easy, Region::Asia).submit_answer("Pasta"));
    assert!(html.contains("Saviez-vous"), "missing fun fact in {html}");
    assert!(html.contains("✅"), "missing correct marker in {html}");
    assert!(html.contains("screen--alarmed"), "missing alarm in {html}");
}

#[test]
fn result_view_shows_score_and_badges_on_win() {
    let won = answer_all(playing(Difficulty::Hard, Region::Africa), true);
    let html = render_screen(won);
    assert!(html.contains("Service Impeccable !"), "missing headline in {html}");
    assert!(html.contains("900 pts"), "missing score in {html}");
    assert!(html.contains("🏅 Chef"), "missing chef badge in {html}");
    assert!(html.contains("🏅 Explorateur Afrique"), "missing explorer badge in {html}");
    assert!(html.contains("Nouvelle Partie"), "missing reset button in {html}");
}

#[test]
fn result_view_without_badges() {
    // Three misses stay under the mistake limit: a scoreless win in the world region.
    let scoreless = answer_all(playing(Difficulty::Easy, Region::World), false);
    let html = render_screen(scoreless);
    assert!(html.contains("0 pts"), "missing score in {html}");
    assert!(html.contains("Aucun badge gagné..."), "missing empty badges in {html}");
    assert!(!html.contains("Danger"), "trap leaked into results: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn loading_view_starts_the_game_with_fallback_questions() {
    let loading = Session::new()
        .begin_selection(Difficulty::Easy)
        .begin_session(Region::World);
    let mut harness = ScreenTestHarness::new(loading);
    harness.rebuild();

    let html = harness.wait_for("Question 1/3").await;
    assert!(html.contains("Question 1/3"), "game did not start: {html}");
    assert!(html.contains("📍 Italie"), "missing fallback question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn answering_advances_to_the_next_question_once() {
    let mut harness = ScreenTestHarness::new(playing(Difficulty::Easy, Region::Europe));
    harness.rebuild();

    harness.answer("Pizza");
    // Ignored: the turn already has an answer and its advance is scheduled.
    harness.answer("Pasta");

    let html = harness.wait_for("Question 2/3").await;
    assert!(html.contains("Question 2/3"), "turn did not advance: {html}");
    assert!(html.contains("100 pts"), "first answer not scored: {html}");
    assert!(html.contains("📍 Japon"), "missing second question in {html}");

    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Question 2/3"), "advanced twice: {html}");
    assert!(!html.contains("Saviez-vous"), "feedback carried over in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn answering_every_question_reaches_the_result_screen() {
    let mut harness = ScreenTestHarness::new(playing(Difficulty::Easy, Region::Europe));
    harness.rebuild();

    for (turn, option) in ["Pizza", "Sushi", "Tacos"].into_iter().enumerate() {
        let progress = format!("Question {}/3", turn + 1);
        let html = harness.wait_for(&progress).await;
        assert!(html.contains(&progress), "missing {progress} in {html}");
        harness.answer(option);
    }

    let html = harness.wait_for("Service Impeccable !").await;
    assert!(html.contains("Service Impeccable !"), "game did not finish: {html}");
    assert!(html.contains("300 pts"), "missing score in {html}");
}
