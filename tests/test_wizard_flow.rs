// ABOUTME: End-to-end wizard flow: commit all six steps, reach the summary,
// export, and reopen the persisted concept

use genlab::app::AppState;
use genlab::concept::store::SNAPSHOT_FILE;
use genlab::concept::{ConceptStore, DesignMethod, SocialImpact, SUMMARY_VIEW};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn test_state() -> (TempDir, AppState) {
    let dir = TempDir::new().unwrap();
    let store = ConceptStore::open(dir.path().join(SNAPSHOT_FILE));
    let mut state = AppState::new(store);
    state.export_dir = dir.path().to_path_buf();
    (dir, state)
}

fn type_into_focused(state: &mut AppState, text: &str) {
    let draft = state.draft.as_mut().unwrap();
    for c in text.chars() {
        draft.input_char(c);
    }
}

fn next_field(state: &mut AppState) {
    state.draft.as_mut().unwrap().focus_next();
}

fn cycle(state: &mut AppState) {
    state.draft.as_mut().unwrap().cycle_choice(true);
}

/// Drives the whole wizard the way a visitor-facing session would go.
fn complete_all_steps(state: &mut AppState) {
    // step 1: theme matrix
    type_into_focused(state, "climate");
    next_field(state);
    type_into_focused(state, "rising sea levels");
    state.commit_current();
    assert_eq!(state.active_view, 1);

    // step 2: design philosophy (speculative main, participatory supporting)
    cycle(state);
    next_field(state);
    cycle(state);
    next_field(state);
    type_into_focused(state, "future scenarios visitors can walk through");
    state.commit_current();
    assert_eq!(state.active_view, 2);

    // step 3: creative constraints, custom only
    next_field(state);
    next_field(state);
    next_field(state);
    type_into_focused(state, "no sound");
    state.commit_current();
    assert_eq!(state.active_view, 3);

    // step 4: artifact & experience, both fields required
    type_into_focused(state, "the sea is changing faster than we are");
    next_field(state);
    type_into_focused(state, "standing inside a flooded living room");
    state.commit_current();
    assert_eq!(state.active_view, 4);

    // step 5: modular approach
    type_into_focused(state, "one room, one tide table");
    state.commit_current();
    assert_eq!(state.active_view, 5);

    // step 6: social layer
    cycle(state);
    next_field(state);
    type_into_focused(state, "my choices are part of the tide");
    state.commit_current();
}

#[test]
fn test_full_wizard_run_reaches_summary() {
    let (_dir, mut state) = test_state();
    assert!(!state.gate().is_reachable(1));

    complete_all_steps(&mut state);

    assert_eq!(state.active_view, SUMMARY_VIEW);
    assert!(state.draft.is_none());
    for view in 0..=SUMMARY_VIEW {
        assert!(state.gate().is_reachable(view), "view {view} unreachable");
    }

    let doc = state.store.document();
    assert_eq!(
        doc.design_philosophy.main_method,
        Some(DesignMethod::Speculative)
    );
    assert_eq!(
        doc.design_philosophy.supporting_method,
        Some(DesignMethod::Participatory)
    );
    assert_eq!(doc.social_layer.primary_impact, Some(SocialImpact::Conscience));
    assert_eq!(doc.creative_constraints.custom_constraint, "no sound");
}

#[test]
fn test_supporting_method_never_offers_the_main_method() {
    let (_dir, mut state) = test_state();
    type_into_focused(&mut state, "climate");
    state.commit_current();

    // main = speculative, then cycle supporting through every option
    cycle(&mut state);
    next_field(&mut state);
    let draft = state.draft.as_mut().unwrap();
    let option_count = draft.choice_options(1).len();
    for _ in 0..option_count * 2 {
        draft.cycle_choice(true);
        assert_ne!(draft.value(1), "speculative");
    }
}

#[test]
fn test_completed_wizard_survives_a_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(SNAPSHOT_FILE);

    {
        let mut state = AppState::new(ConceptStore::open(&path));
        state.export_dir = dir.path().to_path_buf();
        complete_all_steps(&mut state);
    }

    let state = AppState::new(ConceptStore::open(&path));
    assert!(state.gate().is_reachable(SUMMARY_VIEW));
    assert_eq!(state.store.document().theme_matrix.theme, "climate");
    assert_eq!(
        state.store.document().social_layer.takeaway,
        "my choices are part of the tide"
    );
}

#[test]
fn test_summary_export_uses_slugged_file_name() {
    let (dir, mut state) = test_state();
    complete_all_steps(&mut state);
    state.start_title_edit();
    for _ in 0.."New Museum Concept".chars().count() {
        state.title_backspace();
    }
    for c in "Ocean Futures".chars() {
        state.title_input_char(c);
    }
    state.commit_title();

    state.export_markdown();
    let exported = dir.path().join("ocean-futures-concept.md");
    assert!(exported.exists());

    let markdown = std::fs::read_to_string(exported).unwrap();
    assert!(markdown.starts_with("# Museum Genesis Lab: Ocean Futures"));
    assert!(markdown.contains("climate"));
    assert!(markdown.contains("no sound"));
}

#[test]
fn test_going_back_from_summary_does_not_lock_anything() {
    let (_dir, mut state) = test_state();
    complete_all_steps(&mut state);

    state.go_back();
    assert_eq!(state.active_view, 5);
    state.try_goto(0);
    assert_eq!(state.active_view, 0);
    assert!(state.gate().is_reachable(SUMMARY_VIEW));
}
