// ABOUTME: Integration tests for ConceptStore persistence and merge isolation

use genlab::concept::document::{
    ArtifactExperiencePatch, ConceptDocument, CreativeConstraintsPatch, DesignPhilosophyPatch,
    ThemeMatrixPatch,
};
use genlab::concept::{ConceptStore, DesignMethod, SectionPatch};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn temp_store() -> (TempDir, ConceptStore) {
    let dir = TempDir::new().unwrap();
    let store = ConceptStore::open(dir.path().join("concept.json"));
    (dir, store)
}

#[test]
fn test_updates_to_distinct_sections_are_isolated() {
    let (_dir, mut store) = temp_store();

    store.update(SectionPatch::ThemeMatrix(ThemeMatrixPatch {
        theme: Some("climate".to_string()),
        ..Default::default()
    }));
    store.update(SectionPatch::ArtifactExperience(ArtifactExperiencePatch {
        message: Some("the sea is changing".to_string()),
        ..Default::default()
    }));
    store.update(SectionPatch::ThemeMatrix(ThemeMatrixPatch {
        urgent: Some("tipping points".to_string()),
        ..Default::default()
    }));

    let doc = store.document();
    assert_eq!(doc.theme_matrix.theme, "climate");
    assert_eq!(doc.theme_matrix.urgent, "tipping points");
    assert_eq!(doc.artifact_experience.message, "the sea is changing");
    assert!(doc.artifact_experience.experience.is_empty());
    assert!(doc.modular_approach.initial_concept.is_empty());
}

#[test]
fn test_each_section_reflects_only_its_latest_merge() {
    let (_dir, mut store) = temp_store();

    store.update(SectionPatch::CreativeConstraints(CreativeConstraintsPatch {
        no_screens: Some("first".to_string()),
        ..Default::default()
    }));
    store.update(SectionPatch::CreativeConstraints(CreativeConstraintsPatch {
        no_screens: Some("second".to_string()),
        mobile_concept: Some("a travelling crate".to_string()),
        ..Default::default()
    }));

    let c = &store.document().creative_constraints;
    assert_eq!(c.no_screens, "second");
    assert_eq!(c.mobile_concept, "a travelling crate");
    assert!(c.active_visitors.is_empty());
}

#[test]
fn test_persist_load_round_trip_is_deep_equal() {
    let (_dir, mut store) = temp_store();
    store.update_title("Ocean Futures");
    store.update(SectionPatch::DesignPhilosophy(DesignPhilosophyPatch {
        main_method: Some(Some(DesignMethod::Speculative)),
        supporting_method: Some(Some(DesignMethod::Participatory)),
        method_description: Some("future scenarios on the museum floor".to_string()),
    }));
    store.mark_step_complete(2);
    store.persist().unwrap();

    let expected = store.document().clone();
    let mut reopened = ConceptStore::open(store.path());
    assert_eq!(*reopened.load(), expected);
}

#[test]
fn test_reset_restores_defaults_and_clears_snapshot() {
    let (_dir, mut store) = temp_store();
    store.update_title("Ocean Futures");
    store.mark_step_complete(6);
    store.persist().unwrap();

    store.reset().unwrap();
    assert_eq!(*store.document(), ConceptDocument::default());
    assert_eq!(*store.load(), ConceptDocument::default());
    assert!(!store.path().exists());
}

#[test]
fn test_store_accepts_supporting_method_equal_to_main() {
    // The equality restriction lives in the UI only; the data layer takes
    // whatever it is given.
    let (_dir, mut store) = temp_store();
    store.update(SectionPatch::DesignPhilosophy(DesignPhilosophyPatch {
        main_method: Some(Some(DesignMethod::Speculative)),
        supporting_method: Some(Some(DesignMethod::Speculative)),
        method_description: None,
    }));

    let dp = &store.document().design_philosophy;
    assert_eq!(dp.main_method, Some(DesignMethod::Speculative));
    assert_eq!(dp.supporting_method, Some(DesignMethod::Speculative));
}

#[test]
fn test_mark_step_complete_never_decreases() {
    let (_dir, mut store) = temp_store();
    for step in [1, 3, 2, 6, 4] {
        store.mark_step_complete(step);
    }
    assert_eq!(store.document().highest_step_reached, 6);
}
