// ABOUTME: The editable, uncommitted copy of one step's section
// Hydrated from the store once per activation, merged back only on commit

use crate::concept::document::{
    ArtifactExperiencePatch, ConceptDocument, CreativeConstraintsPatch, DesignPhilosophyPatch,
    ModularApproachPatch, SectionPatch, SocialLayerPatch, ThemeMatrixPatch,
};
use crate::concept::{DesignMethod, SocialImpact};

use super::{FieldKind, WizardStep};

/// In-progress edit state for one wizard step.
///
/// Values are kept as raw strings aligned with the step's field specs;
/// choice fields hold the selected id or an empty string. Edits never write
/// through to the store: `to_patch` is only called by the commit action.
#[derive(Debug, Clone)]
pub struct StepDraft {
    step: WizardStep,
    values: Vec<String>,
    focused: usize,
    cursor: usize,
}

impl StepDraft {
    /// Snapshot the step's section from the document. This is a one-way
    /// hydration: later store changes do not re-sync an active draft.
    pub fn hydrate(step: WizardStep, doc: &ConceptDocument) -> Self {
        let values = match step {
            WizardStep::ThemeMatrix => vec![
                doc.theme_matrix.theme.clone(),
                doc.theme_matrix.urgent.clone(),
                doc.theme_matrix.underexposed.clone(),
                doc.theme_matrix.appeals_to_all.clone(),
            ],
            WizardStep::DesignPhilosophy => vec![
                id_or_empty(doc.design_philosophy.main_method.map(|m| m.id())),
                id_or_empty(doc.design_philosophy.supporting_method.map(|m| m.id())),
                doc.design_philosophy.method_description.clone(),
            ],
            WizardStep::CreativeConstraints => vec![
                doc.creative_constraints.no_screens.clone(),
                doc.creative_constraints.mobile_concept.clone(),
                doc.creative_constraints.active_visitors.clone(),
                doc.creative_constraints.custom_constraint.clone(),
            ],
            WizardStep::ArtifactExperience => vec![
                doc.artifact_experience.message.clone(),
                doc.artifact_experience.experience.clone(),
            ],
            WizardStep::ModularApproach => vec![
                doc.modular_approach.initial_concept.clone(),
                doc.modular_approach.testing_plan.clone(),
                doc.modular_approach.scaling_ideas.clone(),
            ],
            WizardStep::SocialLayer => vec![
                id_or_empty(doc.social_layer.primary_impact.map(|i| i.id())),
                doc.social_layer.takeaway.clone(),
            ],
        };

        let cursor = values[0].len();
        Self {
            step,
            values,
            focused: 0,
            cursor,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Raw value of the field at `index` (selected id for choice fields)
    pub fn value(&self, index: usize) -> &str {
        &self.values[index]
    }

    fn focused_kind(&self) -> FieldKind {
        self.step.fields()[self.focused].kind
    }

    /// Move focus to the next field, wrapping past the last one
    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.values.len();
        self.cursor = self.values[self.focused].len();
    }

    /// Move focus to the previous field, wrapping past the first one
    pub fn focus_previous(&mut self) {
        self.focused = (self.focused + self.values.len() - 1) % self.values.len();
        self.cursor = self.values[self.focused].len();
    }

    pub fn input_char(&mut self, c: char) {
        if self.focused_kind() != FieldKind::Text {
            return;
        }
        self.values[self.focused].insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.focused_kind() != FieldKind::Text || self.cursor == 0 {
            return;
        }
        let value = &mut self.values[self.focused];
        let prev = value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
        value.remove(prev);
        self.cursor = prev;
    }

    pub fn delete(&mut self) {
        if self.focused_kind() != FieldKind::Text {
            return;
        }
        let value = &mut self.values[self.focused];
        if self.cursor < value.len() {
            value.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.focused_kind() != FieldKind::Text {
            return;
        }
        let value = &self.values[self.focused];
        self.cursor = value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
    }

    pub fn cursor_right(&mut self) {
        if self.focused_kind() != FieldKind::Text {
            return;
        }
        let value = &self.values[self.focused];
        if self.cursor < value.len() {
            self.cursor += value[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.values[self.focused].len();
    }

    /// Selectable ids for the choice field at `index`.
    ///
    /// The supporting method offers a "none" entry and hides the id equal
    /// to the currently selected main method; the store itself does not
    /// re-check that restriction.
    pub fn choice_options(&self, index: usize) -> Vec<&'static str> {
        let spec = &self.step.fields()[index];
        match spec.kind {
            FieldKind::Text => Vec::new(),
            FieldKind::MethodChoice => {
                let ids = DesignMethod::all().iter().map(|m| m.id());
                if spec.key == "supportingMethod" {
                    let main = self.value(0);
                    std::iter::once("")
                        .chain(ids.filter(|id| *id != main))
                        .collect()
                } else {
                    ids.collect()
                }
            }
            FieldKind::ImpactChoice => SocialImpact::all().iter().map(|i| i.id()).collect(),
        }
    }

    /// Cycle the focused choice field through its options
    pub fn cycle_choice(&mut self, forward: bool) {
        let options = self.choice_options(self.focused);
        if options.is_empty() {
            return;
        }
        let current = self.values[self.focused].as_str();
        let next = match options.iter().position(|o| *o == current) {
            Some(i) if forward => (i + 1) % options.len(),
            Some(i) => (i + options.len() - 1) % options.len(),
            None => 0,
        };
        self.values[self.focused] = options[next].to_string();
    }

    /// The step's validity predicate over the draft (trimmed)
    pub fn is_valid(&self) -> bool {
        match self.step {
            WizardStep::ThemeMatrix => !self.values[0].trim().is_empty(),
            WizardStep::DesignPhilosophy => !self.values[0].is_empty(),
            WizardStep::CreativeConstraints => {
                self.values.iter().any(|v| !v.trim().is_empty())
            }
            WizardStep::ArtifactExperience => {
                !self.values[0].trim().is_empty() && !self.values[1].trim().is_empty()
            }
            WizardStep::ModularApproach => !self.values[0].trim().is_empty(),
            WizardStep::SocialLayer => !self.values[0].is_empty(),
        }
    }

    /// Build the full-section patch the commit action applies to the store
    pub fn to_patch(&self) -> SectionPatch {
        match self.step {
            WizardStep::ThemeMatrix => SectionPatch::ThemeMatrix(ThemeMatrixPatch {
                theme: Some(self.values[0].clone()),
                urgent: Some(self.values[1].clone()),
                underexposed: Some(self.values[2].clone()),
                appeals_to_all: Some(self.values[3].clone()),
            }),
            WizardStep::DesignPhilosophy => {
                SectionPatch::DesignPhilosophy(DesignPhilosophyPatch {
                    main_method: Some(self.values[0].parse().ok()),
                    supporting_method: Some(self.values[1].parse().ok()),
                    method_description: Some(self.values[2].clone()),
                })
            }
            WizardStep::CreativeConstraints => {
                SectionPatch::CreativeConstraints(CreativeConstraintsPatch {
                    no_screens: Some(self.values[0].clone()),
                    mobile_concept: Some(self.values[1].clone()),
                    active_visitors: Some(self.values[2].clone()),
                    custom_constraint: Some(self.values[3].clone()),
                })
            }
            WizardStep::ArtifactExperience => {
                SectionPatch::ArtifactExperience(ArtifactExperiencePatch {
                    message: Some(self.values[0].clone()),
                    experience: Some(self.values[1].clone()),
                })
            }
            WizardStep::ModularApproach => SectionPatch::ModularApproach(ModularApproachPatch {
                initial_concept: Some(self.values[0].clone()),
                testing_plan: Some(self.values[1].clone()),
                scaling_ideas: Some(self.values[2].clone()),
            }),
            WizardStep::SocialLayer => SectionPatch::SocialLayer(SocialLayerPatch {
                primary_impact: Some(self.values[0].parse().ok()),
                takeaway: Some(self.values[1].clone()),
            }),
        }
    }
}

fn id_or_empty(id: Option<&'static str>) -> String {
    id.unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hydration_snapshots_store_values() {
        let mut doc = ConceptDocument::default();
        doc.theme_matrix.theme = "climate".to_string();
        let draft = StepDraft::hydrate(WizardStep::ThemeMatrix, &doc);
        assert_eq!(draft.value(0), "climate");

        // later store changes do not re-sync the draft
        doc.theme_matrix.theme = "oceans".to_string();
        assert_eq!(draft.value(0), "climate");
    }

    #[test]
    fn test_text_editing() {
        let doc = ConceptDocument::default();
        let mut draft = StepDraft::hydrate(WizardStep::ThemeMatrix, &doc);
        draft.input_char('a');
        draft.input_char('b');
        assert_eq!(draft.value(0), "ab");
        draft.backspace();
        assert_eq!(draft.value(0), "a");
        draft.cursor_home();
        draft.delete();
        assert_eq!(draft.value(0), "");
    }

    #[test]
    fn test_theme_validity_requires_nonblank_theme() {
        let doc = ConceptDocument::default();
        let mut draft = StepDraft::hydrate(WizardStep::ThemeMatrix, &doc);
        assert!(!draft.is_valid());
        draft.input_char(' ');
        assert!(!draft.is_valid());
        draft.input_char('x');
        assert!(draft.is_valid());
    }

    #[test]
    fn test_constraints_validity_any_of_four() {
        let doc = ConceptDocument::default();
        let mut draft = StepDraft::hydrate(WizardStep::CreativeConstraints, &doc);
        assert!(!draft.is_valid());

        // only the custom constraint filled in
        draft.focus_next();
        draft.focus_next();
        draft.focus_next();
        for c in "no sound".chars() {
            draft.input_char(c);
        }
        assert_eq!(draft.value(3), "no sound");
        assert!(draft.is_valid());
    }

    #[test]
    fn test_artifact_validity_needs_both_fields() {
        let doc = ConceptDocument::default();
        let mut draft = StepDraft::hydrate(WizardStep::ArtifactExperience, &doc);
        draft.input_char('m');
        assert!(!draft.is_valid());
        draft.focus_next();
        draft.input_char('e');
        assert!(draft.is_valid());
    }

    #[test]
    fn test_supporting_method_options_skip_main() {
        let mut doc = ConceptDocument::default();
        doc.design_philosophy.main_method = Some(DesignMethod::Speculative);
        let draft = StepDraft::hydrate(WizardStep::DesignPhilosophy, &doc);

        let options = draft.choice_options(1);
        assert!(options.contains(&""));
        assert!(!options.contains(&"speculative"));
        assert!(options.contains(&"participatory"));
    }

    #[test]
    fn test_cycle_choice_selects_first_option_from_empty() {
        let doc = ConceptDocument::default();
        let mut draft = StepDraft::hydrate(WizardStep::SocialLayer, &doc);
        assert!(!draft.is_valid());
        draft.cycle_choice(true);
        assert_eq!(draft.value(0), "conscience");
        assert!(draft.is_valid());
    }

    #[test]
    fn test_commit_patch_carries_selection() {
        let doc = ConceptDocument::default();
        let mut draft = StepDraft::hydrate(WizardStep::DesignPhilosophy, &doc);
        draft.cycle_choice(true);
        assert!(draft.is_valid());

        let mut target = ConceptDocument::default();
        draft.to_patch().apply(&mut target);
        assert_eq!(
            target.design_philosophy.main_method,
            Some(DesignMethod::Speculative)
        );
        assert_eq!(target.design_philosophy.supporting_method, None);
    }

    #[test]
    fn test_choice_fields_ignore_text_edits() {
        let doc = ConceptDocument::default();
        let mut draft = StepDraft::hydrate(WizardStep::SocialLayer, &doc);
        draft.input_char('x');
        assert_eq!(draft.value(0), "");
    }
}
