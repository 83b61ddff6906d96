// ABOUTME: Step descriptors for the six-step wizard
// Each step binds to one document section and declares its form fields

pub mod draft;

pub use draft::StepDraft;

use crate::concept::ConceptDocument;

/// What kind of input a form field takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// One of the design methods
    MethodChoice,
    /// One of the social impacts
    ImpactChoice,
}

/// Static description of one form field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field key as it appears in the persisted section
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

const fn text(key: &'static str, label: &'static str, placeholder: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        label,
        placeholder,
        kind: FieldKind::Text,
    }
}

/// The six editable steps of the wizard, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    ThemeMatrix,
    DesignPhilosophy,
    CreativeConstraints,
    ArtifactExperience,
    ModularApproach,
    SocialLayer,
}

impl WizardStep {
    /// All steps in order
    pub fn all() -> &'static [WizardStep] {
        &[
            Self::ThemeMatrix,
            Self::DesignPhilosophy,
            Self::CreativeConstraints,
            Self::ArtifactExperience,
            Self::ModularApproach,
            Self::SocialLayer,
        ]
    }

    /// View index of this step (0-based; the summary view comes after)
    pub fn index(&self) -> usize {
        match self {
            Self::ThemeMatrix => 0,
            Self::DesignPhilosophy => 1,
            Self::CreativeConstraints => 2,
            Self::ArtifactExperience => 3,
            Self::ModularApproach => 4,
            Self::SocialLayer => 5,
        }
    }

    /// Step number for display (1-indexed)
    pub fn number(&self) -> usize {
        self.index() + 1
    }

    /// Total number of editable steps
    pub fn total() -> usize {
        6
    }

    /// The step bound to the given view index, if it is an editable step
    pub fn from_view(view_index: usize) -> Option<Self> {
        Self::all().get(view_index).copied()
    }

    /// View index this step's commit unlocks
    pub fn unlocks(&self) -> usize {
        self.index() + 1
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::ThemeMatrix => "Identify your substantive anchor points",
            Self::DesignPhilosophy => "Determine your design philosophy",
            Self::CreativeConstraints => "Use creative constraints",
            Self::ArtifactExperience => "Start from an artifact or experience, not a message",
            Self::ModularApproach => "Work modularly & iteratively",
            Self::SocialLayer => "Add a social layer",
        }
    }

    /// Short name used in the navigation tabs
    pub fn tab_label(&self) -> &'static str {
        match self {
            Self::ThemeMatrix => "Theme Matrix",
            Self::DesignPhilosophy => "Design Philosophy",
            Self::CreativeConstraints => "Creative Constraints",
            Self::ArtifactExperience => "Artifact Experience",
            Self::ModularApproach => "Modular Approach",
            Self::SocialLayer => "Social Layer",
        }
    }

    /// Name of the framework tool this step is based on
    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::ThemeMatrix => "Theme Matrix",
            Self::DesignPhilosophy => "Design Mode Selector",
            Self::CreativeConstraints => "Creative Constraints Cards",
            Self::ArtifactExperience => "From Message to Medium",
            Self::ModularApproach => "MVP Canvas for Museum Concepts",
            Self::SocialLayer => "Social Impact Framework",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ThemeMatrix => "Define the core elements that will ground your museum concept.",
            Self::DesignPhilosophy => {
                "What perspective do you want to use to tackle this theme?"
            }
            Self::CreativeConstraints => "Consciously limit yourself to stimulate creativity.",
            Self::ArtifactExperience => {
                "Good exhibitions are felt or experienced, not just understood. \
                 Transform abstract messages into tangible experiences."
            }
            Self::ModularApproach => {
                "Use micro-installations or 'experience modules' that you can quickly \
                 test or scale. Start small, test with real audiences, repeat."
            }
            Self::SocialLayer => {
                "What do you want the visitor to take home? What changes in their \
                 behavior or thinking?"
            }
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_view(self.index() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_view)
    }

    /// The form fields this step edits, in focus order
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::ThemeMatrix => const {
                &[
                text("theme", "Theme", "Enter your main theme or challenge..."),
                text(
                    "urgent",
                    "What makes it urgent?",
                    "What makes this theme timely and important...",
                ),
                text(
                    "underexposed",
                    "What is underexposed?",
                    "Aspects of this theme that aren't getting enough attention...",
                ),
                text(
                    "appealsToAll",
                    "Appeals to all ages",
                    "Elements that can engage all age groups...",
                ),
            ]
            },
            Self::DesignPhilosophy => const {
                &[
                FieldSpec {
                    key: "mainMethod",
                    label: "Main Method",
                    placeholder: "",
                    kind: FieldKind::MethodChoice,
                },
                FieldSpec {
                    key: "supportingMethod",
                    label: "Supporting Method",
                    placeholder: "",
                    kind: FieldKind::MethodChoice,
                },
                text(
                    "methodDescription",
                    "How will you apply these methods?",
                    "Explain how these methods will shape your museum concept...",
                ),
            ]
            },
            Self::CreativeConstraints => const {
                &[
                text(
                    "noScreens",
                    "No screens",
                    "How would your concept work without digital screens...",
                ),
                text(
                    "mobileConcept",
                    "Mobile exhibition",
                    "How could your concept be designed to travel or move...",
                ),
                text(
                    "activeVisitors",
                    "Active visitor participation",
                    "How could your concept involve active participation...",
                ),
                text(
                    "customConstraint",
                    "Your own constraint",
                    "What if...",
                ),
            ]
            },
            Self::ArtifactExperience => const {
                &[
                text(
                    "message",
                    "The message",
                    "Write the message or key concept here...",
                ),
                text(
                    "experience",
                    "The experience",
                    "Describe the interactive experience that brings this message to life...",
                ),
            ]
            },
            Self::ModularApproach => const {
                &[
                text(
                    "initialConcept",
                    "Minimum viable concept",
                    "Describe a small-scale version that captures the essence of your concept...",
                ),
                text(
                    "testingPlan",
                    "Testing approach",
                    "Outline your approach to gathering visitor feedback and measuring success...",
                ),
                text(
                    "scalingIdeas",
                    "Scaling potential",
                    "Describe potential expansion paths or ways to grow your concept...",
                ),
            ]
            },
            Self::SocialLayer => const {
                &[
                FieldSpec {
                    key: "primaryImpact",
                    label: "Primary impact",
                    placeholder: "",
                    kind: FieldKind::ImpactChoice,
                },
                text(
                    "takeaway",
                    "Visitor takeaway",
                    "What should visitors remember, feel, or do after their visit...",
                ),
            ]
            },
        }
    }

    /// Whether the stored section already satisfies this step's validity
    /// predicate. Used to re-mark restored documents complete on activation
    /// without requiring a resubmit.
    pub fn section_is_valid(&self, doc: &ConceptDocument) -> bool {
        match self {
            Self::ThemeMatrix => !doc.theme_matrix.theme.trim().is_empty(),
            Self::DesignPhilosophy => doc.design_philosophy.main_method.is_some(),
            Self::CreativeConstraints => {
                let c = &doc.creative_constraints;
                !c.no_screens.trim().is_empty()
                    || !c.mobile_concept.trim().is_empty()
                    || !c.active_visitors.trim().is_empty()
                    || !c.custom_constraint.trim().is_empty()
            }
            Self::ArtifactExperience => {
                !doc.artifact_experience.message.trim().is_empty()
                    && !doc.artifact_experience.experience.trim().is_empty()
            }
            Self::ModularApproach => !doc.modular_approach.initial_concept.trim().is_empty(),
            Self::SocialLayer => doc.social_layer.primary_impact.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concept::DesignMethod;

    #[test]
    fn test_step_order() {
        let step = WizardStep::ThemeMatrix;
        assert_eq!(step.next(), Some(WizardStep::DesignPhilosophy));
        assert_eq!(step.previous(), None);

        let step = WizardStep::SocialLayer;
        assert_eq!(step.next(), None);
        assert_eq!(step.previous(), Some(WizardStep::ModularApproach));
    }

    #[test]
    fn test_step_numbers_and_unlocks() {
        assert_eq!(WizardStep::ThemeMatrix.number(), 1);
        assert_eq!(WizardStep::SocialLayer.number(), 6);
        assert_eq!(WizardStep::total(), 6);
        assert_eq!(WizardStep::ThemeMatrix.unlocks(), 1);
        assert_eq!(WizardStep::SocialLayer.unlocks(), 6);
    }

    #[test]
    fn test_from_view() {
        assert_eq!(WizardStep::from_view(2), Some(WizardStep::CreativeConstraints));
        assert_eq!(WizardStep::from_view(6), None);
    }

    #[test]
    fn test_section_validity_for_restored_document() {
        let mut doc = ConceptDocument::default();
        assert!(!WizardStep::ThemeMatrix.section_is_valid(&doc));
        assert!(!WizardStep::DesignPhilosophy.section_is_valid(&doc));

        doc.theme_matrix.theme = "climate".to_string();
        doc.design_philosophy.main_method = Some(DesignMethod::Systemic);
        assert!(WizardStep::ThemeMatrix.section_is_valid(&doc));
        assert!(WizardStep::DesignPhilosophy.section_is_valid(&doc));
    }

    #[test]
    fn test_whitespace_only_section_is_invalid() {
        let mut doc = ConceptDocument::default();
        doc.modular_approach.initial_concept = "   ".to_string();
        assert!(!WizardStep::ModularApproach.section_is_valid(&doc));
    }
}
