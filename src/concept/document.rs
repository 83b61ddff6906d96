// ABOUTME: The persisted concept document and its per-section merge patches
// Serde shape stays camelCase-compatible with the legacy localStorage export

use serde::{Deserialize, Serialize};

use super::methods::{DesignMethod, SocialImpact};

/// Serializes optional enum ids the way the legacy document did: an empty
/// string for "not selected", the raw id otherwise. Unknown ids are a parse
/// error so a corrupted document falls back to defaults as a whole.
mod opt_id {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(v) => v.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(id) => id.parse::<T>().map(Some).map_err(de::Error::custom),
        }
    }
}

/// Step 1: substantive anchor points for the concept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeMatrixSection {
    pub theme: String,
    pub urgent: String,
    pub underexposed: String,
    pub appeals_to_all: String,
}

/// Step 2: main and supporting design methods
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignPhilosophySection {
    #[serde(with = "opt_id")]
    pub main_method: Option<DesignMethod>,
    #[serde(with = "opt_id")]
    pub supporting_method: Option<DesignMethod>,
    pub method_description: String,
}

/// Step 3: self-imposed constraints that shape the concept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreativeConstraintsSection {
    pub no_screens: String,
    pub mobile_concept: String,
    pub active_visitors: String,
    pub custom_constraint: String,
}

/// Step 4: the message-to-experience transformation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtifactExperienceSection {
    pub message: String,
    pub experience: String,
}

/// Step 5: minimum viable concept, testing and scaling plans
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModularApproachSection {
    pub initial_concept: String,
    pub testing_plan: String,
    pub scaling_ideas: String,
}

/// Step 6: intended social impact and visitor takeaway
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLayerSection {
    #[serde(with = "opt_id")]
    pub primary_impact: Option<SocialImpact>,
    pub takeaway: String,
}

impl ThemeMatrixSection {
    pub fn is_empty(&self) -> bool {
        self.theme.trim().is_empty()
            && self.urgent.trim().is_empty()
            && self.underexposed.trim().is_empty()
            && self.appeals_to_all.trim().is_empty()
    }
}

impl DesignPhilosophySection {
    pub fn is_empty(&self) -> bool {
        self.main_method.is_none()
            && self.supporting_method.is_none()
            && self.method_description.trim().is_empty()
    }
}

impl CreativeConstraintsSection {
    pub fn is_empty(&self) -> bool {
        self.no_screens.trim().is_empty()
            && self.mobile_concept.trim().is_empty()
            && self.active_visitors.trim().is_empty()
            && self.custom_constraint.trim().is_empty()
    }
}

impl ArtifactExperienceSection {
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty() && self.experience.trim().is_empty()
    }
}

impl ModularApproachSection {
    pub fn is_empty(&self) -> bool {
        self.initial_concept.trim().is_empty()
            && self.testing_plan.trim().is_empty()
            && self.scaling_ideas.trim().is_empty()
    }
}

impl SocialLayerSection {
    pub fn is_empty(&self) -> bool {
        self.primary_impact.is_none() && self.takeaway.trim().is_empty()
    }
}

pub const DEFAULT_TITLE: &str = "New Museum Concept";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// The single persisted aggregate describing one museum concept draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConceptDocument {
    #[serde(default = "default_title")]
    pub title: String,
    /// Gating counter: index of the furthest view unlocked so far.
    /// Serialized as `stepCompleted` for compatibility with old exports.
    #[serde(rename = "stepCompleted", alias = "highestStepReached")]
    pub highest_step_reached: usize,
    pub theme_matrix: ThemeMatrixSection,
    pub design_philosophy: DesignPhilosophySection,
    pub creative_constraints: CreativeConstraintsSection,
    pub artifact_experience: ArtifactExperienceSection,
    pub modular_approach: ModularApproachSection,
    pub social_layer: SocialLayerSection,
}

impl Default for ConceptDocument {
    fn default() -> Self {
        Self {
            title: default_title(),
            highest_step_reached: 0,
            theme_matrix: ThemeMatrixSection::default(),
            design_philosophy: DesignPhilosophySection::default(),
            creative_constraints: CreativeConstraintsSection::default(),
            artifact_experience: ArtifactExperienceSection::default(),
            modular_approach: ModularApproachSection::default(),
            social_layer: SocialLayerSection::default(),
        }
    }
}

/// Partial update for the theme matrix; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct ThemeMatrixPatch {
    pub theme: Option<String>,
    pub urgent: Option<String>,
    pub underexposed: Option<String>,
    pub appeals_to_all: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DesignPhilosophyPatch {
    pub main_method: Option<Option<DesignMethod>>,
    pub supporting_method: Option<Option<DesignMethod>>,
    pub method_description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreativeConstraintsPatch {
    pub no_screens: Option<String>,
    pub mobile_concept: Option<String>,
    pub active_visitors: Option<String>,
    pub custom_constraint: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ArtifactExperiencePatch {
    pub message: Option<String>,
    pub experience: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ModularApproachPatch {
    pub initial_concept: Option<String>,
    pub testing_plan: Option<String>,
    pub scaling_ideas: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SocialLayerPatch {
    pub primary_impact: Option<Option<SocialImpact>>,
    pub takeaway: Option<String>,
}

fn merge(target: &mut String, value: Option<String>) {
    if let Some(v) = value {
        *target = v;
    }
}

/// A partial update addressed to exactly one section of the document
#[derive(Debug, Clone)]
pub enum SectionPatch {
    ThemeMatrix(ThemeMatrixPatch),
    DesignPhilosophy(DesignPhilosophyPatch),
    CreativeConstraints(CreativeConstraintsPatch),
    ArtifactExperience(ArtifactExperiencePatch),
    ModularApproach(ModularApproachPatch),
    SocialLayer(SocialLayerPatch),
}

impl SectionPatch {
    /// Section name as it appears in the persisted document
    pub fn section_name(&self) -> &'static str {
        match self {
            Self::ThemeMatrix(_) => "themeMatrix",
            Self::DesignPhilosophy(_) => "designPhilosophy",
            Self::CreativeConstraints(_) => "creativeConstraints",
            Self::ArtifactExperience(_) => "artifactExperience",
            Self::ModularApproach(_) => "modularApproach",
            Self::SocialLayer(_) => "socialLayer",
        }
    }

    /// Merge this patch into the document, leaving everything else untouched
    pub fn apply(self, doc: &mut ConceptDocument) {
        match self {
            Self::ThemeMatrix(p) => {
                merge(&mut doc.theme_matrix.theme, p.theme);
                merge(&mut doc.theme_matrix.urgent, p.urgent);
                merge(&mut doc.theme_matrix.underexposed, p.underexposed);
                merge(&mut doc.theme_matrix.appeals_to_all, p.appeals_to_all);
            }
            Self::DesignPhilosophy(p) => {
                if let Some(m) = p.main_method {
                    doc.design_philosophy.main_method = m;
                }
                if let Some(m) = p.supporting_method {
                    doc.design_philosophy.supporting_method = m;
                }
                merge(
                    &mut doc.design_philosophy.method_description,
                    p.method_description,
                );
            }
            Self::CreativeConstraints(p) => {
                merge(&mut doc.creative_constraints.no_screens, p.no_screens);
                merge(&mut doc.creative_constraints.mobile_concept, p.mobile_concept);
                merge(&mut doc.creative_constraints.active_visitors, p.active_visitors);
                merge(
                    &mut doc.creative_constraints.custom_constraint,
                    p.custom_constraint,
                );
            }
            Self::ArtifactExperience(p) => {
                merge(&mut doc.artifact_experience.message, p.message);
                merge(&mut doc.artifact_experience.experience, p.experience);
            }
            Self::ModularApproach(p) => {
                merge(&mut doc.modular_approach.initial_concept, p.initial_concept);
                merge(&mut doc.modular_approach.testing_plan, p.testing_plan);
                merge(&mut doc.modular_approach.scaling_ideas, p.scaling_ideas);
            }
            Self::SocialLayer(p) => {
                if let Some(i) = p.primary_impact {
                    doc.social_layer.primary_impact = i;
                }
                merge(&mut doc.social_layer.takeaway, p.takeaway);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_document() {
        let doc = ConceptDocument::default();
        assert_eq!(doc.title, DEFAULT_TITLE);
        assert_eq!(doc.highest_step_reached, 0);
        assert!(doc.theme_matrix.is_empty());
        assert!(doc.design_philosophy.is_empty());
        assert!(doc.social_layer.is_empty());
    }

    #[test]
    fn test_patch_merges_only_named_fields() {
        let mut doc = ConceptDocument::default();
        doc.theme_matrix.urgent = "melting ice".to_string();

        SectionPatch::ThemeMatrix(ThemeMatrixPatch {
            theme: Some("climate".to_string()),
            ..Default::default()
        })
        .apply(&mut doc);

        assert_eq!(doc.theme_matrix.theme, "climate");
        assert_eq!(doc.theme_matrix.urgent, "melting ice");
        assert!(doc.artifact_experience.is_empty());
    }

    #[test]
    fn test_patch_can_clear_a_selection() {
        let mut doc = ConceptDocument::default();
        doc.design_philosophy.main_method = Some(DesignMethod::Critical);

        SectionPatch::DesignPhilosophy(DesignPhilosophyPatch {
            main_method: Some(None),
            ..Default::default()
        })
        .apply(&mut doc);

        assert_eq!(doc.design_philosophy.main_method, None);
    }

    #[test]
    fn test_serde_shape_matches_legacy_export() {
        let mut doc = ConceptDocument::default();
        doc.design_philosophy.main_method = Some(DesignMethod::Speculative);
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["stepCompleted"], 0);
        assert_eq!(json["themeMatrix"]["appealsToAll"], "");
        assert_eq!(json["designPhilosophy"]["mainMethod"], "speculative");
        assert_eq!(json["designPhilosophy"]["supportingMethod"], "");
        assert_eq!(json["socialLayer"]["primaryImpact"], "");
    }

    #[test]
    fn test_legacy_export_round_trips() {
        let raw = r#"{
            "title": "Ocean Futures",
            "stepCompleted": 3,
            "themeMatrix": {"theme": "oceans", "urgent": "", "underexposed": "", "appealsToAll": ""},
            "designPhilosophy": {"mainMethod": "storytelling", "supportingMethod": "", "methodDescription": ""},
            "creativeConstraints": {"noScreens": "", "mobileConcept": "", "activeVisitors": "", "customConstraint": ""},
            "artifactExperience": {"message": "", "experience": ""},
            "modularApproach": {"initialConcept": "", "testingPlan": "", "scalingIdeas": ""},
            "socialLayer": {"primaryImpact": "", "takeaway": ""}
        }"#;

        let doc: ConceptDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.title, "Ocean Futures");
        assert_eq!(doc.highest_step_reached, 3);
        assert_eq!(
            doc.design_philosophy.main_method,
            Some(DesignMethod::Storytelling)
        );
        assert_eq!(doc.social_layer.primary_impact, None);

        let back: ConceptDocument =
            serde_json::from_str(&serde_json::to_string(&doc).unwrap()).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_unknown_enum_id_is_a_parse_error() {
        let raw = r#"{"designPhilosophy": {"mainMethod": "holographic"}}"#;
        assert!(serde_json::from_str::<ConceptDocument>(raw).is_err());
    }
}
