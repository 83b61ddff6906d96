// ABOUTME: Closed enumerations for design methods and social impacts
// Each id carries a display title and a one-line description for the forms

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a raw id does not belong to a closed enumeration
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} id: {id}")]
pub struct UnknownIdError {
    pub kind: &'static str,
    pub id: String,
}

/// Design methods a concept can be built around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignMethod {
    Speculative,
    Participatory,
    Critical,
    Systemic,
    Storytelling,
}

impl DesignMethod {
    /// All methods in presentation order
    pub fn all() -> &'static [DesignMethod] {
        &[
            Self::Speculative,
            Self::Participatory,
            Self::Critical,
            Self::Systemic,
            Self::Storytelling,
        ]
    }

    /// Stable id used in the persisted document
    pub fn id(&self) -> &'static str {
        match self {
            Self::Speculative => "speculative",
            Self::Participatory => "participatory",
            Self::Critical => "critical",
            Self::Systemic => "systemic",
            Self::Storytelling => "storytelling",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Speculative => "Speculative design",
            Self::Participatory => "Participatory design",
            Self::Critical => "Critical design",
            Self::Systemic => "Systemic design",
            Self::Storytelling => "Immersive storytelling",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Speculative => "What if... (future scenarios)",
            Self::Participatory => "Learning by doing",
            Self::Critical => "Expose instead of solve",
            Self::Systemic => "Making layers of a complex problem visible",
            Self::Storytelling => "Immersing the visitor in an experience",
        }
    }
}

impl FromStr for DesignMethod {
    type Err = UnknownIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|m| m.id() == s)
            .ok_or_else(|| UnknownIdError {
                kind: "design method",
                id: s.to_string(),
            })
    }
}

impl fmt::Display for DesignMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Social impacts a concept can aim for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialImpact {
    Conscience,
    Reflection,
    Empowerment,
    Vocabulary,
}

impl SocialImpact {
    /// All impacts in presentation order
    pub fn all() -> &'static [SocialImpact] {
        &[
            Self::Conscience,
            Self::Reflection,
            Self::Empowerment,
            Self::Vocabulary,
        ]
    }

    /// Stable id used in the persisted document
    pub fn id(&self) -> &'static str {
        match self {
            Self::Conscience => "conscience",
            Self::Reflection => "reflection",
            Self::Empowerment => "empowerment",
            Self::Vocabulary => "vocabulary",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Conscience => "Conscience",
            Self::Reflection => "Critical reflection",
            Self::Empowerment => "Empowerment",
            Self::Vocabulary => "New vocabulary",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Conscience => "Build awareness and moral responsibility around the topic",
            Self::Reflection => "Encourage deep thinking and questioning assumptions",
            Self::Empowerment => "Enable visitors to take action or make a difference",
            Self::Vocabulary => "Introduce new concepts, terms, or ways of discussing the topic",
        }
    }
}

impl FromStr for SocialImpact {
    type Err = UnknownIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|i| i.id() == s)
            .ok_or_else(|| UnknownIdError {
                kind: "social impact",
                id: s.to_string(),
            })
    }
}

impl fmt::Display for SocialImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_id_round_trip() {
        for method in DesignMethod::all() {
            assert_eq!(method.id().parse::<DesignMethod>().unwrap(), *method);
        }
    }

    #[test]
    fn test_unknown_method_is_error() {
        let err = "holographic".parse::<DesignMethod>().unwrap_err();
        assert_eq!(err.id, "holographic");
    }

    #[test]
    fn test_impact_id_round_trip() {
        for impact in SocialImpact::all() {
            assert_eq!(impact.id().parse::<SocialImpact>().unwrap(), *impact);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&DesignMethod::Speculative).unwrap();
        assert_eq!(json, "\"speculative\"");
        let back: SocialImpact = serde_json::from_str("\"vocabulary\"").unwrap();
        assert_eq!(back, SocialImpact::Vocabulary);
    }
}
