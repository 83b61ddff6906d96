// ABOUTME: Concept document model, persistence and step gating

pub mod document;
pub mod gate;
pub mod methods;
pub mod store;

pub use document::{ConceptDocument, SectionPatch};
pub use gate::{StepGate, SUMMARY_VIEW};
pub use methods::{DesignMethod, SocialImpact, UnknownIdError};
pub use store::ConceptStore;
