// ABOUTME: Step gating: which of the seven views the user may navigate to

use super::document::ConceptDocument;

/// Index of the summary view, the last of the seven views
pub const SUMMARY_VIEW: usize = 6;

/// Decides which views are reachable given the document's gating counter
#[derive(Debug, Clone, Copy)]
pub struct StepGate {
    highest_step_reached: usize,
}

impl StepGate {
    pub fn new(highest_step_reached: usize) -> Self {
        Self {
            highest_step_reached,
        }
    }

    pub fn for_document(doc: &ConceptDocument) -> Self {
        Self::new(doc.highest_step_reached)
    }

    /// A view is reachable once a lower step's commit has unlocked it
    pub fn is_reachable(&self, view_index: usize) -> bool {
        view_index <= self.highest_step_reached
    }

    /// Forward/back requests clamp at the bounds; unreachable targets are
    /// dropped (returns the current view unchanged).
    pub fn navigate(&self, current: usize, target: usize) -> usize {
        let target = target.min(SUMMARY_VIEW);
        if self.is_reachable(target) {
            target
        } else {
            current
        }
    }
}
