// ABOUTME: Application state for the wizard TUI
// Owns the concept store, the active view and the current step draft

use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::concept::{ConceptStore, StepGate};
use crate::export;
use crate::steps::{StepDraft, WizardStep};

/// How long the transient "Copied!" indicator stays visible
pub const COPIED_INDICATOR: Duration = Duration::from_secs(2);

/// Yes/no prompt shown before destructive actions
#[derive(Debug, Clone)]
pub struct ConfirmationDialog {
    pub title: String,
    pub message: String,
    pub selected_option: bool, // true = Yes, false = No
}

impl ConfirmationDialog {
    fn reset_concept() -> Self {
        Self {
            title: " Reset Concept ".to_string(),
            message: "Are you sure you want to reset your concept? This action cannot be undone."
                .to_string(),
            selected_option: false,
        }
    }
}

/// Inline editor state for the concept title in the header
#[derive(Debug, Clone)]
pub struct TitleEditor {
    pub value: String,
    pub cursor: usize,
}

/// Full state of the running wizard
pub struct AppState {
    pub store: ConceptStore,
    /// Active view index: 0..=5 are the editable steps, 6 is the summary
    pub active_view: usize,
    /// Draft for the active step; `None` on the summary view
    pub draft: Option<StepDraft>,
    pub should_quit: bool,
    pub help_visible: bool,
    pub confirmation_dialog: Option<ConfirmationDialog>,
    pub title_editor: Option<TitleEditor>,
    pub status_message: Option<String>,
    /// Where markdown exports are written in interactive mode
    pub export_dir: PathBuf,
    copied_at: Option<Instant>,
}

impl AppState {
    pub fn new(store: ConceptStore) -> Self {
        let mut state = Self {
            store,
            active_view: 0,
            draft: None,
            should_quit: false,
            help_visible: false,
            confirmation_dialog: None,
            title_editor: None,
            status_message: None,
            export_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            copied_at: None,
        };
        state.activate_view(0);
        state
    }

    /// The step bound to the active view, if it is an editable step
    pub fn current_step(&self) -> Option<WizardStep> {
        WizardStep::from_view(self.active_view)
    }

    pub fn gate(&self) -> StepGate {
        StepGate::for_document(self.store.document())
    }

    /// Whether the active step's commit action is currently enabled
    pub fn can_commit(&self) -> bool {
        self.draft.as_ref().map(|d| d.is_valid()).unwrap_or(false)
    }

    /// Whether the "Copied!" indicator should currently be shown
    pub fn copied(&self) -> bool {
        self.copied_at
            .map(|at| at.elapsed() < COPIED_INDICATOR)
            .unwrap_or(false)
    }

    /// Cosmetic tick: expire the transient copied indicator
    pub fn tick(&mut self) {
        if let Some(at) = self.copied_at {
            if at.elapsed() >= COPIED_INDICATOR {
                self.copied_at = None;
            }
        }
    }

    /// Switch to a view, hydrating a fresh draft for editable steps.
    ///
    /// Hydration also reconciles restored documents: a section that is
    /// already valid re-marks its step complete without a resubmit.
    fn activate_view(&mut self, view_index: usize) {
        self.active_view = view_index;
        self.draft = match WizardStep::from_view(view_index) {
            Some(step) => {
                if step.section_is_valid(self.store.document()) {
                    self.store.mark_step_complete(step.unlocks());
                }
                Some(StepDraft::hydrate(step, self.store.document()))
            }
            None => None,
        };
    }

    /// Navigate to the target view if the gate allows it. Moving away from
    /// a step discards its uncommitted draft.
    pub fn try_goto(&mut self, target: usize) {
        let next = self.gate().navigate(self.active_view, target);
        if next != self.active_view {
            self.activate_view(next);
        }
    }

    /// Navigate back one view; never validates or persists
    pub fn go_back(&mut self) {
        self.try_goto(self.active_view.saturating_sub(1));
    }

    /// Commit the active step: merge the draft, unlock the next view,
    /// persist, then advance. Disabled while the draft is invalid.
    pub fn commit_current(&mut self) {
        let Some(draft) = &self.draft else {
            return;
        };
        if !draft.is_valid() {
            return;
        }

        let step = draft.step();
        self.store.update(draft.to_patch());
        self.store.mark_step_complete(step.unlocks());
        self.persist_with_warning();
        info!("Committed step {} ({})", step.number(), step.tab_label());
        self.try_goto(step.unlocks());
    }

    /// Persist without committing anything (the header "save" action)
    pub fn save_now(&mut self) {
        self.persist_with_warning();
        if self.status_message.is_none() {
            self.status_message = Some("Concept saved".to_string());
        }
    }

    /// Persist, downgrading write failures to a status-line warning; the
    /// in-memory document stays authoritative either way.
    fn persist_with_warning(&mut self) {
        self.status_message = None;
        if let Err(e) = self.store.persist() {
            warn!("Failed to persist concept: {:#}", e);
            self.status_message = Some(format!("Warning: could not save ({e})"));
        }
    }

    pub fn request_reset(&mut self) {
        self.confirmation_dialog = Some(ConfirmationDialog::reset_concept());
    }

    pub fn toggle_confirmation(&mut self) {
        if let Some(dialog) = &mut self.confirmation_dialog {
            dialog.selected_option = !dialog.selected_option;
        }
    }

    pub fn cancel_confirmation(&mut self) {
        self.confirmation_dialog = None;
    }

    /// Apply the confirmed dialog action (reset is the only one)
    pub fn confirm_dialog(&mut self) {
        let Some(dialog) = self.confirmation_dialog.take() else {
            return;
        };
        if !dialog.selected_option {
            return;
        }
        if let Err(e) = self.store.reset() {
            warn!("Failed to clear saved concept: {:#}", e);
            self.status_message = Some(format!("Warning: could not clear saved file ({e})"));
        } else {
            self.status_message = Some("Concept reset".to_string());
        }
        self.title_editor = None;
        self.activate_view(0);
    }

    pub fn start_title_edit(&mut self) {
        let value = self.store.document().title.clone();
        let cursor = value.len();
        self.title_editor = Some(TitleEditor { value, cursor });
    }

    pub fn title_input_char(&mut self, c: char) {
        if let Some(editor) = &mut self.title_editor {
            editor.value.insert(editor.cursor, c);
            editor.cursor += c.len_utf8();
        }
    }

    pub fn title_backspace(&mut self) {
        if let Some(editor) = &mut self.title_editor {
            if let Some((i, _)) = editor.value[..editor.cursor].char_indices().next_back() {
                editor.value.remove(i);
                editor.cursor = i;
            }
        }
    }

    pub fn cancel_title_edit(&mut self) {
        self.title_editor = None;
    }

    /// Save the edited title and persist immediately
    pub fn commit_title(&mut self) {
        if let Some(editor) = self.title_editor.take() {
            self.store.update_title(editor.value);
            self.persist_with_warning();
        }
    }

    /// Copy the plain-text digest to the clipboard and arm the indicator
    pub fn copy_summary(&mut self) {
        match export::copy_to_clipboard(self.store.document()) {
            Ok(()) => {
                self.copied_at = Some(Instant::now());
                self.status_message = None;
            }
            Err(e) => {
                warn!("Clipboard copy failed: {:#}", e);
                self.status_message = Some(format!("Warning: clipboard unavailable ({e})"));
            }
        }
    }

    /// Write the markdown export into the launch directory, then persist
    /// the document (the original download flow saved as a side effect)
    pub fn export_markdown(&mut self) {
        match export::write_markdown(self.store.document(), &self.export_dir) {
            Ok(path) => {
                self.persist_with_warning();
                self.status_message
                    .get_or_insert_with(|| format!("Exported to {}", path.display()));
            }
            Err(e) => {
                warn!("Markdown export failed: {:#}", e);
                self.status_message = Some(format!("Warning: export failed ({e})"));
            }
        }
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
