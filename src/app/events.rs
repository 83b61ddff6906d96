// ABOUTME: Keyboard event mapping and processing for the wizard TUI

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::concept::SUMMARY_VIEW;
use crate::steps::FieldKind;

use super::state::AppState;

/// High-level actions the key handler can emit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    // Step form editing
    NextField,
    PreviousField,
    InputChar(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ChoiceNext,
    ChoicePrevious,
    // Navigation
    CommitStep,
    GoBack,
    GotoView(usize),
    // Document-level actions
    SaveConcept,
    RequestReset,
    CopySummary,
    ExportMarkdown,
    // Title editing
    StartTitleEdit,
    TitleInputChar(char),
    TitleBackspace,
    TitleCommit,
    TitleCancel,
    // Confirmation dialog
    ConfirmationToggle,
    ConfirmationConfirm,
    ConfirmationCancel,
}

pub struct EventHandler;

impl EventHandler {
    /// Translate a key press into an app event, depending on what is
    /// focused: dialog > title editor > summary view > step form.
    pub fn handle_key_event(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if state.confirmation_dialog.is_some() {
            return Self::handle_dialog_key(key);
        }
        if state.title_editor.is_some() {
            return Self::handle_title_key(key);
        }

        // Global chords work in every view
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => return Some(AppEvent::Quit),
                KeyCode::Char('s') => return Some(AppEvent::SaveConcept),
                KeyCode::Char('t') => return Some(AppEvent::StartTitleEdit),
                KeyCode::Char('r') => return Some(AppEvent::RequestReset),
                KeyCode::Char('h') => return Some(AppEvent::ToggleHelp),
                _ => {}
            }
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            if let KeyCode::Char(c @ '1'..='7') = key.code {
                let view = c as usize - '1' as usize;
                return Some(AppEvent::GotoView(view));
            }
        }
        if key.code == KeyCode::F(1) {
            return Some(AppEvent::ToggleHelp);
        }

        if state.active_view == SUMMARY_VIEW {
            Self::handle_summary_key(key)
        } else {
            Self::handle_form_key(key, state)
        }
    }

    fn handle_dialog_key(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => Some(AppEvent::ConfirmationToggle),
            KeyCode::Enter => Some(AppEvent::ConfirmationConfirm),
            KeyCode::Esc | KeyCode::Char('n') => Some(AppEvent::ConfirmationCancel),
            KeyCode::Char('y') => Some(AppEvent::ConfirmationConfirm),
            _ => None,
        }
    }

    fn handle_title_key(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Enter => Some(AppEvent::TitleCommit),
            KeyCode::Esc => Some(AppEvent::TitleCancel),
            KeyCode::Backspace => Some(AppEvent::TitleBackspace),
            KeyCode::Char(c) => Some(AppEvent::TitleInputChar(c)),
            _ => None,
        }
    }

    fn handle_summary_key(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('c') => Some(AppEvent::CopySummary),
            KeyCode::Char('d') | KeyCode::Char('e') => Some(AppEvent::ExportMarkdown),
            KeyCode::Char('b') | KeyCode::Left | KeyCode::Backspace => Some(AppEvent::GoBack),
            KeyCode::Char('r') => Some(AppEvent::RequestReset),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char(c @ '1'..='7') => {
                Some(AppEvent::GotoView(c as usize - '1' as usize))
            }
            _ => None,
        }
    }

    fn handle_form_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        let on_choice = state
            .draft
            .as_ref()
            .map(|d| d.step().fields()[d.focused()].kind != FieldKind::Text)
            .unwrap_or(false);

        match key.code {
            KeyCode::Esc => Some(AppEvent::GoBack),
            KeyCode::Enter => Some(AppEvent::CommitStep),
            KeyCode::Tab | KeyCode::Down => Some(AppEvent::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(AppEvent::PreviousField),
            KeyCode::Left if on_choice => Some(AppEvent::ChoicePrevious),
            KeyCode::Right if on_choice => Some(AppEvent::ChoiceNext),
            KeyCode::Char(' ') if on_choice => Some(AppEvent::ChoiceNext),
            KeyCode::Left => Some(AppEvent::CursorLeft),
            KeyCode::Right => Some(AppEvent::CursorRight),
            KeyCode::Home => Some(AppEvent::CursorHome),
            KeyCode::End => Some(AppEvent::CursorEnd),
            KeyCode::Backspace => Some(AppEvent::Backspace),
            KeyCode::Delete => Some(AppEvent::Delete),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::InputChar(c))
            }
            _ => None,
        }
    }

    /// Apply an event to the state
    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!("Processing event: {:?}", event);
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),

            AppEvent::NextField => {
                if let Some(draft) = &mut state.draft {
                    draft.focus_next();
                }
            }
            AppEvent::PreviousField => {
                if let Some(draft) = &mut state.draft {
                    draft.focus_previous();
                }
            }
            AppEvent::InputChar(c) => {
                if let Some(draft) = &mut state.draft {
                    draft.input_char(c);
                }
            }
            AppEvent::Backspace => {
                if let Some(draft) = &mut state.draft {
                    draft.backspace();
                }
            }
            AppEvent::Delete => {
                if let Some(draft) = &mut state.draft {
                    draft.delete();
                }
            }
            AppEvent::CursorLeft => {
                if let Some(draft) = &mut state.draft {
                    draft.cursor_left();
                }
            }
            AppEvent::CursorRight => {
                if let Some(draft) = &mut state.draft {
                    draft.cursor_right();
                }
            }
            AppEvent::CursorHome => {
                if let Some(draft) = &mut state.draft {
                    draft.cursor_home();
                }
            }
            AppEvent::CursorEnd => {
                if let Some(draft) = &mut state.draft {
                    draft.cursor_end();
                }
            }
            AppEvent::ChoiceNext => {
                if let Some(draft) = &mut state.draft {
                    draft.cycle_choice(true);
                }
            }
            AppEvent::ChoicePrevious => {
                if let Some(draft) = &mut state.draft {
                    draft.cycle_choice(false);
                }
            }

            AppEvent::CommitStep => state.commit_current(),
            AppEvent::GoBack => state.go_back(),
            AppEvent::GotoView(view) => state.try_goto(view),

            AppEvent::SaveConcept => state.save_now(),
            AppEvent::RequestReset => state.request_reset(),
            AppEvent::CopySummary => state.copy_summary(),
            AppEvent::ExportMarkdown => state.export_markdown(),

            AppEvent::StartTitleEdit => state.start_title_edit(),
            AppEvent::TitleInputChar(c) => state.title_input_char(c),
            AppEvent::TitleBackspace => state.title_backspace(),
            AppEvent::TitleCommit => state.commit_title(),
            AppEvent::TitleCancel => state.cancel_title_edit(),

            AppEvent::ConfirmationToggle => state.toggle_confirmation(),
            AppEvent::ConfirmationConfirm => state.confirm_dialog(),
            AppEvent::ConfirmationCancel => state.cancel_confirmation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concept::store::SNAPSHOT_FILE;
    use crate::concept::ConceptStore;
    use tempfile::TempDir;

    fn test_state() -> (TempDir, AppState) {
        let dir = TempDir::new().unwrap();
        let store = ConceptStore::open(dir.path().join(SNAPSHOT_FILE));
        let state = AppState::new(store);
        (dir, state)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_plain_chars_type_into_form() {
        let (_dir, state) = test_state();
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('q')), &state),
            Some(AppEvent::InputChar('q'))
        );
    }

    #[test]
    fn test_ctrl_q_quits_from_form() {
        let (_dir, state) = test_state();
        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(
            EventHandler::handle_key_event(quit, &state),
            Some(AppEvent::Quit)
        );
    }

    #[test]
    fn test_enter_commits_step() {
        let (_dir, state) = test_state();
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Enter), &state),
            Some(AppEvent::CommitStep)
        );
    }

    #[test]
    fn test_arrows_cycle_choice_on_choice_fields() {
        let (_dir, mut state) = test_state();
        // unlock and move to the design philosophy step
        for c in "climate".chars() {
            EventHandler::process_event(AppEvent::InputChar(c), &mut state);
        }
        EventHandler::process_event(AppEvent::CommitStep, &mut state);
        assert_eq!(state.active_view, 1);

        // focused field is the main method choice
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Right), &state),
            Some(AppEvent::ChoiceNext)
        );
        EventHandler::process_event(AppEvent::ChoiceNext, &mut state);
        assert_eq!(state.draft.as_ref().unwrap().value(0), "speculative");
    }

    #[test]
    fn test_dialog_captures_keys() {
        let (_dir, mut state) = test_state();
        EventHandler::process_event(AppEvent::RequestReset, &mut state);
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('y')), &state),
            Some(AppEvent::ConfirmationConfirm)
        );
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Esc), &state),
            Some(AppEvent::ConfirmationCancel)
        );
    }

    #[test]
    fn test_title_editor_captures_keys() {
        let (_dir, mut state) = test_state();
        EventHandler::process_event(AppEvent::StartTitleEdit, &mut state);
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('x')), &state),
            Some(AppEvent::TitleInputChar('x'))
        );
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Enter), &state),
            Some(AppEvent::TitleCommit)
        );
    }

    #[test]
    fn test_summary_view_shortcuts() {
        let (_dir, mut state) = test_state();
        // unlock everything, then jump to the summary
        state.store.mark_step_complete(6);
        state.try_goto(SUMMARY_VIEW);
        assert_eq!(state.active_view, SUMMARY_VIEW);

        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('c')), &state),
            Some(AppEvent::CopySummary)
        );
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('d')), &state),
            Some(AppEvent::ExportMarkdown)
        );
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('q')), &state),
            Some(AppEvent::Quit)
        );
    }
}
