// ABOUTME: Top-level layout: header, active view, status line and overlays

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::AppState;

use super::confirmation_dialog::ConfirmationDialogComponent;
use super::header::HeaderComponent;
use super::help::HelpComponent;
use super::step_form::StepFormComponent;
use super::summary_view::SummaryViewComponent;
use super::{DARK_BG, WARNING_YELLOW};

pub struct LayoutComponent {
    header: HeaderComponent,
    step_form: StepFormComponent,
    summary: SummaryViewComponent,
    dialog: ConfirmationDialogComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            header: HeaderComponent::new(),
            step_form: StepFormComponent::new(),
            summary: SummaryViewComponent::new(),
            dialog: ConfirmationDialogComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),  // Header
                Constraint::Min(12),    // Active view
                Constraint::Length(1),  // Status line
            ])
            .split(area);

        self.header.render(frame, layout[0], state);

        if state.draft.is_some() {
            self.step_form.render(frame, layout[1], state);
        } else {
            self.summary.render(frame, layout[1], state);
        }

        self.render_status(frame, layout[2], state);

        if state.help_visible {
            self.help.render(frame, area);
        }
        self.dialog.render(frame, area, state);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        if let Some(message) = &state.status_message {
            let status = Paragraph::new(Span::styled(
                format!(" {message}"),
                Style::default().fg(WARNING_YELLOW),
            ));
            frame.render_widget(status, area);
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
