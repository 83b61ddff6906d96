// ABOUTME: Wizard header: editable concept title and the step navigation tabs

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::concept::SUMMARY_VIEW;
use crate::steps::WizardStep;

use super::{CORNFLOWER_BLUE, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE, SUBDUED_BORDER};

pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Step tabs
            ])
            .split(inner);

        self.render_title(frame, layout[0], state);
        self.render_tabs(frame, layout[1], state);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let line = match &state.title_editor {
            Some(editor) => Line::from(vec![
                Span::styled("✦ ", Style::default().fg(GOLD)),
                Span::styled(
                    editor.value.clone(),
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                ),
                Span::styled("▏", Style::default().fg(GOLD)),
                Span::styled(
                    "  Enter to save, Esc to cancel",
                    Style::default().fg(MUTED_GRAY),
                ),
            ]),
            None => Line::from(vec![
                Span::styled("✦ ", Style::default().fg(GOLD)),
                Span::styled(
                    state.store.document().title.clone(),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
                Span::styled("  (Ctrl+T to rename)", Style::default().fg(MUTED_GRAY)),
            ]),
        };
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let gate = state.gate();
        let mut spans: Vec<Span> = Vec::new();

        for step in WizardStep::all() {
            let view = step.index();
            let style = if view == state.active_view {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
            } else if gate.is_reachable(view) {
                Style::default().fg(SELECTION_GREEN)
            } else {
                Style::default().fg(MUTED_GRAY)
            };
            spans.push(Span::styled(
                format!("{}. {}", step.number(), step.tab_label()),
                style,
            ));
            spans.push(Span::styled("  ", Style::default().fg(SUBDUED_BORDER)));
        }

        let summary_style = if state.active_view == SUMMARY_VIEW {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else if gate.is_reachable(SUMMARY_VIEW) {
            Style::default().fg(SELECTION_GREEN)
        } else {
            Style::default().fg(MUTED_GRAY)
        };
        spans.push(Span::styled("Summary", summary_style));

        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }
}

impl Default for HeaderComponent {
    fn default() -> Self {
        Self::new()
    }
}
