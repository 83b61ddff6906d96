// ABOUTME: Summary view: read-only projection of the concept with export actions

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;
use crate::concept::ConceptDocument;

use super::{CORNFLOWER_BLUE, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE};

pub struct SummaryViewComponent;

impl SummaryViewComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(" Concept Summary ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(8),    // Summary body
                Constraint::Length(1), // Actions
            ])
            .split(inner);

        let lines = self.summary_lines(state.store.document());
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), layout[0]);
        self.render_actions(frame, layout[1], state);
    }

    fn summary_lines(&self, doc: &ConceptDocument) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                doc.title.clone(),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        // Reuse the plain-text digest; headings get the accent color
        for raw in crate::summary::plain_text(doc).lines().skip(2) {
            let styled = match raw.split_once(':') {
                Some((label, rest))
                    if label.chars().all(|c| c.is_uppercase() || c.is_whitespace()) =>
                {
                    Line::from(vec![
                        Span::styled(
                            format!("{label}:"),
                            Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(rest.to_string(), Style::default().fg(SOFT_WHITE)),
                    ])
                }
                _ => Line::from(Span::styled(
                    raw.to_string(),
                    Style::default().fg(SOFT_WHITE),
                )),
            };
            lines.push(styled);
        }
        lines
    }

    fn render_actions(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let copy_span = if state.copied() {
            Span::styled("[c] Copied! ✓  ", Style::default().fg(SELECTION_GREEN))
        } else {
            Span::styled("[c] Copy to Clipboard  ", Style::default().fg(SOFT_WHITE))
        };
        let hint = Line::from(vec![
            copy_span,
            Span::styled("[d] Download as Markdown  ", Style::default().fg(SOFT_WHITE)),
            Span::styled("[b] Back  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("[r] Reset  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("[q] Quit", Style::default().fg(MUTED_GRAY)),
        ]);
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), area);
    }
}

impl Default for SummaryViewComponent {
    fn default() -> Self {
        Self::new()
    }
}
