// ABOUTME: Key binding overlay toggled with Ctrl+H

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::{CORNFLOWER_BLUE, GOLD, MUTED_GRAY, PANEL_BG, SOFT_WHITE};

const BINDINGS: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "Move between fields"),
    ("← / →", "Move cursor, or cycle a selection"),
    ("Enter", "Commit the step and continue"),
    ("Esc", "Go back one step"),
    ("Alt+1..7", "Jump to an unlocked step"),
    ("Ctrl+T", "Rename the concept"),
    ("Ctrl+S", "Save without advancing"),
    ("Ctrl+R", "Reset the concept"),
    ("Ctrl+H", "Toggle this help"),
    ("Ctrl+Q", "Quit"),
    ("c / d (summary)", "Copy digest / download markdown"),
];

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = 56.min(area.width.saturating_sub(4));
        let height = (BINDINGS.len() as u16 + 4).min(area.height.saturating_sub(2));
        let overlay = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .title(" Help ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(format!("  {keys:<16}"), Style::default().fg(GOLD)),
                    Span::styled(*action, Style::default().fg(SOFT_WHITE)),
                ])
            })
            .chain(std::iter::once(Line::from(Span::styled(
                "",
                Style::default().fg(MUTED_GRAY),
            ))))
            .collect();

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
