// ABOUTME: Centered yes/no dialog used before resetting the concept

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;

use super::{GOLD, MUTED_GRAY, PANEL_BG, SOFT_WHITE, WARNING_YELLOW};

pub struct ConfirmationDialogComponent;

impl ConfirmationDialogComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(dialog) = &state.confirmation_dialog else {
            return;
        };

        let dialog_width = 60.min(area.width.saturating_sub(4));
        let dialog_height = 8;
        let dialog_area = Rect {
            x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
            y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
            width: dialog_width,
            height: dialog_height,
        };

        // Clear only the dialog area so the wizard stays visible behind it
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(dialog.title.clone())
            .title_style(Style::default().fg(WARNING_YELLOW).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(WARNING_YELLOW))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let message = Paragraph::new(dialog.message.clone())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(SOFT_WHITE));
        frame.render_widget(message, chunks[0]);

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        let (yes_style, no_style) = if dialog.selected_option {
            (
                Style::default().fg(PANEL_BG).bg(GOLD).add_modifier(Modifier::BOLD),
                Style::default().fg(MUTED_GRAY),
            )
        } else {
            (
                Style::default().fg(MUTED_GRAY),
                Style::default().fg(PANEL_BG).bg(GOLD).add_modifier(Modifier::BOLD),
            )
        };

        frame.render_widget(
            Paragraph::new(" Yes ").style(yes_style).alignment(Alignment::Center),
            buttons[0],
        );
        frame.render_widget(
            Paragraph::new(" No ").style(no_style).alignment(Alignment::Center),
            buttons[1],
        );
    }
}

impl Default for ConfirmationDialogComponent {
    fn default() -> Self {
        Self::new()
    }
}
