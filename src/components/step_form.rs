// ABOUTME: Generic step form renderer: labels, text inputs and choice lists
// One instance renders whichever step is active, driven by its field specs

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;
use crate::concept::{DesignMethod, SocialImpact};
use crate::steps::{FieldKind, StepDraft, WizardStep};

use super::{
    CORNFLOWER_BLUE, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE, SUBDUED_BORDER,
};

pub struct StepFormComponent;

impl StepFormComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(draft) = &state.draft else {
            return;
        };
        let step = draft.step();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(
                " Step {} of {} · {} ",
                step.number(),
                WizardStep::total(),
                step.tool_name()
            ))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Step title
                Constraint::Length(2), // Description
                Constraint::Min(6),    // Fields
                Constraint::Length(1), // Navigation hint
            ])
            .split(inner);

        let title = Paragraph::new(Span::styled(
            step.title(),
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, layout[0]);

        let description = Paragraph::new(Span::styled(
            step.description(),
            Style::default().fg(MUTED_GRAY),
        ))
        .wrap(Wrap { trim: true });
        frame.render_widget(description, layout[1]);

        self.render_fields(frame, layout[2], draft);
        self.render_nav_hint(frame, layout[3], state);
    }

    fn render_fields(&self, frame: &mut Frame, area: Rect, draft: &StepDraft) {
        let mut lines: Vec<Line> = Vec::new();

        for (index, spec) in draft.step().fields().iter().enumerate() {
            let focused = index == draft.focused();
            let marker = if focused { "▸ " } else { "  " };
            let label_style = if focused {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(SOFT_WHITE)
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(GOLD)),
                Span::styled(spec.label, label_style),
            ]));

            match spec.kind {
                FieldKind::Text => {
                    lines.push(self.text_value_line(draft, index, spec.placeholder, focused));
                }
                FieldKind::MethodChoice => {
                    lines.extend(self.method_choice_lines(draft, index, focused));
                }
                FieldKind::ImpactChoice => {
                    lines.extend(self.impact_choice_lines(draft, index, focused));
                }
            }
            lines.push(Line::from(""));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }

    fn text_value_line(
        &self,
        draft: &StepDraft,
        index: usize,
        placeholder: &'static str,
        focused: bool,
    ) -> Line<'static> {
        let value = draft.value(index);
        if value.is_empty() && !focused {
            return Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    placeholder,
                    Style::default().fg(MUTED_GRAY).add_modifier(Modifier::ITALIC),
                ),
            ]);
        }

        let mut spans = vec![Span::raw("    ")];
        if focused {
            let cursor = draft.cursor();
            spans.push(Span::styled(
                value[..cursor].to_string(),
                Style::default().fg(SOFT_WHITE),
            ));
            let (under_cursor, rest) = match value[cursor..].chars().next() {
                Some(c) => (
                    c.to_string(),
                    value[cursor + c.len_utf8()..].to_string(),
                ),
                None => (" ".to_string(), String::new()),
            };
            spans.push(Span::styled(
                under_cursor,
                Style::default().fg(PANEL_BG).bg(GOLD),
            ));
            spans.push(Span::styled(rest, Style::default().fg(SOFT_WHITE)));
        } else {
            spans.push(Span::styled(
                value.to_string(),
                Style::default().fg(SOFT_WHITE),
            ));
        }
        Line::from(spans)
    }

    fn method_choice_lines(
        &self,
        draft: &StepDraft,
        index: usize,
        focused: bool,
    ) -> Vec<Line<'static>> {
        let selected = draft.value(index).to_string();
        let main = draft.value(0).to_string();
        let is_supporting = index == 1;

        DesignMethod::all()
            .iter()
            .map(|method| {
                let disabled = is_supporting && method.id() == main;
                let is_selected = method.id() == selected;
                self.option_line(
                    method.title(),
                    method.description(),
                    is_selected,
                    disabled,
                    focused,
                )
            })
            .collect()
    }

    fn impact_choice_lines(
        &self,
        draft: &StepDraft,
        index: usize,
        focused: bool,
    ) -> Vec<Line<'static>> {
        let selected = draft.value(index).to_string();
        SocialImpact::all()
            .iter()
            .map(|impact| {
                let is_selected = impact.id() == selected;
                self.option_line(impact.title(), impact.description(), is_selected, false, focused)
            })
            .collect()
    }

    fn option_line(
        &self,
        title: &'static str,
        description: &'static str,
        selected: bool,
        disabled: bool,
        focused: bool,
    ) -> Line<'static> {
        let (icon, icon_style) = if selected {
            ("◉", Style::default().fg(SELECTION_GREEN))
        } else {
            ("○", Style::default().fg(MUTED_GRAY))
        };
        let title_style = if disabled {
            Style::default().fg(SUBDUED_BORDER)
        } else if selected && focused {
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SOFT_WHITE)
        };
        Line::from(vec![
            Span::raw("    "),
            Span::styled(icon, icon_style),
            Span::raw(" "),
            Span::styled(title, title_style),
            Span::styled(format!("  {description}"), Style::default().fg(MUTED_GRAY)),
        ])
    }

    fn render_nav_hint(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let next_hint = if state.can_commit() {
            Span::styled("[Enter] Next", Style::default().fg(SELECTION_GREEN))
        } else {
            Span::styled("[Enter] Next (fill required fields)", Style::default().fg(MUTED_GRAY))
        };
        let hint = Line::from(vec![
            Span::styled("[Esc] Back  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("[Tab] Field  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("[←/→] Select  ", Style::default().fg(MUTED_GRAY)),
            next_hint,
        ]);
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), area);
    }
}

impl Default for StepFormComponent {
    fn default() -> Self {
        Self::new()
    }
}
