//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the status bar shows on its left side
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    /// Index of the selected record, if any
    pub selected: Option<usize>,
    pub total_records: usize,
    pub selected_is_error: bool,
    /// Statement being typed, when in input mode
    pub input: Option<&'a str>,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bar_bg = Style::default().bg(DEFAULT_THEME.current_line_bg);

    let left_spans = if let Some(input) = data.input {
        vec![
            Span::styled(
                " > ",
                Style::default()
                    .bg(DEFAULT_THEME.secondary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}▏", input), bar_bg.fg(DEFAULT_THEME.fg)),
        ]
    } else {
        let step_text = match data.selected {
            Some(idx) => format!(" Record {}/{} ", idx + 1, data.total_records),
            None => " Record 0/0 ".to_string(),
        };
        let badge_bg = if data.selected_is_error {
            DEFAULT_THEME.error
        } else {
            DEFAULT_THEME.primary
        };

        vec![
            Span::styled(
                step_text,
                Style::default()
                    .bg(badge_bg)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" | ", bar_bg.fg(DEFAULT_THEME.comment)),
            Span::styled(
                format!(" {} ", data.message),
                bar_bg.fg(if data.selected_is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
            ),
        ]
    };

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(bar_bg)
            .alignment(Alignment::Left),
        layout[0],
    );

    // Right side: keybinds
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_bg.fg(DEFAULT_THEME.fg);
    let sep_style = bar_bg.fg(DEFAULT_THEME.comment);

    let right_spans = if data.input.is_some() {
        vec![
            Span::styled(" ↵ ", key_style),
            Span::styled(" run ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" esc ", key_style),
            Span::styled(" cancel ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(
                " ⌨ INPUT ",
                Style::default()
                    .bg(DEFAULT_THEME.secondary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
        ]
    } else {
        vec![
            Span::styled(" ←/→ ", key_style),
            Span::styled(" record ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ⇥ ", key_style),
            Span::styled(" focus ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" i ", key_style),
            Span::styled(" input ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled("q", key_style),
            Span::styled(" quit ", desc_style),
        ]
    };

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(bar_bg)
            .alignment(Alignment::Right),
        layout[1],
    );
}
