//! Execution trace pane rendering
//!
//! One row per [`ExecutionRecord`], in evaluation order. The selected record
//! drives the highlighted line in the source pane.

use super::formatting::{clamp_scroll, format_value_styled, format_values_styled};
use crate::interpreter::record::ExecutionRecord;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn record_line(record: &ExecutionRecord) -> Line<'static> {
    let line_span = Span::styled(
        format!("{:4} ", record.line()),
        Style::default().fg(DEFAULT_THEME.comment),
    );

    let mut spans = vec![line_span];
    match record {
        ExecutionRecord::VariableDeclaration { name, value, .. } => {
            spans.push(Span::styled(
                "let ",
                Style::default()
                    .fg(DEFAULT_THEME.keyword)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                name.clone(),
                Style::default().fg(DEFAULT_THEME.variable),
            ));
            spans.push(Span::styled(" = ", Style::default().fg(DEFAULT_THEME.fg)));
            spans.extend(format_value_styled(value));
        }
        ExecutionRecord::FunctionCall {
            function,
            args,
            result,
            ..
        } => {
            spans.push(Span::styled(
                function.clone(),
                Style::default().fg(DEFAULT_THEME.function),
            ));
            spans.push(Span::styled("(", Style::default().fg(DEFAULT_THEME.primary)));
            spans.extend(format_values_styled(args));
            spans.push(Span::styled(")", Style::default().fg(DEFAULT_THEME.primary)));
            spans.push(Span::styled(" → ", Style::default().fg(DEFAULT_THEME.comment)));
            spans.extend(format_value_styled(result));
        }
        ExecutionRecord::Error { error, .. } => {
            spans.push(Span::styled(
                error.to_string(),
                Style::default().fg(DEFAULT_THEME.error),
            ));
        }
    }

    Line::from(spans)
}

/// Render the trace pane
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    records: &[ExecutionRecord],
    selected: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Trace ({}) ", records.len()))
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border(is_focused));

    if records.is_empty() {
        let paragraph = Paragraph::new("(no statements recognized)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Keep the selection on screen
    if selected < *scroll_offset {
        *scroll_offset = selected;
    } else if selected >= *scroll_offset + visible_height {
        *scroll_offset = selected + 1 - visible_height;
    }
    clamp_scroll(scroll_offset, records.len(), visible_height);

    let items: Vec<ListItem> = records
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, record)| {
            let item = ListItem::new(record_line(record));
            if idx == selected {
                item.style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
