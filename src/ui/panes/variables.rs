//! Variables pane: the session environment, sorted by name

use super::formatting::{clamp_scroll, format_value_styled};
use crate::memory::environment::Environment;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the variables pane
pub fn render_variables_pane(
    frame: &mut Frame,
    area: Rect,
    environment: &Environment,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Variables ")
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border(is_focused));

    if environment.is_empty() {
        let paragraph = Paragraph::new("(no bindings)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let items: Vec<ListItem> = environment
        .sorted()
        .into_iter()
        .map(|(name, binding)| {
            let mut spans = Vec::new();
            if binding.is_mut {
                spans.push(Span::styled("mut ", Style::default().fg(DEFAULT_THEME.keyword)));
            }
            spans.push(Span::styled(
                name.to_string(),
                Style::default().fg(DEFAULT_THEME.variable),
            ));
            spans.push(Span::styled(": ", Style::default().fg(DEFAULT_THEME.fg)));
            spans.extend(format_value_styled(&binding.value));
            spans.push(Span::styled(
                format!(" | {} @{}", binding.value.type_name(), binding.line),
                Style::default().fg(DEFAULT_THEME.type_name),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, items.len(), visible_height);

    let visible_items: Vec<ListItem> = items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
