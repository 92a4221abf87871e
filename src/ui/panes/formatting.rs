use crate::memory::value::Value;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

/// Format a value with styled spans
pub(crate) fn format_value_styled(value: &Value) -> Vec<Span<'static>> {
    match value {
        Value::Int(_) | Value::Float(_) => vec![Span::styled(
            value.to_string(),
            Style::default().fg(DEFAULT_THEME.number),
        )],
        Value::Str(s) => vec![Span::styled(
            format!("{:?}", s),
            Style::default().fg(DEFAULT_THEME.string),
        )],
        Value::Bool(_) => vec![Span::styled(
            value.to_string(),
            Style::default().fg(DEFAULT_THEME.keyword),
        )],
        Value::List(_) | Value::Option(_) | Value::Result(_) => vec![Span::styled(
            value.to_string(),
            Style::default().fg(DEFAULT_THEME.type_name),
        )],
        Value::Unit => vec![Span::styled(
            "()",
            Style::default().fg(DEFAULT_THEME.comment),
        )],
        Value::Absent => vec![Span::styled(
            "<absent>",
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::DIM),
        )],
    }
}

/// Values joined with `, `, each styled
pub(crate) fn format_values_styled(values: &[Value]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(", ", Style::default().fg(DEFAULT_THEME.fg)));
        }
        spans.extend(format_value_styled(value));
    }
    spans
}

/// Keep a scroll offset inside `[0, total - visible]`
pub(crate) fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_values_are_quoted() {
        let spans = format_value_styled(&Value::from("hi"));
        assert_eq!(spans[0].content, "\"hi\"");
    }

    #[test]
    fn test_clamp_scroll() {
        let mut offset = 50;
        clamp_scroll(&mut offset, 20, 5);
        assert_eq!(offset, 15);

        clamp_scroll(&mut offset, 3, 5);
        assert_eq!(offset, 0);
    }
}
