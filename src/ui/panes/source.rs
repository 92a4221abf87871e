//! Source code pane rendering with syntax highlighting
//!
//! This module renders the source code pane, which displays the script being
//! evaluated with syntax highlighting and the line of the selected record.
//!
//! # Features
//!
//! - Highlighting driven by the interpreter's own lexer, so keywords,
//!   literals and calls are coloured exactly as they are classified
//! - Selected line highlighting, red when the selected record is an error
//! - Scroll state management for navigating large files
//! - Line numbering

use crate::interpreter::constants::LINE_COMMENT;
use crate::parser::lexer::{Lexer, Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Highlight one source line by lexing it and styling each token.
///
/// Text between tokens (whitespace, comments, discarded characters) is kept
/// verbatim; anything non-blank there is shown as a comment.
fn highlight_source_code(line: &str) -> Line<'static> {
    let chars: Vec<char> = line.chars().collect();
    let tokens = Lexer::new(line).tokenize();
    let mut spans = Vec::new();
    let mut pos = 0;

    for (idx, token) in tokens.iter().enumerate() {
        let start = token.column().saturating_sub(1).min(chars.len());
        if start > pos {
            spans.push(gap_span(&chars[pos..start]));
        }

        let is_callee = tokens.get(idx + 1).is_some_and(|next| next.is("("));
        spans.push(Span::styled(token.text.clone(), token_style(token, is_callee)));
        pos = (start + token.text.chars().count()).min(chars.len());
    }

    if pos < chars.len() {
        spans.push(gap_span(&chars[pos..]));
    }

    Line::from(spans)
}

fn gap_span(chars: &[char]) -> Span<'static> {
    let text: String = chars.iter().collect();
    if text.trim().is_empty() {
        Span::raw(text)
    } else {
        Span::styled(text, Style::default().fg(DEFAULT_THEME.comment))
    }
}

fn token_style(token: &Token, is_callee: bool) -> Style {
    match token.kind {
        TokenKind::Keyword if is_callee => Style::default().fg(DEFAULT_THEME.function),
        TokenKind::Keyword => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        TokenKind::Literal if token.text.starts_with(['"', '\'']) => {
            Style::default().fg(DEFAULT_THEME.string)
        }
        TokenKind::Literal => Style::default().fg(DEFAULT_THEME.number),
        TokenKind::Identifier if is_callee => Style::default().fg(DEFAULT_THEME.function),
        TokenKind::Identifier => Style::default().fg(DEFAULT_THEME.fg),
        TokenKind::Punctuation => match token.text.as_str() {
            "(" | ")" | "[" | "]" | "{" | "}" => Style::default().fg(DEFAULT_THEME.primary), // Brackets
            _ => Style::default().fg(DEFAULT_THEME.fg),
        },
        TokenKind::Operator => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    current_line: usize,
    is_error: bool,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let block = Block::default()
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border(is_focused));

    let lines: Vec<&str> = source_code.lines().collect();
    let total_lines = lines.len();

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    // Keep the current line at a fixed visual row, centered at first
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    if current_line > 0 && current_line <= total_lines {
        scroll_state.offset = (current_line - 1).saturating_sub(target_row);

        if total_lines > visible_height {
            let max_scroll = total_lines - visible_height;
            scroll_state.offset = scroll_state.offset.min(max_scroll);
        } else {
            scroll_state.offset = 0;
        }
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = line_num == current_line;
            let line_num_str = format!("{:4} ", line_num);

            let mut content_line = if line.trim_start().starts_with(LINE_COMMENT) {
                Line::from(Span::styled(
                    line.to_string(),
                    Style::default().fg(DEFAULT_THEME.comment),
                ))
            } else {
                highlight_source_code(line)
            };

            let num_style = if is_current && is_error {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment) // Line numbers
            };

            if is_current && is_error {
                // White text on red for visibility
                let error_style = Style::default()
                    .bg(DEFAULT_THEME.error)
                    .fg(ratatui::style::Color::White)
                    .add_modifier(Modifier::BOLD);
                for span in &mut content_line.spans {
                    span.style = error_style;
                }
            } else if is_current {
                for span in &mut content_line.spans {
                    span.style = span
                        .style
                        .patch(Style::default().bg(DEFAULT_THEME.current_line_bg));
                }
            }

            let mut final_spans = vec![Span::styled(line_num_str, num_style)];
            final_spans.extend(content_line.spans);

            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_highlight_preserves_text() {
        for text in [
            "let  mut x = 10;   // trailing",
            "println(\"a b\");",
            "fn f<T>(a: T) -> i32 {",
            "x @ y",
        ] {
            assert_eq!(rendered(&highlight_source_code(text)), text);
        }
    }

    #[test]
    fn test_callee_is_function_coloured() {
        let line = highlight_source_code("add(1, 2)");
        assert_eq!(line.spans[0].content, "add");
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.function));
    }
}
