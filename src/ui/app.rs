//! Main TUI application state and logic

use crate::interpreter::engine::Evaluator;
use crate::interpreter::record::ExecutionRecord;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use super::panes::{self, SourceScrollState, StatusRenderData};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Trace,
    Variables,
    Terminal,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> terminal -> trace -> variables)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Terminal,
            FocusedPane::Terminal => FocusedPane::Trace,
            FocusedPane::Trace => FocusedPane::Variables,
            FocusedPane::Variables => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Variables,
            FocusedPane::Terminal => FocusedPane::Source,
            FocusedPane::Trace => FocusedPane::Terminal,
            FocusedPane::Variables => FocusedPane::Trace,
        }
    }
}

/// The main application state
pub struct App {
    /// The interpreter session
    pub evaluator: Evaluator,

    /// The script, including statements typed in input mode
    pub source_code: String,

    /// Every record produced so far
    pub records: Vec<ExecutionRecord>,

    /// Index into `records` of the record under inspection
    pub selected: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: SourceScrollState,
    pub trace_scroll: usize,
    pub variables_scroll: usize,
    pub terminal_scroll: usize,

    /// Statement being typed; `Some` while in input mode
    pub input: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Evaluate `source_code` in `evaluator` and open the app on the result
    pub fn new(mut evaluator: Evaluator, source_code: String) -> Self {
        let records = evaluator.run(&source_code);
        let errors = records.iter().filter(|r| !r.success()).count();
        let status_message = if errors > 0 {
            format!("Evaluated with {} error(s)", errors)
        } else {
            String::from("Ready!")
        };

        App {
            evaluator,
            source_code,
            records,
            selected: 0,
            focused_pane: FocusedPane::Trace,
            source_scroll: SourceScrollState::default(),
            trace_scroll: 0,
            variables_scroll: 0,
            terminal_scroll: usize::MAX,
            input: None,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn selected_record(&self) -> Option<&ExecutionRecord> {
        self.records.get(self.selected)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Terminal (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: Trace (top) | Variables (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        let selected = self.selected_record();
        let current_line = selected.map_or(0, ExecutionRecord::line);
        let selected_is_error = selected.is_some_and(|r| !r.success());

        panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            current_line,
            selected_is_error,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_terminal_pane(
            frame,
            left_rows[1],
            self.evaluator.terminal(),
            self.focused_pane == FocusedPane::Terminal,
            &mut self.terminal_scroll,
        );

        panes::render_trace_pane(
            frame,
            right_rows[0],
            &self.records,
            self.selected,
            self.focused_pane == FocusedPane::Trace,
            &mut self.trace_scroll,
        );

        panes::render_variables_pane(
            frame,
            right_rows[1],
            self.evaluator.environment(),
            self.focused_pane == FocusedPane::Variables,
            &mut self.variables_scroll,
        );

        let status = StatusRenderData {
            message: &self.status_message,
            selected: (!self.records.is_empty()).then_some(self.selected),
            total_records: self.records.len(),
            selected_is_error,
            input: self.input.as_deref(),
        };
        panes::render_status_bar(frame, main_chunks[1], &status);
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.input.is_some() {
            self.handle_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('i') => {
                self.input = Some(String::new());
                self.status_message = "Type a statement".to_string();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => self.select(self.selected.saturating_sub(1)),
            KeyCode::Right => self.select(self.selected.saturating_add(1)),
            KeyCode::Backspace | KeyCode::Home => self.select(0),
            KeyCode::Enter | KeyCode::End => self.select(usize::MAX),
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Trace => self.select(self.selected.saturating_sub(1)),
                FocusedPane::Variables => {
                    self.variables_scroll = self.variables_scroll.saturating_sub(1);
                }
                FocusedPane::Terminal => {
                    self.terminal_scroll = self.terminal_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Trace => self.select(self.selected.saturating_add(1)),
                FocusedPane::Variables => {
                    self.variables_scroll = self.variables_scroll.saturating_add(1);
                }
                FocusedPane::Terminal => {
                    self.terminal_scroll = self.terminal_scroll.saturating_add(1);
                }
            },
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let Some(buffer) = self.input.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.input = None;
                self.status_message = "Input cancelled".to_string();
            }
            KeyCode::Enter => {
                let statement = std::mem::take(buffer);
                self.input = None;
                self.submit(&statement);
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) => buffer.push(c),
            _ => {}
        }
    }

    /// Append `statement` to the script and evaluate it in the running session
    pub fn submit(&mut self, statement: &str) {
        if !self.source_code.is_empty() && !self.source_code.ends_with('\n') {
            self.source_code.push('\n');
        }
        self.source_code.push_str(statement);
        self.source_code.push('\n');

        let line = self.source_code.lines().count();
        let new_records = self.evaluator.run_line(line, statement);

        self.status_message = match new_records.iter().find(|r| !r.success()) {
            Some(ExecutionRecord::Error { error, .. }) => format!("Error: {}", error),
            _ if new_records.is_empty() => format!("Line {}: nothing to evaluate", line),
            _ => format!("Line {}: {} record(s)", line, new_records.len()),
        };

        let had_new = !new_records.is_empty();
        self.records.extend(new_records);
        if had_new {
            self.selected = self.records.len() - 1;
        }
        self.terminal_scroll = usize::MAX;
    }

    fn select(&mut self, index: usize) {
        if self.records.is_empty() {
            return;
        }
        self.selected = index.min(self.records.len() - 1);
        self.status_message = match self.selected_record() {
            Some(record) => record.to_string(),
            None => String::new(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::value::Value;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_focus_cycle() {
        let mut pane = FocusedPane::Source;
        for _ in 0..4 {
            pane = pane.next();
        }
        assert_eq!(pane, FocusedPane::Source);
        assert_eq!(FocusedPane::Trace.next().prev(), FocusedPane::Trace);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut app = App::new(Evaluator::new(), "let a = 1;\nlet b = 2;".to_string());
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected, 1);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_input_mode_evaluates_in_session() {
        let mut app = App::new(Evaluator::new(), "let x = 10;".to_string());

        press(&mut app, KeyCode::Char('i'));
        for c in "add(x, 1);".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(app.input.is_none());
        assert_eq!(app.source_code, "let x = 10;\nadd(x, 1);\n");
        assert_eq!(app.records.len(), 2);
        assert_eq!(app.records[1].line(), 2);
        assert_eq!(app.records[1].result(), Some(&Value::Int(11)));
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_escape_leaves_input_mode() {
        let mut app = App::new(Evaluator::new(), String::new());
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Esc);

        assert!(app.input.is_none());
        assert!(!app.should_quit);
        assert!(app.records.is_empty());
    }
}
