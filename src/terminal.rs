//! Output channel for `println` and `print`
//!
//! [`MockTerminal`] records everything a session writes, tagged with the source
//! line that produced it, so hosts can render it after the fact. A terminal
//! built with [`MockTerminal::echoing`] also forwards each write to stdout as
//! it happens.

use std::io::Write;

/// Mock terminal for capturing script output
#[derive(Debug, Clone, Default)]
pub struct MockTerminal {
    pub lines: Vec<TerminalLine>,
    echo: bool,
}

impl MockTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// A terminal that also writes through to stdout
    pub fn echoing() -> Self {
        MockTerminal {
            lines: Vec::new(),
            echo: true,
        }
    }

    /// Append `text`; writes from the same source line are merged.
    pub fn print(&mut self, text: &str, line: usize) {
        if self.echo {
            let mut stdout = std::io::stdout().lock();
            // Output is best effort; a closed stdout must not fail the statement
            let _ = stdout.write_all(text.as_bytes());
            let _ = stdout.flush();
        }

        if let Some(last) = self.lines.last_mut() {
            if last.line == line {
                last.text.push_str(text);
                return;
            }
        }
        self.lines.push(TerminalLine {
            text: text.to_string(),
            line,
        });
    }

    /// Get all output as display lines
    pub fn get_output(&self) -> Vec<String> {
        self.lines
            .iter()
            .flat_map(|tl| {
                let mut result: Vec<String> = tl.text.split('\n').map(|s| s.to_string()).collect();
                // Remove trailing empty string if text ended with newline
                if result.last().is_some_and(|s| s.is_empty()) {
                    result.pop();
                }
                result
            })
            .collect()
    }

    /// Everything written so far, concatenated
    pub fn contents(&self) -> String {
        self.lines.iter().map(|tl| tl.text.as_str()).collect()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// A chunk of terminal output with the source line that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub text: String,
    pub line: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_line_writes_merge() {
        let mut terminal = MockTerminal::new();
        terminal.print("a", 1);
        terminal.print("b\n", 1);
        terminal.print("c\n", 2);

        assert_eq!(terminal.lines.len(), 2);
        assert_eq!(terminal.get_output(), ["ab", "c"]);
        assert_eq!(terminal.contents(), "ab\nc\n");
    }

    #[test]
    fn test_print_without_newline_continues() {
        let mut terminal = MockTerminal::new();
        terminal.print("x", 3);
        terminal.print("y", 4);

        assert_eq!(terminal.get_output(), ["x", "y"]);
        assert_eq!(terminal.contents(), "xy");
    }
}
