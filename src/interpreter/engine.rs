//! Evaluation engine
//!
//! Drives a session line by line: each line is tokenized on its own, then
//! scanned with the declaration, signature and call recognizers in turn.

use crate::interpreter::builtins::Registry;
use crate::interpreter::constants::LINE_COMMENT;
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::record::ExecutionRecord;
use crate::memory::environment::Environment;
use crate::memory::value::Value;
use crate::parser::ast::{FunctionCall, VariableDeclaration};
use crate::parser::lexer::Lexer;
use crate::parser::parse::Recognizer;
use crate::terminal::MockTerminal;
use std::sync::Arc;

/// One interpreter session
///
/// The session owns its variable environment and output terminal. The
/// built-in registry is read-only and shared, so many sessions can be built
/// from one `Arc<Registry>`.
pub struct Evaluator {
    /// Built-in functions
    registry: Arc<Registry>,

    /// Variables bound by `let`
    environment: Environment,

    /// Output of `println`/`print`
    terminal: MockTerminal,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Create a session with its own registry
    pub fn new() -> Self {
        Self::with_registry(Arc::new(Registry::new()))
    }

    /// Create a session over a shared registry
    pub fn with_registry(registry: Arc<Registry>) -> Self {
        Evaluator {
            registry,
            environment: Environment::new(),
            terminal: MockTerminal::new(),
        }
    }

    /// Forward terminal output to stdout as it is written
    pub fn echoing(mut self) -> Self {
        self.terminal = MockTerminal::echoing();
        self
    }

    /// Evaluate every line of `source`, numbering lines from 1
    pub fn run(&mut self, source: &str) -> Vec<ExecutionRecord> {
        let mut records = Vec::new();
        for (index, text) in source.lines().enumerate() {
            records.extend(self.run_line(index + 1, text));
        }
        records
    }

    /// Evaluate a single source line against the session state
    pub fn run_line(&mut self, line: usize, text: &str) -> Vec<ExecutionRecord> {
        let text = text.trim();
        if text.is_empty() || text.starts_with(LINE_COMMENT) {
            return Vec::new();
        }

        let tokens = Lexer::starting_at(text, line).tokenize();
        let recognizer = Recognizer::new(&tokens);
        let mut records = Vec::new();
        let mut cursor = 0;

        while cursor < recognizer.len() {
            // The value clause is bound as coerced text, never evaluated
            if let Some((declaration, next)) = recognizer.recognize_declaration(cursor) {
                records.push(self.declare(declaration));
                cursor = next;
                continue;
            }

            // Signatures are parsed, never executed
            if let Some((signature, next)) = recognizer.recognize_signature(cursor) {
                tracing::trace!(line, name = %signature.name, "skipping fn signature");
                cursor = next;
                continue;
            }

            if let Some((call, next)) = recognizer.recognize_call(cursor) {
                match self.dispatch(call) {
                    Ok(record) => records.push(record),
                    Err(error) => {
                        tracing::warn!(line, %error, "statement failed");
                        records.push(ExecutionRecord::Error { line, error });
                        // The rest of the line is abandoned
                        break;
                    }
                }
                cursor = next;
                continue;
            }

            tracing::trace!(line, token = %tokens[cursor].text, "skipping unrecognized token");
            cursor += 1;
        }

        records
    }

    fn declare(&mut self, declaration: VariableDeclaration) -> ExecutionRecord {
        let VariableDeclaration {
            name,
            value,
            is_mut,
            source_line,
        } = declaration;

        tracing::debug!(line = source_line, name = %name, value = %value, "let binding");
        self.environment
            .bind(name.clone(), value.clone(), is_mut, source_line);

        ExecutionRecord::VariableDeclaration {
            line: source_line,
            name,
            value,
        }
    }

    fn dispatch(&mut self, call: FunctionCall) -> Result<ExecutionRecord, RuntimeError> {
        let FunctionCall {
            name,
            args: raw_args,
            source_line,
        } = call;

        let args: Vec<Value> = raw_args.iter().map(|arg| self.resolve(arg)).collect();
        let result = self
            .registry
            .call(&name, &args, &mut self.terminal, source_line)?;
        tracing::debug!(line = source_line, function = %name, result = %result, "call");

        Ok(ExecutionRecord::FunctionCall {
            line: source_line,
            function: name,
            args,
            raw_args,
            result,
        })
    }

    /// A string argument naming a bound variable is replaced by that
    /// variable's value, even if a string literal was intended.
    fn resolve(&self, arg: &Value) -> Value {
        match arg {
            Value::Str(name) => self.environment.get(name).cloned().unwrap_or_else(|| arg.clone()),
            other => other.clone(),
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn terminal(&self) -> &MockTerminal {
        &self.terminal
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Forget all bindings and output, keeping the registry
    pub fn reset(&mut self) {
        self.environment.clear();
        self.terminal.clear();
    }
}

/// Run `source` in a fresh session and return the result of every successful
/// call, in order
pub fn results(source: &str) -> Vec<Value> {
    Evaluator::new()
        .run(source)
        .into_iter()
        .filter_map(|record| match record {
            ExecutionRecord::FunctionCall { result, .. } => Some(result),
            _ => None,
        })
        .collect()
}
