//! # Introduction
//!
//! rusim evaluates a small, Rust-flavored scripting language one line at a
//! time. It recognizes `let` bindings, flat function calls and `fn`
//! signatures, dispatches calls to a fixed table of built-ins, and reports a
//! structured trace with one record per statement. A terminal UI built with
//! [ratatui](https://docs.rs/ratatui) lets you step through that trace.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source line → Lexer → Recognizers → Evaluator → ExecutionRecords → TUI
//! ```
//!
//! 1. [`parser`]: tokenizes each line, coerces literals, and recognizes
//!    declarations, calls and signatures.
//! 2. [`interpreter`]: resolves call arguments against the session
//!    environment, dispatches through the [`interpreter::builtins::Registry`],
//!    and produces [`interpreter::record::ExecutionRecord`]s.
//! 3. [`memory`]: runtime [`memory::value::Value`]s and the flat
//!    [`memory::environment::Environment`].
//! 4. [`terminal`]: the [`terminal::MockTerminal`] that records `println`
//!    and `print` output.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use rusim::interpreter::engine::Evaluator;
//! use rusim::memory::value::Value;
//!
//! let mut session = Evaluator::new();
//! let records = session.run("let x = 10;\nadd(x, 5);");
//! assert_eq!(records[1].result(), Some(&Value::Int(15)));
//! ```
//!
//! ## Supported subset
//!
//! Statements: `let [mut] name [: Type] = literal;` and `name(arg, ...);`.
//! Signatures (`fn name<T>(a: T) -> R`) are parsed but never executed.
//! There are no expressions, control flow or user-defined functions.

pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod terminal;
pub mod ui;
