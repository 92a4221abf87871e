//! Script execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: The [`engine::Evaluator`] session that drives line-by-line
//!   evaluation
//! - [`builtins`]: The built-in function registry
//! - [`ops`]: Host implementations of the built-ins, grouped by category
//! - [`record`]: Execution trace records
//! - [`errors`]: Runtime error types
//! - [`constants`]: Fixed names and markers of the language
//!
//! # Execution Model
//!
//! Each source line is tokenized on its own and scanned left to right. At
//! every position a `let` declaration is tried first, then a call; when
//! neither matches the scan moves on by one token. Declarations update the
//! environment, calls are resolved against it and dispatched through the
//! registry, and each outcome becomes one [`record::ExecutionRecord`].
//!
//! A failing call produces an error record and ends its line. The session
//! itself never fails.

pub mod builtins;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod ops;
pub mod record;
