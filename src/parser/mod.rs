//! Source text front end
//!
//! This module turns script text into recognized statement nodes:
//! - [`lexer`]: Tokenization (source text → classified tokens)
//! - [`literal`]: Literal coercion (raw text → [`Value`](crate::memory::value::Value))
//! - [`parse`]: The [`Recognizer`](parse::Recognizer) and its cursor helpers
//! - `declarations`: `fn` signature and `let` recognizers
//! - `calls`: Function call recognizer
//! - [`ast`]: Node definitions
//!
//! # Supported Grammar
//!
//! Only three statement shapes are recognized, each independently and over a
//! flat token stream:
//! - `fn name<...>(p: T, ...) -> R` (parsed, never executed)
//! - `name(arg, ...)` and `name::<T>(arg, ...)`
//! - `let [mut] name [: T] = value;`
//!
//! There are no expressions with precedence, no control flow and no item
//! definitions. Anything else is skipped one token at a time by the evaluator.

pub mod ast;
mod calls;
mod declarations;
pub mod lexer;
pub mod literal;
pub mod parse;
