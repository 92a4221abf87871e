//! Recognized statement nodes for the scripting sublanguage

use crate::memory::value::Value;
use serde::Serialize;

/// Source location information for tokens and records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Function parameter as written in a signature (`name: Type`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    /// Concatenated raw token text of the type, e.g. `&str` or `Vec<i32>`
    pub param_type: String,
}

/// A parsed (never executed) function signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    pub name: String,
    pub params: Vec<Param>,
    pub return_type: String,
    /// Derived from the name prefix, not from an `async` keyword
    pub is_async: bool,
}

/// A flat call `name(arg, ...)` with every argument already coerced
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Value>,
    pub source_line: usize,
}

/// `let [mut] name [: Type] = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub name: String,
    pub value: Value,
    /// Parsed but never enforced
    pub is_mut: bool,
    pub source_line: usize,
}
