//! Recognizer infrastructure
//!
//! This module provides the [`Recognizer`] struct and the cursor helpers shared
//! by the three statement recognizers.
//!
//! # Recognizer Architecture
//!
//! Unlike a conventional parser, a recognizer never owns a moving position.
//! Every entry point takes a start cursor and returns either the recognized
//! node together with the cursor just past it, or `None`. A `None` always means
//! the caller's cursor is still valid and untouched, so alternatives can be
//! tried in sequence without any backtracking bookkeeping:
//! - `declarations`: function signatures and `let` bindings
//! - `calls`: flat function calls
//!
//! Recognizer methods are split across files using `impl Recognizer` blocks,
//! the same way each grammar area extends the shared cursor helpers here.

use crate::parser::ast::FunctionSignature;
use crate::parser::lexer::{tokenize, Token};

/// Stateless recognizer over a flat token slice
pub struct Recognizer<'a> {
    pub(crate) tokens: &'a [Token],
}

impl<'a> Recognizer<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    // ===== Helper methods =====

    pub(crate) fn token(&self, cursor: usize) -> Option<&'a Token> {
        self.tokens.get(cursor)
    }

    /// True when a token exists at `cursor` and its text is `text`.
    pub(crate) fn is_at(&self, cursor: usize, text: &str) -> bool {
        self.token(cursor).is_some_and(|t| t.is(text))
    }

    /// Skip a `<...>` span starting at `cursor` if there is one.
    ///
    /// Scans to the first `>` only, so nested generics such as `Vec<Vec<T>>`
    /// end early and usually make the surrounding recognizer miss.
    pub(crate) fn skip_generic_span(&self, cursor: usize) -> usize {
        if !self.is_at(cursor, "<") {
            return cursor;
        }

        let mut i = cursor;
        while i < self.len() && !self.is_at(i, ">") {
            i += 1;
        }
        if self.is_at(i, ">") {
            i += 1;
        }
        i
    }

    /// Concatenate raw token texts from `cursor` up to (not including) the
    /// first token whose text is one of `stops`, or the end of the slice.
    pub(crate) fn join_until(&self, cursor: usize, stops: &[&str]) -> (String, usize) {
        let mut text = String::new();
        let mut i = cursor;

        while let Some(token) = self.token(i) {
            if stops.contains(&token.text.as_str()) {
                break;
            }
            text.push_str(&token.text);
            i += 1;
        }

        (text, i)
    }
}

/// Scan `source` for every function signature the signature recognizer accepts.
///
/// The whole text is tokenized at once, so signatures may span lines.
pub fn collect_signatures(source: &str) -> Vec<FunctionSignature> {
    let tokens = tokenize(source);
    let recognizer = Recognizer::new(&tokens);
    let mut signatures = Vec::new();
    let mut cursor = 0;

    while cursor < recognizer.len() {
        match recognizer.recognize_signature(cursor) {
            Some((signature, next)) => {
                signatures.push(signature);
                cursor = next;
            }
            None => cursor += 1,
        }
    }

    signatures
}
