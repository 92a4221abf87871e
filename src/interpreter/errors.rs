//! Runtime error types for the interpreter
//!
//! This module defines [`RuntimeError`], the conditions a built-in dispatch can
//! raise. None of them is fatal: the evaluator turns each one into an `error`
//! record for the offending line and carries on with the next line.
//!
//! Lexing and recognition never produce errors. An unterminated literal is
//! tolerated by the lexer, and a recognizer that cannot match returns `None`.
//! Literal coercion always succeeds by falling back to a string.

/// Runtime errors that can occur during dispatch
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// Call to a name that is not in the registry
    #[error("Undefined function '{name}'")]
    UndefinedFunction { name: String },

    /// Argument count differs from the registered arity
    #[error(
        "Function '{function}' expects {expected} argument{}, got {got}",
        plural(.expected)
    )]
    ArityMismatch {
        function: String,
        expected: usize,
        got: usize,
    },

    /// An argument has a type the built-in cannot operate on
    #[error("Type error in '{function}': expected {expected}, got {got}")]
    TypeMismatch {
        function: String,
        expected: String,
        got: String,
    },

    /// Integer arithmetic left the 64-bit range
    #[error("Integer overflow in '{function}'")]
    IntegerOverflow { function: String },
}

fn plural(n: &usize) -> &'static str {
    if *n == 1 {
        ""
    } else {
        "s"
    }
}

impl RuntimeError {
    pub(crate) fn type_mismatch(
        function: &str,
        expected: impl Into<String>,
        got: impl std::fmt::Display,
    ) -> Self {
        RuntimeError::TypeMismatch {
            function: function.to_string(),
            expected: expected.into(),
            got: got.to_string(),
        }
    }

    pub(crate) fn overflow(function: &str) -> Self {
        RuntimeError::IntegerOverflow {
            function: function.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = RuntimeError::ArityMismatch {
            function: "add".into(),
            expected: 2,
            got: 3,
        };
        assert_eq!(err.to_string(), "Function 'add' expects 2 arguments, got 3");

        let err = RuntimeError::ArityMismatch {
            function: "trim".into(),
            expected: 1,
            got: 0,
        };
        assert_eq!(err.to_string(), "Function 'trim' expects 1 argument, got 0");

        let err = RuntimeError::UndefinedFunction {
            name: "frobnicate".into(),
        };
        assert_eq!(err.to_string(), "Undefined function 'frobnicate'");
    }
}
