//! Function call recognizer
//!
//! Recognizes flat calls of the form `name(arg, ...)` or `name::<T>(arg, ...)`.
//! Each argument is the concatenated raw text of its tokens, coerced as a
//! literal. Arguments are never evaluated: an argument that opens a nested
//! parenthesis makes the enclosing call a miss, which lets the caller advance
//! and pick up the innermost flat call on its own.

use crate::interpreter::constants::CONSTRUCTOR_KEYWORDS;
use crate::parser::ast::FunctionCall;
use crate::parser::lexer::TokenKind;
use crate::parser::literal::coerce;
use crate::parser::parse::Recognizer;

impl Recognizer<'_> {
    /// Recognize a function call starting at `start`.
    pub fn recognize_call(&self, start: usize) -> Option<(FunctionCall, usize)> {
        let mut i = start;

        let callee = self.token(i)?;
        let callable = match callee.kind {
            TokenKind::Identifier => true,
            TokenKind::Keyword => CONSTRUCTOR_KEYWORDS.contains(&callee.text.as_str()),
            _ => false,
        };
        if !callable {
            return None;
        }
        i += 1;

        // Turbofish: `name::<T>(...)`
        if self.is_at(i, "::") {
            i = self.skip_generic_span(i + 1);
        }

        if !self.is_at(i, "(") {
            return None;
        }
        i += 1;

        let mut args = Vec::new();
        while i < self.len() && !self.is_at(i, ")") {
            let arg_start = i;
            while let Some(token) = self.token(i) {
                if token.is(",") || token.is(")") {
                    break;
                }
                if token.is("(") {
                    tracing::trace!(
                        callee = %callee.text,
                        line = callee.line(),
                        "nested call in arguments, deferring to inner call"
                    );
                    return None;
                }
                i += 1;
            }

            if i > arg_start {
                let (raw, _) = self.join_until(arg_start, &[",", ")"]);
                args.push(coerce(&raw));
            }

            if self.is_at(i, ",") {
                i += 1;
            }
        }

        if !self.is_at(i, ")") {
            return None;
        }
        i += 1;

        Some((
            FunctionCall {
                name: callee.text.clone(),
                args,
                source_line: callee.line(),
            },
            i,
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::memory::value::Value;
    use crate::parser::lexer::tokenize;
    use crate::parser::parse::Recognizer;

    #[test]
    fn test_simple_call() {
        let tokens = tokenize("add(1, 2.5);");
        let recognizer = Recognizer::new(&tokens);
        let (call, next) = recognizer.recognize_call(0).unwrap();

        assert_eq!(call.name, "add");
        assert_eq!(call.args, vec![Value::Int(1), Value::Float(2.5)]);
        assert!(recognizer.is_at(next, ";"));
    }

    #[test]
    fn test_no_arguments() {
        let tokens = tokenize("vec_new()");
        let recognizer = Recognizer::new(&tokens);
        let (call, next) = recognizer.recognize_call(0).unwrap();

        assert!(call.args.is_empty());
        assert_eq!(next, 3);
    }

    #[test]
    fn test_arguments_are_concatenated_tokens() {
        let tokens = tokenize("f(-5, x, \"a, b\", 3i32)");
        let recognizer = Recognizer::new(&tokens);
        let (call, _) = recognizer.recognize_call(0).unwrap();

        assert_eq!(
            call.args,
            vec![
                Value::Int(-5),
                Value::Str("x".into()),
                Value::Str("a, b".into()),
                Value::Int(3),
            ]
        );
    }

    #[test]
    fn test_turbofish() {
        let tokens = tokenize("parse::<i32>(\"7\")");
        let recognizer = Recognizer::new(&tokens);
        let (call, _) = recognizer.recognize_call(0).unwrap();

        assert_eq!(call.name, "parse");
        assert_eq!(call.args, vec![Value::Str("7".into())]);
    }

    #[test]
    fn test_constructor_keywords_are_callable() {
        let tokens = tokenize("Some(42)");
        let recognizer = Recognizer::new(&tokens);
        assert_eq!(recognizer.recognize_call(0).unwrap().0.name, "Some");

        let tokens = tokenize("let(1)");
        let recognizer = Recognizer::new(&tokens);
        assert!(recognizer.recognize_call(0).is_none());
    }

    #[test]
    fn test_nested_call_defers_to_inner() {
        let tokens = tokenize("println(add(a, b));");
        let recognizer = Recognizer::new(&tokens);

        assert!(recognizer.recognize_call(0).is_none());
        let (inner, next) = recognizer.recognize_call(2).unwrap();
        assert_eq!(inner.name, "add");
        assert_eq!(inner.args, vec![Value::Str("a".into()), Value::Str("b".into())]);
        assert!(recognizer.is_at(next, ")"));
    }

    #[test]
    fn test_misses() {
        for source in ["add 1, 2", "add(1, 2", "42(1)", "(1)", "a::b(1)"] {
            let tokens = tokenize(source);
            let recognizer = Recognizer::new(&tokens);
            assert!(recognizer.recognize_call(0).is_none(), "{}", source);
        }
    }

    #[test]
    fn test_empty_argument_slots_are_skipped() {
        let tokens = tokenize("f(, 1,)");
        let recognizer = Recognizer::new(&tokens);
        let (call, _) = recognizer.recognize_call(0).unwrap();
        assert_eq!(call.args, vec![Value::Int(1)]);
    }
}
