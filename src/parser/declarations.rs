//! Declaration recognizers
//!
//! Extends [`Recognizer`] with the two declaration forms of the language:
//! - Function signatures: `fn name<...>(param: Type, ...) -> Ret`
//! - Variable bindings: `let [mut] name [: Type] = value;`
//!
//! Signatures are recognized for inspection only and never executed.

use crate::interpreter::constants::{ASYNC_NAME_PREFIX, UNIT_TYPE};
use crate::parser::ast::{FunctionSignature, Param, VariableDeclaration};
use crate::parser::lexer::TokenKind;
use crate::parser::literal::coerce;
use crate::parser::parse::Recognizer;

impl Recognizer<'_> {
    /// Recognize a function signature starting at `start`.
    pub fn recognize_signature(&self, start: usize) -> Option<(FunctionSignature, usize)> {
        let mut i = start;

        if !self.is_at(i, "fn") {
            return None;
        }
        i += 1;

        let name = match self.token(i) {
            Some(t) if t.kind == TokenKind::Identifier => t.text.clone(),
            _ => return None,
        };
        i += 1;

        i = self.skip_generic_span(i);

        if !self.is_at(i, "(") {
            return None;
        }
        i += 1;

        let mut params = Vec::new();
        while i < self.len() && !self.is_at(i, ")") {
            let param_name = match self.token(i) {
                Some(t) if t.kind == TokenKind::Identifier => t.text.clone(),
                _ => return None,
            };
            i += 1;

            if !self.is_at(i, ":") {
                return None;
            }
            i += 1;

            let (param_type, next) = self.join_until(i, &[",", ")"]);
            i = next;
            params.push(Param {
                name: param_name,
                param_type,
            });

            if self.is_at(i, ",") {
                i += 1;
            }
        }

        if !self.is_at(i, ")") {
            return None;
        }
        i += 1;

        let mut return_type = UNIT_TYPE.to_string();
        if self.is_at(i, "->") {
            let (text, next) = self.join_until(i + 1, &[";", "{"]);
            return_type = text.trim().to_string();
            i = next;
        }

        let is_async = name.starts_with(ASYNC_NAME_PREFIX);

        Some((
            FunctionSignature {
                name,
                params,
                return_type,
                is_async,
            },
            i,
        ))
    }

    /// Recognize a `let` binding starting at `start`.
    ///
    /// The type annotation is skipped and `mut` is recorded but not enforced.
    /// The value is everything up to `;`, coerced as a literal; an empty value
    /// is a miss.
    pub fn recognize_declaration(&self, start: usize) -> Option<(VariableDeclaration, usize)> {
        let mut i = start;

        let source_line = self.token(i).filter(|t| t.is("let"))?.line();
        i += 1;

        let is_mut = self.is_at(i, "mut");
        if is_mut {
            i += 1;
        }

        let name = match self.token(i) {
            Some(t) if t.kind == TokenKind::Identifier => t.text.clone(),
            _ => return None,
        };
        i += 1;

        if self.is_at(i, ":") {
            i += 1;
            while i < self.len() && !self.is_at(i, "=") {
                i += 1;
            }
        }

        if !self.is_at(i, "=") {
            return None;
        }
        i += 1;

        let (raw_value, next) = self.join_until(i, &[";"]);
        if next == i {
            return None;
        }
        i = next;

        if self.is_at(i, ";") {
            i += 1;
        }

        Some((
            VariableDeclaration {
                name,
                value: coerce(&raw_value),
                is_mut,
                source_line,
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
    fn test_signature_with_params_and_return() {
        let tokens = tokenize("fn area(width: f64, height: f64) -> f64 { }");
        let recognizer = Recognizer::new(&tokens);
        let (sig, next) = recognizer.recognize_signature(0).unwrap();

        assert_eq!(sig.name, "area");
        assert_eq!(sig.params.len(), 2);
        assert_eq!(sig.params[0].name, "width");
        assert_eq!(sig.params[1].param_type, "f64");
        assert_eq!(sig.return_type, "f64");
        assert!(!sig.is_async);
        assert!(recognizer.is_at(next, "{"));
    }

    #[test]
    fn test_signature_defaults_to_unit() {
        let tokens = tokenize("fn main();");
        let recognizer = Recognizer::new(&tokens);
        let (sig, next) = recognizer.recognize_signature(0).unwrap();

        assert!(sig.params.is_empty());
        assert_eq!(sig.return_type, "()");
        assert!(recognizer.is_at(next, ";"));
    }

    #[test]
    fn test_signature_generics_and_compound_types() {
        let tokens = tokenize("fn first<T>(items: &Vec<T>) -> Option<T>;");
        let recognizer = Recognizer::new(&tokens);
        let (sig, _) = recognizer.recognize_signature(0).unwrap();

        assert_eq!(sig.params[0].param_type, "&Vec<T>");
        assert_eq!(sig.return_type, "Option<T>");
    }

    #[test]
    fn test_async_comes_from_name_prefix() {
        let tokens = tokenize("fn async_load(path: &str)");
        let recognizer = Recognizer::new(&tokens);
        assert!(recognizer.recognize_signature(0).unwrap().0.is_async);

        // The keyword position is not consulted
        let tokens = tokenize("async fn load(path: &str)");
        let recognizer = Recognizer::new(&tokens);
        assert!(recognizer.recognize_signature(0).is_none());
        assert!(!recognizer.recognize_signature(1).unwrap().0.is_async);
    }

    #[test]
    fn test_signature_misses() {
        for source in ["fn (x: i32)", "fn f x", "fn f(x i32)", "fn f(self)", "fn f(x: i32"] {
            let tokens = tokenize(source);
            let recognizer = Recognizer::new(&tokens);
            assert!(recognizer.recognize_signature(0).is_none(), "{}", source);
        }
    }

    #[test]
    fn test_declaration_basic() {
        let tokens = tokenize("let x = 10;");
        let recognizer = Recognizer::new(&tokens);
        let (decl, next) = recognizer.recognize_declaration(0).unwrap();

        assert_eq!(decl.name, "x");
        assert_eq!(decl.value, Value::Int(10));
        assert!(!decl.is_mut);
        assert_eq!(next, tokens.len());
    }

    #[test]
    fn test_declaration_mut_and_type() {
        let tokens = tokenize("let mut name: &str = \"Ferris\"; rest");
        let recognizer = Recognizer::new(&tokens);
        let (decl, next) = recognizer.recognize_declaration(0).unwrap();

        assert_eq!(decl.name, "name");
        assert!(decl.is_mut);
        assert_eq!(decl.value, Value::Str("Ferris".into()));
        assert!(recognizer.is_at(next, "rest"));
    }

    #[test]
    fn test_declaration_without_semicolon() {
        let tokens = tokenize("let flag = true");
        let recognizer = Recognizer::new(&tokens);
        let (decl, next) = recognizer.recognize_declaration(0).unwrap();

        assert_eq!(decl.value, Value::Bool(true));
        assert_eq!(next, tokens.len());
    }

    #[test]
    fn test_declaration_value_is_not_evaluated() {
        let tokens = tokenize("let sum = add(x, y);");
        let recognizer = Recognizer::new(&tokens);
        let (decl, _) = recognizer.recognize_declaration(0).unwrap();

        assert_eq!(decl.value, Value::Str("add(x,y)".into()));
    }

    #[test]
    fn test_declaration_misses() {
        for source in ["let = 1;", "let x;", "let x = ;", "x = 1;", "let true = 1;"] {
            let tokens = tokenize(source);
            let recognizer = Recognizer::new(&tokens);
            assert!(recognizer.recognize_declaration(0).is_none(), "{}", source);
        }
    }
}
