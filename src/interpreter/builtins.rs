//! Built-in function registry
//!
//! Every host function a script can call is a variant of [`Builtin`]. The
//! variant fixes the name and arity at compile time; [`Registry`] indexes the
//! variants by name and is the single dispatch point for the evaluator.
//!
//! # Supported Built-ins
//!
//! - Arithmetic: `add`, `subtract`, `multiply`, `divide`, `pow`
//! - Strings: `to_uppercase`, `to_lowercase`, `trim`, `len`, `concat`
//! - Lists: `vec_new`, `vec_push`, `vec_pop`, `vec_len`, `vec_get`
//! - Logic: `and`, `or`, `not`, `eq`, `neq`, `gt`, `lt`
//! - Option/Result: `Some`, `None`, `Ok`, `Err`, `unwrap`, `unwrap_or`
//! - Output: `println`, `print`
//!
//! # Implementation Notes
//!
//! - Arity is checked before any argument is inspected
//! - `divide` by zero, `vec_get` out of range, `vec_pop` on an empty list and
//!   `unwrap` of an empty variant return sentinels instead of failing
//! - The registry holds no session state and can be shared between sessions

use crate::interpreter::errors::RuntimeError;
use crate::interpreter::ops::{arithmetic, logic, sequence, text, variant};
use crate::memory::value::Value;
use crate::terminal::MockTerminal;
use rustc_hash::FxHashMap;

/// A host function callable from scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Add,
    Subtract,
    Multiply,
    Divide,
    Pow,
    ToUppercase,
    ToLowercase,
    Trim,
    Len,
    Concat,
    VecNew,
    VecPush,
    VecPop,
    VecLen,
    VecGet,
    And,
    Or,
    Not,
    Eq,
    Neq,
    Gt,
    Lt,
    Some,
    None,
    Ok,
    Err,
    Unwrap,
    UnwrapOr,
    Println,
    Print,
}

impl Builtin {
    pub const ALL: [Builtin; 30] = [
        Builtin::Add,
        Builtin::Subtract,
        Builtin::Multiply,
        Builtin::Divide,
        Builtin::Pow,
        Builtin::ToUppercase,
        Builtin::ToLowercase,
        Builtin::Trim,
        Builtin::Len,
        Builtin::Concat,
        Builtin::VecNew,
        Builtin::VecPush,
        Builtin::VecPop,
        Builtin::VecLen,
        Builtin::VecGet,
        Builtin::And,
        Builtin::Or,
        Builtin::Not,
        Builtin::Eq,
        Builtin::Neq,
        Builtin::Gt,
        Builtin::Lt,
        Builtin::Some,
        Builtin::None,
        Builtin::Ok,
        Builtin::Err,
        Builtin::Unwrap,
        Builtin::UnwrapOr,
        Builtin::Println,
        Builtin::Print,
    ];

    /// Name as written in scripts
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Add => "add",
            Builtin::Subtract => "subtract",
            Builtin::Multiply => "multiply",
            Builtin::Divide => "divide",
            Builtin::Pow => "pow",
            Builtin::ToUppercase => "to_uppercase",
            Builtin::ToLowercase => "to_lowercase",
            Builtin::Trim => "trim",
            Builtin::Len => "len",
            Builtin::Concat => "concat",
            Builtin::VecNew => "vec_new",
            Builtin::VecPush => "vec_push",
            Builtin::VecPop => "vec_pop",
            Builtin::VecLen => "vec_len",
            Builtin::VecGet => "vec_get",
            Builtin::And => "and",
            Builtin::Or => "or",
            Builtin::Not => "not",
            Builtin::Eq => "eq",
            Builtin::Neq => "neq",
            Builtin::Gt => "gt",
            Builtin::Lt => "lt",
            Builtin::Some => "Some",
            Builtin::None => "None",
            Builtin::Ok => "Ok",
            Builtin::Err => "Err",
            Builtin::Unwrap => "unwrap",
            Builtin::UnwrapOr => "unwrap_or",
            Builtin::Println => "println",
            Builtin::Print => "print",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Builtin::VecNew | Builtin::None => 0,

            Builtin::ToUppercase
            | Builtin::ToLowercase
            | Builtin::Trim
            | Builtin::Len
            | Builtin::VecPop
            | Builtin::VecLen
            | Builtin::Not
            | Builtin::Some
            | Builtin::Ok
            | Builtin::Err
            | Builtin::Unwrap
            | Builtin::Println
            | Builtin::Print => 1,

            Builtin::Add
            | Builtin::Subtract
            | Builtin::Multiply
            | Builtin::Divide
            | Builtin::Pow
            | Builtin::Concat
            | Builtin::VecPush
            | Builtin::VecGet
            | Builtin::And
            | Builtin::Or
            | Builtin::Eq
            | Builtin::Neq
            | Builtin::Gt
            | Builtin::Lt
            | Builtin::UnwrapOr => 2,
        }
    }

    /// Run the built-in. The caller has already checked `args.len()` against
    /// [`Builtin::arity`].
    fn invoke(
        self,
        args: &[Value],
        terminal: &mut MockTerminal,
        line: usize,
    ) -> Result<Value, RuntimeError> {
        match (self, args) {
            (Builtin::Add, [a, b]) => arithmetic::add(a, b),
            (Builtin::Subtract, [a, b]) => arithmetic::subtract(a, b),
            (Builtin::Multiply, [a, b]) => arithmetic::multiply(a, b),
            (Builtin::Divide, [a, b]) => arithmetic::divide(a, b),
            (Builtin::Pow, [a, b]) => arithmetic::pow(a, b),

            (Builtin::ToUppercase, [s]) => text::to_uppercase(s),
            (Builtin::ToLowercase, [s]) => text::to_lowercase(s),
            (Builtin::Trim, [s]) => text::trim(s),
            (Builtin::Len, [s]) => text::len(s),
            (Builtin::Concat, [a, b]) => text::concat(a, b),

            (Builtin::VecNew, []) => Ok(sequence::vec_new()),
            (Builtin::VecPush, [list, item]) => sequence::vec_push(list, item),
            (Builtin::VecPop, [list]) => sequence::vec_pop(list),
            (Builtin::VecLen, [list]) => sequence::vec_len(list),
            (Builtin::VecGet, [list, index]) => sequence::vec_get(list, index),

            (Builtin::And, [a, b]) => Ok(logic::and(a, b)),
            (Builtin::Or, [a, b]) => Ok(logic::or(a, b)),
            (Builtin::Not, [a]) => Ok(logic::not(a)),
            (Builtin::Eq, [a, b]) => Ok(logic::eq(a, b)),
            (Builtin::Neq, [a, b]) => Ok(logic::neq(a, b)),
            (Builtin::Gt, [a, b]) => logic::gt(a, b),
            (Builtin::Lt, [a, b]) => logic::lt(a, b),

            (Builtin::Some, [v]) => Ok(Value::some(v.clone())),
            (Builtin::None, []) => Ok(Value::Option(None)),
            (Builtin::Ok, [v]) => Ok(Value::ok(v.clone())),
            (Builtin::Err, [v]) => Ok(Value::err(v.clone())),
            (Builtin::Unwrap, [v]) => variant::unwrap(v),
            (Builtin::UnwrapOr, [v, default]) => variant::unwrap_or(v, default),

            (Builtin::Println, [v]) => {
                terminal.print(&format!("{}\n", v), line);
                Ok(Value::Unit)
            }
            (Builtin::Print, [v]) => {
                terminal.print(&v.to_string(), line);
                Ok(Value::Unit)
            }

            _ => Err(RuntimeError::ArityMismatch {
                function: self.name().to_string(),
                expected: self.arity(),
                got: args.len(),
            }),
        }
    }
}

/// Name-indexed table of every [`Builtin`]
#[derive(Debug, Clone)]
pub struct Registry {
    functions: FxHashMap<&'static str, Builtin>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        let functions = Builtin::ALL.iter().map(|b| (b.name(), *b)).collect();
        Registry { functions }
    }

    pub fn get(&self, name: &str) -> Option<Builtin> {
        self.functions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn arity(&self, name: &str) -> Option<usize> {
        self.get(name).map(Builtin::arity)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Dispatch `name` with `args`, writing any output to `terminal` tagged
    /// with source `line`
    pub fn call(
        &self,
        name: &str,
        args: &[Value],
        terminal: &mut MockTerminal,
        line: usize,
    ) -> Result<Value, RuntimeError> {
        let builtin = self.get(name).ok_or_else(|| RuntimeError::UndefinedFunction {
            name: name.to_string(),
        })?;

        if args.len() != builtin.arity() {
            return Err(RuntimeError::ArityMismatch {
                function: name.to_string(),
                expected: builtin.arity(),
                got: args.len(),
            });
        }

        tracing::debug!(function = name, line, "dispatching built-in");
        builtin.invoke(args, terminal, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_args(n: usize) -> Vec<Value> {
        vec![Value::Int(1); n]
    }

    #[test]
    fn test_every_builtin_is_registered() {
        let registry = Registry::new();
        assert_eq!(registry.len(), Builtin::ALL.len());
        for builtin in Builtin::ALL {
            assert_eq!(registry.get(builtin.name()), Some(builtin));
        }
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        let registry = Registry::new();
        let mut terminal = MockTerminal::new();

        for name in registry.names() {
            let arity = registry.arity(name).unwrap();
            for count in 0..=3 {
                if count == arity {
                    continue;
                }
                let result = registry.call(name, &sample_args(count), &mut terminal, 1);
                assert_eq!(
                    result,
                    Err(RuntimeError::ArityMismatch {
                        function: name.to_string(),
                        expected: arity,
                        got: count,
                    }),
                    "{} with {} args",
                    name,
                    count
                );
            }
        }
    }

    #[test]
    fn test_undefined_function() {
        let registry = Registry::new();
        let mut terminal = MockTerminal::new();
        assert_eq!(
            registry.call("frobnicate", &[], &mut terminal, 4),
            Err(RuntimeError::UndefinedFunction {
                name: "frobnicate".to_string()
            })
        );
    }

    #[test]
    fn test_println_writes_to_terminal() {
        let registry = Registry::new();
        let mut terminal = MockTerminal::new();

        let result = registry.call("println", &[Value::from("hi")], &mut terminal, 2);
        assert_eq!(result, Ok(Value::Unit));
        registry
            .call("print", &[Value::Int(5)], &mut terminal, 3)
            .unwrap();

        assert_eq!(terminal.contents(), "hi\n5");
        assert_eq!(terminal.lines[0].line, 2);
    }

    #[test]
    fn test_constructors() {
        let registry = Registry::new();
        let mut terminal = MockTerminal::new();

        assert_eq!(
            registry.call("Some", &[Value::Int(42)], &mut terminal, 1),
            Ok(Value::some(Value::Int(42)))
        );
        assert_eq!(
            registry.call("None", &[], &mut terminal, 1),
            Ok(Value::Option(None))
        );
    }

    #[test]
    fn test_names_sorted() {
        let names = Registry::new().names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"vec_get"));
    }
}
