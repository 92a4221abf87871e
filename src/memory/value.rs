//! Runtime value representation
//!
//! This module defines the [`Value`] enum, which represents every value a
//! script can bind to a variable, pass to a built-in or get back from one.
//!
//! # Value Types
//!
//! - [`Value::Str`], [`Value::Bool`], [`Value::Int`], [`Value::Float`]: what
//!   literal coercion produces
//! - [`Value::List`]: a shared, mutable sequence; every handle to the same list
//!   observes pushes and pops made through any other handle
//! - [`Value::Option`] / [`Value::Result`]: the two-case encodings built by
//!   `Some`/`None` and `Ok`/`Err`
//! - [`Value::Unit`]: result of the output functions
//! - [`Value::Absent`]: the "no value" sentinel returned instead of failing
//!
//! Positive infinity (the `divide` by zero sentinel) is an ordinary
//! `Float(f64::INFINITY)`.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to a mutable sequence
pub type ListRef = Rc<RefCell<Vec<Value>>>;

/// Runtime values in the interpreter
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    List(ListRef),
    Option(Option<Box<Value>>),
    Result(Result<Box<Value>, Box<Value>>),
    Unit,
    #[default]
    Absent,
}

impl Value {
    /// A new list holding `items`
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Rc::new(RefCell::new(items)))
    }

    pub fn some(value: Value) -> Self {
        Value::Option(Some(Box::new(value)))
    }

    pub fn ok(value: Value) -> Self {
        Value::Result(Ok(Box::new(value)))
    }

    pub fn err(value: Value) -> Self {
        Value::Result(Err(Box::new(value)))
    }

    /// Short type description used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::List(_) => "list",
            Value::Option(_) => "option",
            Value::Result(_) => "result",
            Value::Unit => "unit",
            Value::Absent => "absent",
        }
    }

    /// Get the string slice, returns None if not a Str
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer value, returns None if not an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view of ints and floats
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListRef> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Truthiness used by `and`, `or` and `not`
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Str(s) => !s.is_empty(),
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::List(items) => !items.borrow().is_empty(),
            Value::Option(opt) => opt.is_some(),
            Value::Result(_) => true,
            Value::Unit | Value::Absent => false,
        }
    }

    /// Whether `target` is this value or is held anywhere inside it
    pub fn reaches(&self, target: &ListRef) -> bool {
        match self {
            Value::List(items) => {
                Rc::ptr_eq(items, target) || items.borrow().iter().any(|item| item.reaches(target))
            }
            Value::Option(Some(inner)) => inner.reaches(target),
            Value::Result(Ok(inner)) | Value::Result(Err(inner)) => inner.reaches(target),
            _ => false,
        }
    }

    /// A copy of this value that does not reach `target`
    ///
    /// Only the containers on a path to `target` are copied; everything else
    /// stays shared. Values never hold cycles, so the copy of `target` itself
    /// is a plain snapshot of its current elements.
    pub fn detached_from(&self, target: &ListRef) -> Value {
        if !self.reaches(target) {
            return self.clone();
        }
        match self {
            Value::List(items) => Value::list(
                items
                    .borrow()
                    .iter()
                    .map(|item| item.detached_from(target))
                    .collect(),
            ),
            Value::Option(Some(inner)) => Value::some(inner.detached_from(target)),
            Value::Result(Ok(inner)) => Value::ok(inner.detached_from(target)),
            Value::Result(Err(inner)) => Value::err(inner.detached_from(target)),
            other => other.clone(),
        }
    }

    /// Structural equality where ints and floats compare by numeric value
    pub fn loosely_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                (*a as f64) == *b
            }
            _ => self == other,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            // Debug keeps the fractional part (`5.0`) and prints `inf`
            Value::Float(x) => write!(f, "{:?}", x),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.borrow().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_nested(f, item)?;
                }
                f.write_str("]")
            }
            Value::Option(Some(inner)) => {
                f.write_str("Some(")?;
                write_nested(f, inner)?;
                f.write_str(")")
            }
            Value::Option(None) => f.write_str("None"),
            Value::Result(Ok(inner)) => {
                f.write_str("Ok(")?;
                write_nested(f, inner)?;
                f.write_str(")")
            }
            Value::Result(Err(inner)) => {
                f.write_str("Err(")?;
                write_nested(f, inner)?;
                f.write_str(")")
            }
            Value::Unit => f.write_str("()"),
            Value::Absent => f.write_str("<absent>"),
        }
    }
}

/// Strings inside containers are shown quoted, like `Debug` does in Rust.
fn write_nested(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Str(s) => write!(f, "{:?}", s),
        other => write!(f, "{}", other),
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Str(s) => serializer.serialize_str(s),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::List(items) => {
                let items = items.borrow();
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Option(Some(inner)) => tagged(serializer, "Some", Some(inner.as_ref())),
            Value::Option(None) => tagged(serializer, "None", None),
            Value::Result(Ok(inner)) => tagged(serializer, "Ok", Some(inner.as_ref())),
            Value::Result(Err(inner)) => tagged(serializer, "Err", Some(inner.as_ref())),
            Value::Unit | Value::Absent => serializer.serialize_unit(),
        }
    }
}

/// Option/result values serialize as a `[tag, payload]` pair
fn tagged<S: Serializer>(
    serializer: S,
    tag: &str,
    payload: Option<&Value>,
) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(2))?;
    seq.serialize_element(tag)?;
    seq.serialize_element(&payload)?;
    seq.end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(5).to_string(), "5");
        assert_eq!(Value::Float(5.0).to_string(), "5.0");
        assert_eq!(Value::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::from("hi").to_string(), "hi");
        assert_eq!(Value::some(Value::Int(42)).to_string(), "Some(42)");
        assert_eq!(Value::err(Value::from("bad")).to_string(), "Err(\"bad\")");
        assert_eq!(
            Value::list(vec![Value::Int(1), Value::from("a")]).to_string(),
            "[1, \"a\"]"
        );
    }

    #[test]
    fn test_list_is_shared_between_handles() {
        let list = Value::list(Vec::new());
        let alias = list.clone();

        alias.as_list().unwrap().borrow_mut().push(Value::Int(1));
        assert_eq!(list.as_list().unwrap().borrow().len(), 1);
    }

    #[test]
    fn test_truthiness() {
        assert!(Value::Int(3).is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::Option(None).is_truthy());
        assert!(!Value::Absent.is_truthy());
        assert!(Value::some(Value::Bool(false)).is_truthy());
    }

    #[test]
    fn test_loose_equality() {
        assert!(Value::Int(2).loosely_equals(&Value::Float(2.0)));
        assert!(!Value::Int(2).loosely_equals(&Value::from("2")));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Value::list(vec![
            Value::Int(1),
            Value::some(Value::Bool(true)),
            Value::Option(None),
            Value::Absent,
        ]))
        .unwrap();
        assert_eq!(json, r#"[1,["Some",true],["None",null],null]"#);
    }
}
