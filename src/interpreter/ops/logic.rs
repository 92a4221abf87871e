//! Boolean and comparison built-ins: and, or, not, eq, neq, gt, lt

use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;
use std::cmp::Ordering;

pub(crate) fn and(left: &Value, right: &Value) -> Value {
    Value::Bool(left.is_truthy() && right.is_truthy())
}

pub(crate) fn or(left: &Value, right: &Value) -> Value {
    Value::Bool(left.is_truthy() || right.is_truthy())
}

pub(crate) fn not(value: &Value) -> Value {
    Value::Bool(!value.is_truthy())
}

pub(crate) fn eq(left: &Value, right: &Value) -> Value {
    Value::Bool(left.loosely_equals(right))
}

pub(crate) fn neq(left: &Value, right: &Value) -> Value {
    Value::Bool(!left.loosely_equals(right))
}

pub(crate) fn gt(left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    compare("gt", left, right).map(|ord| Value::Bool(ord == Some(Ordering::Greater)))
}

pub(crate) fn lt(left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    compare("lt", left, right).map(|ord| Value::Bool(ord == Some(Ordering::Less)))
}

/// Order numbers with numbers and strings with strings. `None` means the
/// operands are comparable but unordered (NaN).
fn compare(function: &str, left: &Value, right: &Value) -> Result<Option<Ordering>, RuntimeError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Some(a.cmp(b))),
        (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
        _ => match (left.as_f64(), right.as_f64()) {
            (Some(a), Some(b)) => Ok(a.partial_cmp(&b)),
            _ => Err(RuntimeError::type_mismatch(
                function,
                "two numbers or two strings",
                format!("{} and {}", left.type_name(), right.type_name()),
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_ops() {
        assert_eq!(and(&Value::Bool(true), &Value::Bool(false)), Value::Bool(false));
        assert_eq!(or(&Value::Bool(true), &Value::Bool(false)), Value::Bool(true));
        assert_eq!(not(&Value::Bool(false)), Value::Bool(true));
        assert_eq!(not(&Value::Int(0)), Value::Bool(true));
    }

    #[test]
    fn test_equality() {
        assert_eq!(eq(&Value::Int(1), &Value::Float(1.0)), Value::Bool(true));
        assert_eq!(neq(&Value::from("a"), &Value::from("b")), Value::Bool(true));
        assert_eq!(eq(&Value::Absent, &Value::Absent), Value::Bool(true));
    }

    #[test]
    fn test_ordering() {
        assert_eq!(gt(&Value::Int(10), &Value::Int(5)), Ok(Value::Bool(true)));
        assert_eq!(lt(&Value::Float(1.5), &Value::Int(2)), Ok(Value::Bool(true)));
        assert_eq!(lt(&Value::from("apple"), &Value::from("banana")), Ok(Value::Bool(true)));
        assert!(gt(&Value::Int(1), &Value::from("1")).is_err());
        assert_eq!(gt(&Value::Float(f64::NAN), &Value::Int(1)), Ok(Value::Bool(false)));
    }
}
