//! String built-ins: to_uppercase, to_lowercase, trim, len, concat

use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;

fn expect_str<'v>(function: &str, value: &'v Value) -> Result<&'v str, RuntimeError> {
    value
        .as_str()
        .ok_or_else(|| RuntimeError::type_mismatch(function, "string", value.type_name()))
}

pub(crate) fn to_uppercase(value: &Value) -> Result<Value, RuntimeError> {
    Ok(Value::Str(expect_str("to_uppercase", value)?.to_uppercase()))
}

pub(crate) fn to_lowercase(value: &Value) -> Result<Value, RuntimeError> {
    Ok(Value::Str(expect_str("to_lowercase", value)?.to_lowercase()))
}

pub(crate) fn trim(value: &Value) -> Result<Value, RuntimeError> {
    Ok(Value::Str(expect_str("trim", value)?.trim().to_string()))
}

/// Character count of a string, or element count of a list
pub(crate) fn len(value: &Value) -> Result<Value, RuntimeError> {
    let n = match value {
        Value::Str(s) => s.chars().count(),
        Value::List(items) => items.borrow().len(),
        other => {
            return Err(RuntimeError::type_mismatch(
                "len",
                "string or list",
                other.type_name(),
            ))
        }
    };
    Ok(Value::Int(n as i64))
}

pub(crate) fn concat(left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{}{}", a, b))),
        (Value::List(a), Value::List(b)) => {
            let mut items = a.borrow().clone();
            items.extend(b.borrow().iter().cloned());
            Ok(Value::list(items))
        }
        _ => Err(RuntimeError::type_mismatch(
            "concat",
            "two strings or two lists",
            format!("{} and {}", left.type_name(), right.type_name()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_trim() {
        assert_eq!(to_uppercase(&"Hello".into()), Ok(Value::from("HELLO")));
        assert_eq!(to_lowercase(&"Hello".into()), Ok(Value::from("hello")));
        assert_eq!(trim(&"  pad  ".into()), Ok(Value::from("pad")));
        assert!(trim(&Value::Int(1)).is_err());
    }

    #[test]
    fn test_len_counts_chars() {
        assert_eq!(len(&"héllo".into()), Ok(Value::Int(5)));
        assert_eq!(len(&Value::list(vec![Value::Int(1)])), Ok(Value::Int(1)));
        assert!(len(&Value::Bool(true)).is_err());
    }

    #[test]
    fn test_concat() {
        assert_eq!(concat(&"foo".into(), &"bar".into()), Ok(Value::from("foobar")));
        assert!(concat(&"foo".into(), &Value::Int(1)).is_err());
    }
}
