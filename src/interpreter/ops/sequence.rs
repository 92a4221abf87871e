//! List built-ins: vec_new, vec_push, vec_pop, vec_len, vec_get

use crate::interpreter::errors::RuntimeError;
use crate::memory::value::{ListRef, Value};

fn expect_list<'v>(function: &str, value: &'v Value) -> Result<&'v ListRef, RuntimeError> {
    value
        .as_list()
        .ok_or_else(|| RuntimeError::type_mismatch(function, "list", value.type_name()))
}

pub(crate) fn vec_new() -> Value {
    Value::list(Vec::new())
}

/// Append `item` and hand back the same list
///
/// An item that holds the list, directly or through other lists and
/// option/result payloads, is stored as a snapshot so no list ever
/// contains itself.
pub(crate) fn vec_push(list: &Value, item: &Value) -> Result<Value, RuntimeError> {
    let items = expect_list("vec_push", list)?;
    let item = item.detached_from(items);
    items.borrow_mut().push(item);

    Ok(list.clone())
}

pub(crate) fn vec_pop(list: &Value) -> Result<Value, RuntimeError> {
    let items = expect_list("vec_pop", list)?;
    let popped = items.borrow_mut().pop();
    Ok(popped.unwrap_or(Value::Absent))
}

pub(crate) fn vec_len(list: &Value) -> Result<Value, RuntimeError> {
    let items = expect_list("vec_len", list)?;
    let len = items.borrow().len();
    Ok(Value::Int(len as i64))
}

/// Element at `index`, or `Absent` when the index is negative or past the end
pub(crate) fn vec_get(list: &Value, index: &Value) -> Result<Value, RuntimeError> {
    let items = expect_list("vec_get", list)?;
    let index = index
        .as_int()
        .ok_or_else(|| RuntimeError::type_mismatch("vec_get", "int index", index.type_name()))?;

    let items = items.borrow();
    let element = usize::try_from(index)
        .ok()
        .and_then(|i| items.get(i))
        .cloned();
    Ok(element.unwrap_or(Value::Absent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_then_len() {
        let list = vec_new();
        for expected in 1..=3 {
            vec_push(&list, &Value::Int(expected)).unwrap();
            assert_eq!(vec_len(&list), Ok(Value::Int(expected)));
        }
    }

    #[test]
    fn test_push_returns_same_list() {
        let list = vec_new();
        let returned = vec_push(&list, &Value::from("x")).unwrap();
        vec_push(&returned, &Value::from("y")).unwrap();
        assert_eq!(vec_len(&list), Ok(Value::Int(2)));
    }

    #[test]
    fn test_push_into_itself() {
        let list = vec_new();
        vec_push(&list, &Value::Int(1)).unwrap();
        vec_push(&list, &list).unwrap();

        assert_eq!(list.to_string(), "[1, [1]]");
    }

    #[test]
    fn test_push_across_two_lists() {
        let v = vec_new();
        let w = vec_new();
        vec_push(&v, &w).unwrap();
        vec_push(&w, &v).unwrap();

        // w got a snapshot of v, which still shares nothing with w
        assert_eq!(v.to_string(), "[[[[]]]]");
        assert_eq!(w.to_string(), "[[[]]]");
        assert_ne!(v, w);

        // v still holds w itself
        vec_push(&w, &Value::Int(1)).unwrap();
        assert_eq!(v.to_string(), "[[[[]], 1]]");
    }

    #[test]
    fn test_push_option_holding_list() {
        let v = vec_new();
        let wrapped = Value::some(v.clone());
        vec_push(&v, &wrapped).unwrap();

        assert_eq!(v.to_string(), "[Some([])]");
        assert_eq!(vec_len(&v), Ok(Value::Int(1)));
    }

    #[test]
    fn test_pop_and_get_sentinels() {
        let list = vec_new();
        assert_eq!(vec_pop(&list), Ok(Value::Absent));

        vec_push(&list, &Value::Int(7)).unwrap();
        assert_eq!(vec_get(&list, &Value::Int(0)), Ok(Value::Int(7)));
        assert_eq!(vec_get(&list, &Value::Int(1)), Ok(Value::Absent));
        assert_eq!(vec_get(&list, &Value::Int(-1)), Ok(Value::Absent));
        assert_eq!(vec_pop(&list), Ok(Value::Int(7)));
    }

    #[test]
    fn test_non_list_argument() {
        assert!(matches!(
            vec_len(&Value::Int(3)),
            Err(RuntimeError::TypeMismatch { .. })
        ));
        assert!(vec_get(&vec_new(), &Value::from("0")).is_err());
    }
}
