//! Option/Result built-ins: Some, None, Ok, Err, unwrap, unwrap_or

use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;

/// Payload of `Some`/`Ok`, `None` for the empty cases
fn payload(function: &str, value: &Value) -> Result<Option<Value>, RuntimeError> {
    match value {
        Value::Option(Some(inner)) | Value::Result(Ok(inner)) => Ok(Some((**inner).clone())),
        Value::Option(None) | Value::Result(Err(_)) | Value::Absent => Ok(None),
        other => Err(RuntimeError::type_mismatch(
            function,
            "option or result",
            other.type_name(),
        )),
    }
}

/// Soft unwrap: empty cases give `Absent` rather than an error
pub(crate) fn unwrap(value: &Value) -> Result<Value, RuntimeError> {
    Ok(payload("unwrap", value)?.unwrap_or(Value::Absent))
}

pub(crate) fn unwrap_or(value: &Value, default: &Value) -> Result<Value, RuntimeError> {
    Ok(payload("unwrap_or", value)?.unwrap_or_else(|| default.clone()))
}
