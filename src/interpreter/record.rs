//! Execution trace records
//!
//! An [`ExecutionRecord`] is the only thing the evaluator reports back for a
//! statement. Records serialize to flat JSON objects:
//!
//! ```text
//! {"line":1,"type":"variable_declaration","name":"x","value":10,"success":true}
//! {"line":2,"type":"function_call","function":"add","args":[10,5],"raw_args":["x",5],"result":15,"success":true}
//! {"line":3,"type":"error","error":"Undefined function 'nope'","success":false}
//! ```

use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Outcome of one recognized statement
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionRecord {
    VariableDeclaration {
        line: usize,
        name: String,
        value: Value,
    },
    FunctionCall {
        line: usize,
        function: String,
        /// Arguments after environment substitution
        args: Vec<Value>,
        /// Arguments as coerced from the source text
        raw_args: Vec<Value>,
        result: Value,
    },
    Error {
        line: usize,
        error: RuntimeError,
    },
}

impl ExecutionRecord {
    pub fn line(&self) -> usize {
        match self {
            ExecutionRecord::VariableDeclaration { line, .. }
            | ExecutionRecord::FunctionCall { line, .. }
            | ExecutionRecord::Error { line, .. } => *line,
        }
    }

    pub fn success(&self) -> bool {
        !matches!(self, ExecutionRecord::Error { .. })
    }

    /// The `type` tag used when serialized
    pub fn kind(&self) -> &'static str {
        match self {
            ExecutionRecord::VariableDeclaration { .. } => "variable_declaration",
            ExecutionRecord::FunctionCall { .. } => "function_call",
            ExecutionRecord::Error { .. } => "error",
        }
    }

    /// Result of a successful call, if this record is one
    pub fn result(&self) -> Option<&Value> {
        match self {
            ExecutionRecord::FunctionCall { result, .. } => Some(result),
            _ => None,
        }
    }
}

impl fmt::Display for ExecutionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionRecord::VariableDeclaration { line, name, value } => {
                write!(f, "line {}: let {} = {}", line, name, value)
            }
            ExecutionRecord::FunctionCall {
                line,
                function,
                args,
                result,
                ..
            } => {
                let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                write!(f, "line {}: {}({}) -> {}", line, function, args.join(", "), result)
            }
            ExecutionRecord::Error { line, error } => write!(f, "line {}: error: {}", line, error),
        }
    }
}

impl Serialize for ExecutionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("line", &self.line())?;
        map.serialize_entry("type", self.kind())?;

        match self {
            ExecutionRecord::VariableDeclaration { name, value, .. } => {
                map.serialize_entry("name", name)?;
                map.serialize_entry("value", value)?;
            }
            ExecutionRecord::FunctionCall {
                function,
                args,
                raw_args,
                result,
                ..
            } => {
                map.serialize_entry("function", function)?;
                map.serialize_entry("args", args)?;
                map.serialize_entry("raw_args", raw_args)?;
                map.serialize_entry("result", result)?;
            }
            ExecutionRecord::Error { error, .. } => {
                map.serialize_entry("error", &error.to_string())?;
            }
        }

        map.serialize_entry("success", &self.success())?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_json() {
        let record = ExecutionRecord::VariableDeclaration {
            line: 1,
            name: "x".into(),
            value: Value::Int(10),
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"line":1,"type":"variable_declaration","name":"x","value":10,"success":true}"#
        );
    }

    #[test]
    fn test_call_json() {
        let record = ExecutionRecord::FunctionCall {
            line: 2,
            function: "add".into(),
            args: vec![Value::Int(10), Value::Int(5)],
            raw_args: vec![Value::from("x"), Value::Int(5)],
            result: Value::Int(15),
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"line":2,"type":"function_call","function":"add","args":[10,5],"raw_args":["x",5],"result":15,"success":true}"#
        );
        assert_eq!(record.to_string(), "line 2: add(10, 5) -> 15");
    }

    #[test]
    fn test_error_json() {
        let record = ExecutionRecord::Error {
            line: 3,
            error: RuntimeError::UndefinedFunction { name: "nope".into() },
        };
        assert!(!record.success());
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"line":3,"type":"error","error":"Undefined function 'nope'","success":false}"#
        );
    }
}
