//! Constants for the interpreter

/// Function names starting with this prefix are reported as `is_async`
pub const ASYNC_NAME_PREFIX: &str = "async_";

/// Return type recorded for signatures without a `->` clause
pub const UNIT_TYPE: &str = "()";

/// Suffixes stripped from integer literals before parsing
pub const INTEGER_SUFFIXES: &[&str] = &["i32", "i64", "u32", "u64"];

/// Keywords accepted in callee position so the option/result constructors
/// are reachable from source text
pub const CONSTRUCTOR_KEYWORDS: &[&str] = &["Some", "None", "Ok", "Err"];

/// Marker that starts a line comment; such lines are skipped whole
pub const LINE_COMMENT: &str = "//";

/// Longest string, in bytes, that `multiply` will build by repetition
pub const MAX_REPEAT_BYTES: usize = 1 << 24;
