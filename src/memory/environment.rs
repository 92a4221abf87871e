//! Session variable environment
//!
//! A single flat scope: there are no blocks or function frames, so a binding
//! made on any line is visible to every later statement of the session, and a
//! second `let` of the same name simply replaces the first.

use super::value::Value;
use rustc_hash::FxHashMap;

/// A variable binding with the line that last wrote it
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub value: Value,
    pub is_mut: bool,
    pub line: usize,
}

/// Variable name → last-assigned value
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: FxHashMap<String, Binding>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any earlier binding (last write wins)
    pub fn bind(&mut self, name: impl Into<String>, value: Value, is_mut: bool, line: usize) {
        self.bindings.insert(
            name.into(),
            Binding {
                value,
                is_mut,
                line,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name).map(|b| &b.value)
    }

    pub fn binding(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings ordered by name, for display
    pub fn sorted(&self) -> Vec<(&str, &Binding)> {
        let mut entries: Vec<(&str, &Binding)> =
            self.bindings.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut env = Environment::new();
        env.bind("x", Value::Int(1), false, 1);
        env.bind("x", Value::from("one"), true, 4);

        assert_eq!(env.len(), 1);
        assert_eq!(env.get("x"), Some(&Value::from("one")));
        let binding = env.binding("x").unwrap();
        assert!(binding.is_mut);
        assert_eq!(binding.line, 4);
    }

    #[test]
    fn test_missing_name() {
        let env = Environment::new();
        assert!(env.get("nope").is_none());
        assert!(!env.contains("nope"));
        assert!(env.is_empty());
    }

    #[test]
    fn test_sorted() {
        let mut env = Environment::new();
        env.bind("b", Value::Int(2), false, 2);
        env.bind("a", Value::Int(1), false, 1);

        let names: Vec<&str> = env.sorted().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
