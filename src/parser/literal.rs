//! Literal coercion
//!
//! Turns the raw text of a declaration value or call argument into a typed
//! [`Value`]. Coercion never fails: text that is not a quoted literal, a
//! boolean, an integer or a float comes back as a plain string.

use crate::interpreter::constants::INTEGER_SUFFIXES;
use crate::memory::value::Value;

/// Coerce raw lexical text into a runtime value.
///
/// Attempts, in order: quoted string/char (quotes stripped, escapes left
/// as written), `true`/`false`, an optionally negative run of digits with an
/// optional integer suffix, a float parse of the whole text, and finally the
/// trimmed text itself.
pub fn coerce(raw: &str) -> Value {
    let text = raw.trim();

    if let Some(inner) = strip_quotes(text) {
        return Value::Str(inner.to_string());
    }

    match text {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if let Some(n) = parse_integer(text) {
        return Value::Int(n);
    }

    if let Ok(f) = text.parse::<f64>() {
        return Value::Float(f);
    }

    Value::Str(text.to_string())
}

fn strip_quotes(text: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|quote| {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            Some(&text[1..text.len() - 1])
        } else {
            None
        }
    })
}

fn parse_integer(text: &str) -> Option<i64> {
    let digits = INTEGER_SUFFIXES
        .iter()
        .find_map(|suffix| text.strip_suffix(suffix))
        .unwrap_or(text);

    let unsigned = digits.strip_prefix('-').unwrap_or(digits);
    if unsigned.is_empty() || !unsigned.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    digits.parse::<i64>().ok()
}
