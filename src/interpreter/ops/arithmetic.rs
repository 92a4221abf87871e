//! Arithmetic built-ins: add, subtract, multiply, divide, pow

use crate::interpreter::constants::MAX_REPEAT_BYTES;
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;

/// Numeric operand pair after promotion
enum Operands {
    Ints(i64, i64),
    Floats(f64, f64),
}

fn numeric(function: &str, left: &Value, right: &Value) -> Result<Operands, RuntimeError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Operands::Ints(*a, *b)),
        _ => match (left.as_f64(), right.as_f64()) {
            (Some(a), Some(b)) => Ok(Operands::Floats(a, b)),
            (None, _) => Err(RuntimeError::type_mismatch(function, "number", left.type_name())),
            (_, None) => Err(RuntimeError::type_mismatch(function, "number", right.type_name())),
        },
    }
}

pub(crate) fn add(left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{}{}", a, b))),
        (Value::List(a), Value::List(b)) => {
            let mut items = a.borrow().clone();
            items.extend(b.borrow().iter().cloned());
            Ok(Value::list(items))
        }
        _ => match numeric("add", left, right)? {
            Operands::Ints(a, b) => a
                .checked_add(b)
                .map(Value::Int)
                .ok_or_else(|| RuntimeError::overflow("add")),
            Operands::Floats(a, b) => Ok(Value::Float(a + b)),
        },
    }
}

pub(crate) fn subtract(left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    match numeric("subtract", left, right)? {
        Operands::Ints(a, b) => a
            .checked_sub(b)
            .map(Value::Int)
            .ok_or_else(|| RuntimeError::overflow("subtract")),
        Operands::Floats(a, b) => Ok(Value::Float(a - b)),
    }
}

pub(crate) fn multiply(left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    // String repetition: multiply("ab", 3)
    if let (Value::Str(s), Value::Int(n)) = (left, right) {
        let count = usize::try_from((*n).max(0)).map_err(|_| RuntimeError::overflow("multiply"))?;
        return match s.len().checked_mul(count) {
            Some(bytes) if bytes <= MAX_REPEAT_BYTES => Ok(Value::Str(s.repeat(count))),
            _ => Err(RuntimeError::overflow("multiply")),
        };
    }

    match numeric("multiply", left, right)? {
        Operands::Ints(a, b) => a
            .checked_mul(b)
            .map(Value::Int)
            .ok_or_else(|| RuntimeError::overflow("multiply")),
        Operands::Floats(a, b) => Ok(Value::Float(a * b)),
    }
}

/// True division. A zero divisor yields positive infinity instead of failing.
pub(crate) fn divide(left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    let (a, b) = match numeric("divide", left, right)? {
        Operands::Ints(a, b) => (a as f64, b as f64),
        Operands::Floats(a, b) => (a, b),
    };

    if b == 0.0 {
        return Ok(Value::Float(f64::INFINITY));
    }
    Ok(Value::Float(a / b))
}

pub(crate) fn pow(base: &Value, exponent: &Value) -> Result<Value, RuntimeError> {
    match numeric("pow", base, exponent)? {
        // Bases 0, 1 and -1 stay in range for any exponent
        Operands::Ints(0, b) if b > 0 => Ok(Value::Int(0)),
        Operands::Ints(1, b) if b >= 0 => Ok(Value::Int(1)),
        Operands::Ints(-1, b) if b >= 0 => Ok(Value::Int(if b % 2 == 0 { 1 } else { -1 })),
        Operands::Ints(a, b) if b >= 0 => {
            let exp = u32::try_from(b).map_err(|_| RuntimeError::overflow("pow"))?;
            a.checked_pow(exp)
                .map(Value::Int)
                .ok_or_else(|| RuntimeError::overflow("pow"))
        }
        Operands::Ints(a, b) => Ok(Value::Float((a as f64).powf(b as f64))),
        Operands::Floats(a, b) => Ok(Value::Float(a.powf(b))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(&Value::Int(10), &Value::Int(5)), Ok(Value::Int(15)));
        assert_eq!(add(&Value::Int(1), &Value::Float(0.5)), Ok(Value::Float(1.5)));
        assert_eq!(add(&"ab".into(), &"cd".into()), Ok(Value::from("abcd")));
        assert!(matches!(
            add(&Value::Int(1), &Value::Bool(true)),
            Err(RuntimeError::TypeMismatch { .. })
        ));
        assert!(matches!(
            add(&Value::Int(i64::MAX), &Value::Int(1)),
            Err(RuntimeError::IntegerOverflow { .. })
        ));
    }

    #[test]
    fn test_divide_by_zero_is_infinity() {
        assert_eq!(divide(&Value::Int(4), &Value::Int(0)), Ok(Value::Float(f64::INFINITY)));
        assert_eq!(divide(&Value::Int(-4), &Value::Float(0.0)), Ok(Value::Float(f64::INFINITY)));
        assert_eq!(divide(&Value::Int(9), &Value::Int(2)), Ok(Value::Float(4.5)));
    }

    #[test]
    fn test_pow() {
        assert_eq!(pow(&Value::Int(2), &Value::Int(10)), Ok(Value::Int(1024)));
        assert_eq!(pow(&Value::Int(2), &Value::Int(-1)), Ok(Value::Float(0.5)));
        assert_eq!(pow(&Value::Float(9.0), &Value::Float(0.5)), Ok(Value::Float(3.0)));
        assert!(matches!(
            pow(&Value::Int(2), &Value::Int(64)),
            Err(RuntimeError::IntegerOverflow { .. })
        ));
    }

    #[test]
    fn test_pow_huge_exponent_on_unit_bases() {
        let huge = Value::Int(4_294_967_296);
        assert_eq!(pow(&Value::Int(1), &huge), Ok(Value::Int(1)));
        assert_eq!(pow(&Value::Int(0), &huge), Ok(Value::Int(0)));
        assert_eq!(pow(&Value::Int(-1), &huge), Ok(Value::Int(1)));
        assert_eq!(pow(&Value::Int(-1), &Value::Int(4_294_967_297)), Ok(Value::Int(-1)));
        assert_eq!(pow(&Value::Int(0), &Value::Int(0)), Ok(Value::Int(1)));
    }

    #[test]
    fn test_repeat_is_bounded() {
        assert_eq!(multiply(&"ab".into(), &Value::Int(-3)), Ok(Value::from("")));
        assert!(matches!(
            multiply(&"ab".into(), &Value::Int(i64::MAX)),
            Err(RuntimeError::IntegerOverflow { .. })
        ));
        assert!(matches!(
            multiply(&"ab".into(), &Value::Int(1 << 40)),
            Err(RuntimeError::IntegerOverflow { .. })
        ));
    }

    #[test]
    fn test_subtract_and_multiply() {
        assert_eq!(subtract(&Value::Int(3), &Value::Int(5)), Ok(Value::Int(-2)));
        assert_eq!(multiply(&Value::Int(3), &Value::Int(5)), Ok(Value::Int(15)));
        assert_eq!(multiply(&"ab".into(), &Value::Int(2)), Ok(Value::from("abab")));
    }
}
