//! Arithmetic primitives: `+`, `-`.
//!
//! Both are fixed at arity 2 (no variadic form) per the standard
//! primitive table; `eval` checks arity centrally before either of
//! these ever runs.

use crate::error::LispError;
use crate::value::Value;

fn two_integers(name: &str, args: &[Value]) -> Result<(i64, i64), LispError> {
    match (&args[0], &args[1]) {
        (Value::Integer(a), Value::Integer(b)) => Ok((*a, *b)),
        (Value::Integer(_), other) => Err(LispError::type_error(name, "integer", other)),
        (other, _) => Err(LispError::type_error(name, "integer", other)),
    }
}

pub fn builtin_add(args: &[Value]) -> Result<Value, LispError> {
    let (a, b) = two_integers("+", args)?;
    Ok(Value::Integer(a + b))
}

pub fn builtin_sub(args: &[Value]) -> Result<Value, LispError> {
    let (a, b) = two_integers("-", args)?;
    Ok(Value::Integer(a - b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_two_integers() {
        let result = builtin_add(&[Value::Integer(2), Value::Integer(3)]).unwrap();
        assert!(matches!(result, Value::Integer(5)));
    }

    #[test]
    fn sub_two_integers() {
        let result = builtin_sub(&[Value::Integer(5), Value::Integer(3)]).unwrap();
        assert!(matches!(result, Value::Integer(2)));
    }

    #[test]
    fn add_rejects_non_integers() {
        assert!(builtin_add(&[Value::Bool(true), Value::Integer(1)]).is_err());
    }
}
