//! Predicate and logic primitives: `atom?`, `null?`, `eq?`, `not`.

use crate::error::LispError;
use crate::value::Value;

pub fn builtin_atom_q(args: &[Value]) -> Result<Value, LispError> {
    Ok(Value::Bool(matches!(&args[0], Value::Integer(_) | Value::Symbol(_))))
}

pub fn builtin_null_q(args: &[Value]) -> Result<Value, LispError> {
    Ok(Value::Bool(matches!(&args[0], Value::Null)))
}

pub fn builtin_eq_q(args: &[Value]) -> Result<Value, LispError> {
    Ok(Value::Bool(args[0].is_identical(&args[1])))
}

pub fn builtin_not(args: &[Value]) -> Result<Value, LispError> {
    match &args[0] {
        Value::Bool(b) => Ok(Value::Bool(!b)),
        other => Err(LispError::type_error("not", "boolean", other)),
    }
}
