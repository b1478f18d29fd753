//! The sole comparison primitive the standard table names: `=`.

use crate::error::LispError;
use crate::value::Value;

pub fn builtin_eq_num(args: &[Value]) -> Result<Value, LispError> {
    match (&args[0], &args[1]) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Value::Bool(a == b)),
        (Value::Integer(_), other) => Err(LispError::type_error("=", "integer", other)),
        (other, _) => Err(LispError::type_error("=", "integer", other)),
    }
}
