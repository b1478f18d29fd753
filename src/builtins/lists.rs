//! List primitives: `cons`, `car`, `cdr`.
//!
//! Error kinds follow the source std-env exactly: a wrong-kind argument
//! is a type error, `car`/`cdr` of the empty list is a logic error.

use crate::error::LispError;
use crate::value::Value;

pub fn builtin_cons(args: &[Value]) -> Result<Value, LispError> {
    let head = args[0].clone();
    let tail = args[1].clone();
    match &tail {
        Value::Cell(_) | Value::Null => Ok(Value::cons(head, tail)),
        other => Err(LispError::type_error("cons", "cell or null", other)),
    }
}

pub fn builtin_car(args: &[Value]) -> Result<Value, LispError> {
    match &args[0] {
        Value::Cell(cell) => Ok(cell.borrow().head.clone()),
        Value::Null => Err(LispError::logic_error("car", "car of the empty list")),
        other => Err(LispError::type_error("car", "cell", other)),
    }
}

pub fn builtin_cdr(args: &[Value]) -> Result<Value, LispError> {
    match &args[0] {
        Value::Cell(cell) => Ok(cell.borrow().tail.clone()),
        Value::Null => Err(LispError::logic_error("cdr", "cdr of the empty list")),
        other => Err(LispError::type_error("cdr", "cell", other)),
    }
}
