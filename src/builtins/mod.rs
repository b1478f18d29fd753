//! # Standard Primitives
//!
//! The fixed table named by the standard environment: seven callables
//! plus the two boolean constants, all bound into the root frame.
//!
//! - **arithmetic**: `+`, `-`
//! - **comparison**: `=`
//! - **lists**: `cons`, `car`, `cdr`
//! - **predicates**: `atom?`, `null?`, `eq?`, `not`
//!
//! Unlike a general-purpose builtin set, this table never grows at
//! runtime: there is no macro or registry for user code to add to it.

mod arithmetic;
mod comparison;
mod lists;
mod predicates;

use crate::env::Environment;
use crate::error::LispError;
use crate::symbol::Symbol;
use crate::value::{PrimitiveData, Value};
use std::rc::Rc;

fn primitive(name: &'static str, arity: usize, func: fn(&[Value]) -> Result<Value, LispError>) -> Value {
    Value::Primitive(Rc::new(PrimitiveData { name, arity, func }))
}

/// Populates the root environment with the fixed primitive table.
pub fn register_builtins(env: &Rc<Environment>) {
    env.define(Symbol::intern("cons"), primitive("cons", 2, lists::builtin_cons));
    env.define(Symbol::intern("car"), primitive("car", 1, lists::builtin_car));
    env.define(Symbol::intern("cdr"), primitive("cdr", 1, lists::builtin_cdr));
    env.define(Symbol::intern("atom?"), primitive("atom?", 1, predicates::builtin_atom_q));
    env.define(Symbol::intern("null?"), primitive("null?", 1, predicates::builtin_null_q));
    env.define(Symbol::intern("eq?"), primitive("eq?", 2, predicates::builtin_eq_q));
    env.define(Symbol::intern("not"), primitive("not", 1, predicates::builtin_not));
    env.define(Symbol::intern("="), primitive("=", 2, comparison::builtin_eq_num));
    env.define(Symbol::intern("+"), primitive("+", 2, arithmetic::builtin_add));
    env.define(Symbol::intern("-"), primitive("-", 2, arithmetic::builtin_sub));
    env.define(Symbol::intern("#t"), Value::Bool(true));
    env.define(Symbol::intern("#f"), Value::Bool(false));
}
