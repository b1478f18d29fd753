// ABOUTME: Error types for evaluation failures in the Lisp interpreter

use crate::value::Value;
use thiserror::Error;

// ===== Arity constant strings (eliminates allocations in error paths) =====
#[allow(dead_code)]
pub const ARITY_ZERO: &str = "0";
pub const ARITY_ONE: &str = "1";
pub const ARITY_TWO: &str = "2";

#[derive(Error, Debug, Clone)]
pub enum LispError {
    /// A symbol was looked up (by `eval` or `set!`) but is bound nowhere
    /// in the current frame chain.
    #[error("undefined symbol: {0}")]
    UndefinedSymbol(String),

    /// `()` was evaluated as if it were a call.
    #[error("cannot evaluate () as a call")]
    EmptyApplication,

    /// The head of a non-special-form call did not evaluate to a callable.
    #[error("first value of an unquoted list should be a function, got {0}")]
    NotCallable(String),

    /// A lambda or primitive was called with the wrong number of arguments.
    #[error("{function}: expected {expected} argument{}, got {actual}", if *expected == "1" { "" } else { "s" })]
    ArityMismatch {
        function: String,
        expected: String,
        actual: usize,
    },

    /// A special form had the wrong shape: bad arity, a missing keyword
    /// position, or a non-symbol where a symbol is required.
    #[error("{form}: {message}")]
    InvalidForm { form: String, message: String },

    /// A primitive received an argument of the wrong kind.
    #[error("{function}: expected {expected}, got {actual}")]
    TypeError {
        function: String,
        expected: String,
        actual: String,
    },

    /// A primitive received an argument of the right kind but an
    /// unusable value (e.g. `car` of the empty list).
    #[error("{function}: {message}")]
    LogicError { function: String, message: String },
}

impl LispError {
    pub fn arity_error(function: &str, expected: impl Into<String>, actual: usize) -> Self {
        LispError::ArityMismatch {
            function: function.to_string(),
            expected: expected.into(),
            actual,
        }
    }

    pub fn invalid_form(form: &str, message: impl Into<String>) -> Self {
        LispError::InvalidForm {
            form: form.to_string(),
            message: message.into(),
        }
    }

    pub fn type_error(function: &str, expected: &str, actual: &Value) -> Self {
        LispError::TypeError {
            function: function.to_string(),
            expected: expected.to_string(),
            actual: actual.type_name().to_string(),
        }
    }

    pub fn logic_error(function: &str, message: impl Into<String>) -> Self {
        LispError::LogicError {
            function: function.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_mismatch_singular_message() {
        let err = LispError::arity_error("cons", ARITY_ONE, 2);
        assert_eq!(format!("{}", err), "cons: expected 1 argument, got 2");
    }

    #[test]
    fn arity_mismatch_plural_message() {
        let err = LispError::arity_error("cons", ARITY_TWO, 1);
        assert_eq!(format!("{}", err), "cons: expected 2 arguments, got 1");
    }

    #[test]
    fn type_error_names_the_primitive_and_kinds() {
        let err = LispError::type_error("car", "cell", &Value::Integer(3));
        assert_eq!(format!("{}", err), "car: expected cell, got integer");
    }

    #[test]
    fn undefined_symbol_message() {
        let err = LispError::UndefinedSymbol("zzz".to_string());
        assert_eq!(format!("{}", err), "undefined symbol: zzz");
    }
}
