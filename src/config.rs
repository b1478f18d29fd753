// ABOUTME: Version and REPL banner constants

pub const VERSION: &str = "0.1.0";
pub const WELCOME_MESSAGE: &str = "Lisp Core";
pub const WELCOME_SUBTITLE: &str = "A small Scheme-flavored Lisp with tail-call reuse";
