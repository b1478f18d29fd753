// ABOUTME: Symbol interning so identity comparison equals spelling equality

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

thread_local! {
    static INTERNER: RefCell<HashMap<String, Symbol>> = RefCell::new(HashMap::new());
}

/// A canonicalized identifier. Two `Symbol`s built from the same spelling,
/// whether read from source or created at runtime, are the same value.
#[derive(Debug, Clone)]
pub struct Symbol(Rc<str>);

impl Symbol {
    /// Returns the canonical symbol for `spelling`, interning it on first sight.
    pub fn intern(spelling: &str) -> Symbol {
        INTERNER.with(|table| {
            let mut table = table.borrow_mut();
            if let Some(existing) = table.get(spelling) {
                return existing.clone();
            }
            let symbol = Symbol(Rc::from(spelling));
            table.insert(spelling.to_string(), symbol.clone());
            symbol
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.0) as *const () as usize).hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
