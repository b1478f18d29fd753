// ABOUTME: Environment module for managing variable bindings and scopes

use crate::error::LispError;
use crate::symbol::Symbol;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<Symbol, Value>>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a new root environment with no parent.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: None,
        })
    }

    /// Creates a new child frame with a parent.
    pub fn with_parent(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: Some(parent),
        })
    }

    /// True iff this frame has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Given any frame in the chain, walks up to the frame currently
    /// acting as the root. Used by lambda application's root-capture
    /// rule to rediscover the root dynamically at call time rather than
    /// storing a second handle to it.
    pub fn root_of(env: &Rc<Environment>) -> Rc<Environment> {
        let mut current = env.clone();
        while let Some(parent) = current.parent.clone() {
            current = parent;
        }
        current
    }

    /// Defines a binding in THIS frame only (doesn't walk the parent chain).
    pub fn define(&self, name: Symbol, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Looks up a symbol in this frame, then parent frames, recursively.
    pub fn get(&self, name: &Symbol) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.get(name))
    }

    /// Rebinds an existing binding in the frame that owns it (for `set!`).
    pub fn set(&self, name: &Symbol, value: Value) -> Result<(), LispError> {
        if self.bindings.borrow().contains_key(name) {
            self.bindings.borrow_mut().insert(name.clone(), value);
            return Ok(());
        }

        if let Some(ref parent) = self.parent {
            return parent.set(name, value);
        }

        Err(LispError::UndefinedSymbol(name.as_str().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_and_get() {
        let env = Environment::new();
        env.define(Symbol::intern("x"), Value::Integer(42));
        match env.get(&Symbol::intern("x")) {
            Some(Value::Integer(n)) => assert_eq!(n, 42),
            _ => panic!("expected Integer(42)"),
        }
    }

    #[test]
    fn undefined_symbol_is_none() {
        let env = Environment::new();
        assert!(env.get(&Symbol::intern("undefined")).is_none());
    }

    #[test]
    fn child_shadows_parent() {
        let parent = Environment::new();
        parent.define(Symbol::intern("x"), Value::Integer(1));

        let child = Environment::with_parent(parent);
        child.define(Symbol::intern("x"), Value::Integer(2));

        match child.get(&Symbol::intern("x")) {
            Some(Value::Integer(n)) => assert_eq!(n, 2),
            _ => panic!("expected Integer(2)"),
        }
    }

    #[test]
    fn child_sees_parent_binding() {
        let parent = Environment::new();
        parent.define(Symbol::intern("x"), Value::Integer(7));

        let child = Environment::with_parent(parent);
        match child.get(&Symbol::intern("x")) {
            Some(Value::Integer(n)) => assert_eq!(n, 7),
            _ => panic!("expected Integer(7)"),
        }
    }

    #[test]
    fn multi_level_chain_lookup() {
        let grandparent = Environment::new();
        grandparent.define(Symbol::intern("a"), Value::Integer(1));

        let parent = Environment::with_parent(grandparent);
        parent.define(Symbol::intern("b"), Value::Integer(2));

        let child = Environment::with_parent(parent);
        child.define(Symbol::intern("c"), Value::Integer(3));

        assert!(matches!(child.get(&Symbol::intern("a")), Some(Value::Integer(1))));
        assert!(matches!(child.get(&Symbol::intern("b")), Some(Value::Integer(2))));
        assert!(matches!(child.get(&Symbol::intern("c")), Some(Value::Integer(3))));
    }

    #[test]
    fn set_rebinds_in_the_owning_frame() {
        let parent = Environment::new();
        parent.define(Symbol::intern("x"), Value::Integer(1));
        let child = Environment::with_parent(parent.clone());

        child.set(&Symbol::intern("x"), Value::Integer(99)).unwrap();

        assert!(matches!(parent.get(&Symbol::intern("x")), Some(Value::Integer(99))));
    }

    #[test]
    fn set_on_undefined_symbol_fails() {
        let env = Environment::new();
        assert!(env.set(&Symbol::intern("missing"), Value::Integer(1)).is_err());
    }

    #[test]
    fn root_of_walks_to_the_top() {
        let root = Environment::new();
        let child = Environment::with_parent(root.clone());
        let grandchild = Environment::with_parent(child);

        assert!(Rc::ptr_eq(&Environment::root_of(&grandchild), &root));
        assert!(root.is_root());
        assert!(Environment::root_of(&grandchild).is_root());
    }
}
