// ABOUTME: Lowers the parser's surface tree into the runtime object model

use crate::ast::Node;
use crate::symbol::Symbol;
use crate::value::Value;

/// Compiles a surface node into a runtime value. An empty list compiles
/// to `Null`; a non-empty list compiles to a cons chain built by folding
/// right over its children, terminated by `Null`. No errors arise here,
/// given a well-formed surface tree (the parser guarantees that).
pub fn compile(node: &Node) -> Value {
    match node {
        Node::Integer(n) => Value::Integer(*n),
        Node::Symbol(s) => Value::Symbol(Symbol::intern(s)),
        Node::List(children) => children
            .iter()
            .rev()
            .fold(Value::Null, |tail, child| Value::cons(compile(child), tail)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_compiles_to_integer() {
        assert!(matches!(compile(&Node::Integer(5)), Value::Integer(5)));
    }

    #[test]
    fn symbol_compiles_to_interned_symbol() {
        match compile(&Node::Symbol("foo".to_string())) {
            Value::Symbol(s) => assert_eq!(s.as_str(), "foo"),
            _ => panic!("expected Symbol"),
        }
    }

    #[test]
    fn empty_list_compiles_to_null() {
        assert!(matches!(compile(&Node::List(vec![])), Value::Null));
    }

    #[test]
    fn nonempty_list_compiles_to_a_cons_chain() {
        let node = Node::List(vec![Node::Integer(1), Node::Integer(2), Node::Integer(3)]);
        let value = compile(&node);
        assert_eq!(format!("{}", value), "(1 2 3)");
    }

    #[test]
    fn nested_list_compiles_recursively() {
        let node = Node::List(vec![
            Node::Symbol("a".to_string()),
            Node::List(vec![Node::Integer(1), Node::Integer(2)]),
        ]);
        let value = compile(&node);
        assert_eq!(format!("{}", value), "(a (1 2))");
    }
}
