// ABOUTME: Verifies tail calls reuse the evaluator's loop instead of growing the host stack

use lisp_core::builtins::register_builtins;
use lisp_core::compiler::compile;
use lisp_core::env::Environment;
use lisp_core::eval::eval;
use lisp_core::parser::parse;
use lisp_core::value::Value;

fn run(root: &std::rc::Rc<Environment>, src: &str) -> Value {
    let node = parse(src).expect("parse failed");
    let expr = compile(&node);
    eval(expr, root.clone()).expect("eval failed")
}

#[test]
fn tail_recursive_countdown_does_not_overflow_the_host_stack() {
    let root = Environment::new();
    register_builtins(&root);
    run(
        &root,
        "(define count-down (lambda (n) (cond ((eq? n 0) 0) (#t (count-down (- n 1))))))",
    );
    let result = run(&root, "(count-down 500000)");
    assert!(matches!(result, Value::Integer(0)));
}

#[test]
fn tail_recursive_accumulator_in_a_begin_body_is_also_reused() {
    let root = Environment::new();
    register_builtins(&root);
    run(
        &root,
        "(define sum-down (lambda (n acc) (cond ((eq? n 0) acc) (#t (begin (sum-down (- n 1) (+ acc n)))))))",
    );
    let result = run(&root, "(sum-down 100000 0)");
    assert!(matches!(result, Value::Integer(_)));
}

#[test]
fn mutual_style_self_recursion_through_a_top_level_rebind_stays_bounded() {
    let root = Environment::new();
    register_builtins(&root);
    run(
        &root,
        "(define loop (lambda (n) (cond ((eq? n 0) (quote done)) (#t (loop (- n 1))))))",
    );
    let result = run(&root, "(loop 200000)");
    assert!(matches!(result, Value::Symbol(_)));
}
