// ABOUTME: Evaluator module for executing parsed Lisp expressions

use crate::env::Environment;
use crate::error::LispError;
use crate::symbol::Symbol;
use crate::value::{ConsCell, LambdaData, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// The six special-form keywords, interned once. Dispatch below compares
/// these by identity, not by string equality, matching the identity
/// dispatch the object model requires of interned symbols.
#[derive(Clone)]
struct SpecialForms {
    define: Symbol,
    set: Symbol,
    quote: Symbol,
    cond: Symbol,
    lambda: Symbol,
    begin: Symbol,
}

thread_local! {
    static FORMS: SpecialForms = SpecialForms {
        define: Symbol::intern("define"),
        set: Symbol::intern("set!"),
        quote: Symbol::intern("quote"),
        cond: Symbol::intern("cond"),
        lambda: Symbol::intern("lambda"),
        begin: Symbol::intern("begin"),
    };
}

impl SpecialForms {
    fn current() -> SpecialForms {
        FORMS.with(|forms| forms.clone())
    }
}

/// What a tail-position special form hands back: either a final value,
/// or an expression for the caller to continue evaluating in the same
/// loop slot, reusing the host stack frame instead of recursing.
enum Reduction {
    Done(Value),
    Tail(Value),
}

/// Evaluates `expr` in `env`. Tail positions (a `cond` arm's result, the
/// last expression of a `begin`, and a lambda's body on application) are
/// reduced by looping rather than recursing, so a self-tail-recursive
/// function never grows the host call stack.
pub fn eval(expr: Value, env: Rc<Environment>) -> Result<Value, LispError> {
    let forms = SpecialForms::current();
    let mut expr = expr;
    let mut current_env = env;

    loop {
        match &expr {
            Value::Integer(_) | Value::Bool(_) | Value::Lambda(_) | Value::Primitive(_) => {
                return Ok(expr.clone());
            }

            Value::Null => return Err(LispError::EmptyApplication),

            Value::Symbol(sym) => {
                let sym = sym.clone();
                return current_env
                    .get(&sym)
                    .ok_or_else(|| LispError::UndefinedSymbol(sym.as_str().to_string()));
            }

            Value::Cell(cell) => {
                let (head, rest) = {
                    let borrowed = cell.borrow();
                    (borrowed.head.clone(), borrowed.tail.clone())
                };

                if let Value::Symbol(sym) = &head {
                    if *sym == forms.define {
                        return eval_define(rest, &current_env);
                    }
                    if *sym == forms.set {
                        return eval_set(rest, &current_env);
                    }
                    if *sym == forms.quote {
                        return eval_quote(rest);
                    }
                    if *sym == forms.cond {
                        match eval_cond(rest, &current_env)? {
                            Reduction::Done(v) => return Ok(v),
                            Reduction::Tail(next) => {
                                expr = next;
                                continue;
                            }
                        }
                    }
                    if *sym == forms.lambda {
                        return eval_lambda(rest, &current_env);
                    }
                    if *sym == forms.begin {
                        match eval_begin(rest, &current_env)? {
                            Reduction::Done(v) => return Ok(v),
                            Reduction::Tail(next) => {
                                expr = next;
                                continue;
                            }
                        }
                    }
                }

                let callee = eval(head, current_env.clone())?;
                let args = eval_args(rest, &current_env)?;

                match callee {
                    Value::Primitive(prim) => {
                        if args.len() != prim.arity {
                            return Err(LispError::arity_error(prim.name, prim.arity.to_string(), args.len()));
                        }
                        return (prim.func)(&args);
                    }
                    Value::Lambda(lambda) => {
                        if lambda.params.len() != args.len() {
                            return Err(LispError::arity_error(
                                "lambda",
                                lambda.params.len().to_string(),
                                args.len(),
                            ));
                        }

                        let parent = match &lambda.captured {
                            Some(captured) => captured.clone(),
                            None => Environment::root_of(&current_env),
                        };
                        let call_frame = Environment::with_parent(parent);
                        for (param, arg) in lambda.params.iter().zip(args) {
                            call_frame.define(param.clone(), arg);
                        }

                        expr = lambda.body.clone();
                        current_env = call_frame;
                        continue;
                    }
                    other => return Err(LispError::NotCallable(format!("{}", other))),
                }
            }
        }
    }
}

fn eval_args(rest: Value, env: &Rc<Environment>) -> Result<Vec<Value>, LispError> {
    rest.list_elements()?
        .into_iter()
        .map(|arg| eval(arg, env.clone()))
        .collect()
}

fn eval_define(rest: Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    let items = rest.list_elements()?;
    let (target, value_expr) = match items.as_slice() {
        [t, v] => (t.clone(), v.clone()),
        _ => return Err(LispError::invalid_form("define", "expected (define symbol expr)")),
    };
    let sym = match target {
        Value::Symbol(s) => s,
        _ => return Err(LispError::invalid_form("define", "target must be a symbol")),
    };

    let value = eval(value_expr, env.clone())?;
    env.define(sym, value);
    // "No value": the REPL renders Null as `()`, exactly what define returns.
    Ok(Value::Null)
}

fn eval_set(rest: Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    let items = rest.list_elements()?;
    let (target, value_expr) = match items.as_slice() {
        [t, v] => (t.clone(), v.clone()),
        _ => return Err(LispError::invalid_form("set!", "expected (set! target expr)")),
    };

    if let Value::Symbol(sym) = &target {
        let value = eval(value_expr, env.clone())?;
        env.set(sym, value.clone())?;
        return Ok(value);
    }

    if let Some(place_expr) = car_place(&target) {
        let cell = eval_to_cell("set!", place_expr, env)?;
        let value = eval(value_expr, env.clone())?;
        cell.borrow_mut().head = value.clone();
        return Ok(value);
    }

    Err(LispError::invalid_form("set!", "target must be a symbol or (car <expr>)"))
}

/// Recognizes a `(car <expr>)` place expression and returns the inner
/// expression. `set!` is the only caller that interprets `car` this way,
/// as "locate the cell" rather than "read the head", so this does not call
/// the general evaluator.
fn car_place(target: &Value) -> Option<Value> {
    let items = target.list_elements().ok()?;
    match items.as_slice() {
        [Value::Symbol(sym), inner] if sym.as_str() == "car" => Some(inner.clone()),
        _ => None,
    }
}

/// Evaluates an expression and requires the result be a non-null cell,
/// the place `set!`'s `(car <expr>)` target names.
fn eval_to_cell(form: &str, expr: Value, env: &Rc<Environment>) -> Result<Rc<RefCell<ConsCell>>, LispError> {
    match eval(expr, env.clone())? {
        Value::Cell(cell) => Ok(cell),
        Value::Null => Err(LispError::logic_error(form, "car of the empty list")),
        other => Err(LispError::type_error(form, "cell", &other)),
    }
}

fn eval_quote(rest: Value) -> Result<Value, LispError> {
    let items = rest.list_elements()?;
    match items.as_slice() {
        [v] => Ok(v.clone()),
        _ => Err(LispError::invalid_form("quote", "expected exactly 1 argument")),
    }
}

fn eval_cond(rest: Value, env: &Rc<Environment>) -> Result<Reduction, LispError> {
    let arms = rest.list_elements()?;
    if arms.is_empty() {
        return Err(LispError::invalid_form("cond", "expected at least one arm"));
    }

    for arm in arms {
        let pair = arm
            .list_elements()
            .map_err(|_| LispError::invalid_form("cond", "each arm must be a (test result) pair"))?;
        let (test, result) = match pair.as_slice() {
            [test, result] => (test.clone(), result.clone()),
            _ => return Err(LispError::invalid_form("cond", "each arm must be a (test result) pair")),
        };

        if eval(test, env.clone())?.is_truthy() {
            return Ok(Reduction::Tail(result));
        }
    }

    Ok(Reduction::Done(Value::Null))
}

fn eval_begin(rest: Value, env: &Rc<Environment>) -> Result<Reduction, LispError> {
    let exprs = rest.list_elements()?;
    let (last, init) = exprs
        .split_last()
        .ok_or_else(|| LispError::invalid_form("begin", "expected at least one expression"))?;

    for expr in init {
        eval(expr.clone(), env.clone())?;
    }

    Ok(Reduction::Tail(last.clone()))
}

fn eval_lambda(rest: Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    let items = rest.list_elements()?;
    let (params_expr, body) = match items.as_slice() {
        [p, b] => (p.clone(), b.clone()),
        _ => return Err(LispError::invalid_form("lambda", "expected (lambda params body)")),
    };

    let params = parse_params(&params_expr)?;
    // Root-capture rule: a lambda defined at the root records no capture
    // and rediscovers the root dynamically at call time instead, so a
    // top-level recursive function doesn't push the root onto itself.
    let captured = if env.is_root() { None } else { Some(env.clone()) };

    Ok(Value::Lambda(Rc::new(LambdaData { captured, params, body })))
}

fn parse_params(expr: &Value) -> Result<Vec<Symbol>, LispError> {
    match expr {
        Value::Null => Ok(Vec::new()),
        Value::Cell(_) => expr
            .list_elements()?
            .into_iter()
            .map(|item| match item {
                Value::Symbol(s) => Ok(s),
                _ => Err(LispError::invalid_form(
                    "lambda",
                    "parameter list must contain only symbols",
                )),
            })
            .collect(),
        _ => Err(LispError::invalid_form(
            "lambda",
            "parameter list must be () or a proper list of symbols",
        )),
    }
}
