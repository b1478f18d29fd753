// ABOUTME: Parser module for parsing Lisp expressions using nom combinators

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace1},
    combinator::value,
    multi::many0,
    IResult, Parser,
};

use crate::ast::Node;

/// Parse a `;` line comment, up to but not including the newline.
fn line_comment(input: &str) -> IResult<&str, ()> {
    let (input, _) = char(';')(input)?;
    let (input, _) = take_while(|c| c != '\n')(input)?;
    Ok((input, ()))
}

/// Skip runs of whitespace and line comments.
fn ws_and_comments(input: &str) -> IResult<&str, ()> {
    many0(alt((value((), multispace1), line_comment)))
        .map(|_| ())
        .parse(input)
}

fn is_token_char(c: char) -> bool {
    !c.is_whitespace() && c != '(' && c != ')' && c != '\'' && c != ';'
}

/// A maximal run of non-delimiter characters, classified as an integer
/// if it parses as one, a symbol otherwise, mirroring the source
/// grammar's own atom rule (try a number, fall back to a symbol).
fn parse_atom(input: &str) -> IResult<&str, Node> {
    let (input, token) = take_while1(is_token_char)(input)?;
    Ok((input, classify_token(token)))
}

fn classify_token(token: &str) -> Node {
    match token.parse::<i64>() {
        Ok(n) => Node::Integer(n),
        Err(_) => Node::Symbol(token.to_string()),
    }
}

/// `'expr` sugar for `(quote expr)`.
fn parse_quote(input: &str) -> IResult<&str, Node> {
    let (input, _) = char('\'')(input)?;
    let (input, expr) = parse_expr(input)?;
    Ok((input, Node::List(vec![Node::Symbol("quote".to_string()), expr])))
}

fn parse_list(input: &str) -> IResult<&str, Node> {
    let (input, _) = char('(')(input)?;
    let (input, _) = ws_and_comments(input)?;

    let mut items = Vec::new();
    let mut remaining = input;

    loop {
        if let Ok((rest, _)) = char::<_, nom::error::Error<&str>>(')')(remaining) {
            return Ok((rest, Node::List(items)));
        }

        let (rest, node) = parse_expr(remaining)?;
        items.push(node);

        let (rest, _) = ws_and_comments(rest)?;
        remaining = rest;
    }
}

fn parse_expr(input: &str) -> IResult<&str, Node> {
    let (input, _) = ws_and_comments(input)?;
    alt((parse_quote, parse_list, parse_atom)).parse(input)
}

/// Parses exactly one top-level expression, failing if trailing,
/// non-whitespace input remains.
pub fn parse(input: &str) -> Result<Node, String> {
    let (rest, node) = parse_expr(input).map_err(|e| format!("parse error: {}", e))?;
    let (rest, _) = ws_and_comments(rest).unwrap_or((rest, ()));
    if rest.is_empty() {
        Ok(node)
    } else {
        Err(format!("unexpected trailing input: {:?}", rest))
    }
}

/// Parses every top-level expression in `input` in order, for running a
/// script file as a sequence of forms.
pub fn parse_all(input: &str) -> Result<Vec<Node>, String> {
    let mut nodes = Vec::new();
    let mut remaining = input;

    loop {
        let (rest, _) = ws_and_comments(remaining).unwrap_or((remaining, ()));
        if rest.is_empty() {
            return Ok(nodes);
        }

        let (rest, node) = parse_expr(rest).map_err(|e| format!("parse error: {}", e))?;
        nodes.push(node);
        remaining = rest;
    }
}
