//! Pattern parsers

use crate::ast::pattern::{
    AsPattern, ConsPattern, ListPattern, Pattern, TreePattern, Wildcard,
};
use crate::lexer::Token;
use crate::parser::combinators::{
    BoxedParser, delimited, expect_at, expect_colon, expect_lbracket, expect_lparen,
    expect_rbracket, expect_rparen, optional,
};
use crate::parser::state::{ParseState, Parser};

use super::literal::{atom, ident, string_literal};

/// pattern := simple_pattern (":" pattern)?
pub fn pattern() -> BoxedParser<Pattern> {
    BoxedParser::new(|state: &mut ParseState| {
        let head = simple_pattern().parse(state)?;

        let Some(_) = optional(expect_colon()).parse(state)? else {
            return Ok(head);
        };

        let tail = pattern().parse(state)?;
        let position = head.position().merge(&tail.position());
        Ok(Pattern::Cons(ConsPattern {
            head: Box::new(head),
            tail: Box::new(tail),
            position,
        }))
    })
}

/// simple_pattern := tree | "_" | ident ("@" pattern)? | string | list | "(" pattern ")"
fn simple_pattern() -> BoxedParser<Pattern> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::Atom(_) | Token::QuotedAtom(_)) => tree_pattern().parse(state),
        Some(Token::Ident(id)) if id.value == "_" => wildcard().parse(state),
        Some(Token::Ident(_)) => variable_pattern().parse(state),
        Some(Token::StringLiteral(_)) => (string_literal() >> Pattern::String).parse(state),
        Some(Token::LBracket(_)) => list_pattern().parse(state),
        Some(Token::LParen(_)) => (expect_lparen() * pattern() - expect_rparen()).parse(state),
        _ => {
            let err = state.error_here("unexpected token").expected("pattern");
            state.record_error(err.clone());
            Err(err)
        }
    })
}

/// tree := atom ("(" pattern,* ")")?
fn tree_pattern() -> BoxedParser<Pattern> {
    BoxedParser::new(|state: &mut ParseState| {
        let functor = atom().parse(state)?;
        let mut position = functor.position.clone();
        let mut children = vec![];

        if optional(expect_lparen()).parse(state)?.is_some() {
            let (items, close) = delimited(pattern(), expect_rparen()).parse(state)?;
            position = position.merge(&close.pos());
            children = items;
        }

        Ok(Pattern::Tree(TreePattern {
            functor,
            children,
            position,
        }))
    })
}

fn wildcard() -> BoxedParser<Pattern> {
    BoxedParser::new(|state: &mut ParseState| match state.advance() {
        Some(tok) => Ok(Pattern::Wildcard(Wildcard {
            position: tok.pos(),
        })),
        None => Err(state.error_here("unexpected end of input").expected("'_'")),
    })
}

/// ident ("@" pattern)?
fn variable_pattern() -> BoxedParser<Pattern> {
    BoxedParser::new(|state: &mut ParseState| {
        let name = ident().parse(state)?;

        if optional(expect_at()).parse(state)?.is_none() {
            return Ok(Pattern::Var(name));
        }

        let inner = pattern().parse(state)?;
        let position = name.position.merge(&inner.position());
        Ok(Pattern::As(AsPattern {
            name,
            pattern: Box::new(inner),
            position,
        }))
    })
}

/// list := "[" pattern,* "]"
fn list_pattern() -> BoxedParser<Pattern> {
    BoxedParser::new(|state: &mut ParseState| {
        let open = expect_lbracket().parse(state)?;
        let (elements, close) = delimited(pattern(), expect_rbracket()).parse(state)?;
        Ok(Pattern::List(ListPattern {
            elements,
            position: open.pos().merge(&close.pos()),
        }))
    })
}
