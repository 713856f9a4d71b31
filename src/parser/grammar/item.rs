//! Top-level item parsers

use crate::ast::item::{Binding, FunctionClause, Item};
use crate::lexer::Token;

use crate::parser::combinators::{
    BoxedParser, delimited, expect_equals, expect_keyword, expect_lparen, expect_rparen,
    optional,
};
use crate::parser::state::{ParseState, Parser};

use super::literal::ident;
use super::pattern::pattern;
use super::term::term;

/// function_clause := "fn" ident ("(" pattern,* ")")? "=" term
pub fn function_clause() -> BoxedParser<FunctionClause> {
    BoxedParser::new(|state: &mut ParseState| {
        let start = expect_keyword("fn").parse(state)?.pos();
        let name = ident().label("function name").parse(state)?;

        let patterns = match optional(expect_lparen()).parse(state)? {
            Some(_) => delimited(pattern(), expect_rparen()).parse(state)?.0,
            None => vec![],
        };

        expect_equals().parse(state)?;
        let body = term().parse(state)?;
        let position = start.merge(&body.position());

        Ok(FunctionClause {
            name,
            patterns,
            body,
            position,
        })
    })
}

/// binding := "let" pattern "=" term
pub fn binding() -> BoxedParser<Binding> {
    BoxedParser::new(|state: &mut ParseState| {
        let start = expect_keyword("let").parse(state)?.pos();
        let pattern = pattern().parse(state)?;
        expect_equals().parse(state)?;
        let value = term().parse(state)?;
        let position = start.merge(&value.position());

        Ok(Binding {
            pattern,
            value,
            position,
        })
    })
}

/// item := function_clause | binding | term
pub fn item() -> BoxedParser<Item> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(tok) if tok.is_keyword("fn") => (function_clause() >> Item::Function).parse(state),
        Some(tok) if tok.is_keyword("let") => (binding() >> Item::Binding).parse(state),
        Some(Token::Semicolon(_)) => {
            let err = state.error_here("empty item").expected("item");
            state.record_error(err.clone());
            Err(err)
        }
        _ => (term() >> Item::Expression).parse(state),
    })
}
