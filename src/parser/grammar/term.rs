//! Term parsers

use crate::ast::term::{AppTerm, ConsTerm, ListTerm, MatchClause, MatchTerm, Term, TreeTerm};
use crate::lexer::Token;

use crate::parser::combinators::{
    BoxedParser, delimited, expect_arrow, expect_colon, expect_keyword, expect_lbrace,
    expect_lbracket, expect_lparen, expect_rbrace, expect_rbracket, expect_rparen, optional,
    separated1,
};
use crate::parser::state::{ParseState, Parser};

use super::literal::{atom, ident, string_literal};
use super::pattern::pattern;

/// term := simple_term (":" term)?
///
/// Cons is right-associative, so `a : b : c` is `a : (b : c)`.
pub fn term() -> BoxedParser<Term> {
    BoxedParser::new(|state: &mut ParseState| {
        let head = simple_term().parse(state)?;

        if optional(expect_colon()).parse(state)?.is_none() {
            return Ok(head);
        }

        let tail = term().parse(state)?;
        let position = head.position().merge(&tail.position());
        Ok(Term::Cons(ConsTerm {
            head: Box::new(head),
            tail: Box::new(tail),
            position,
        }))
    })
}

/// simple_term := match | tree | ident ("(" term,* ")")? | string | list | "(" term ")"
fn simple_term() -> BoxedParser<Term> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(tok) if tok.is_keyword("match") => match_term().parse(state),
        Some(Token::Atom(_) | Token::QuotedAtom(_)) => tree_term().parse(state),
        Some(Token::Ident(_)) => variable_or_application().parse(state),
        Some(Token::StringLiteral(_)) => (string_literal() >> Term::String).parse(state),
        Some(Token::LBracket(_)) => list_term().parse(state),
        Some(Token::LParen(_)) => (expect_lparen() * term() - expect_rparen()).parse(state),
        _ => {
            let err = state.error_here("unexpected token").expected("term");
            state.record_error(err.clone());
            Err(err)
        }
    })
}

/// tree := atom ("(" term,* ")")?
fn tree_term() -> BoxedParser<Term> {
    BoxedParser::new(|state: &mut ParseState| {
        let functor = atom().parse(state)?;
        let mut position = functor.position.clone();
        let mut children = vec![];

        if optional(expect_lparen()).parse(state)?.is_some() {
            let (items, close) = delimited(term(), expect_rparen()).parse(state)?;
            position = position.merge(&close.pos());
            children = items;
        }

        Ok(Term::Tree(TreeTerm {
            functor,
            children,
            position,
        }))
    })
}

/// A bare identifier is a variable; one followed by `(` is an application,
/// even with no arguments.
fn variable_or_application() -> BoxedParser<Term> {
    BoxedParser::new(|state: &mut ParseState| {
        let operation = ident().parse(state)?;

        if optional(expect_lparen()).parse(state)?.is_none() {
            return Ok(Term::Var(operation));
        }

        let (args, close) = delimited(term(), expect_rparen()).parse(state)?;
        let position = operation.position.merge(&close.pos());
        Ok(Term::App(AppTerm {
            operation,
            args,
            position,
        }))
    })
}

/// list := "[" term,* "]"
fn list_term() -> BoxedParser<Term> {
    BoxedParser::new(|state: &mut ParseState| {
        let open = expect_lbracket().parse(state)?;
        let (elements, close) = delimited(term(), expect_rbracket()).parse(state)?;
        Ok(Term::List(ListTerm {
            elements,
            position: open.pos().merge(&close.pos()),
        }))
    })
}

/// match := "match" term,+ "{" match_clause,* "}"
fn match_term() -> BoxedParser<Term> {
    BoxedParser::new(|state: &mut ParseState| {
        let start = expect_keyword("match").parse(state)?.pos();
        let scrutinees = separated1(term()).parse(state)?;
        expect_lbrace().parse(state)?;
        let (clauses, close) = delimited(match_clause(), expect_rbrace()).parse(state)?;

        Ok(Term::Match(Box::new(MatchTerm {
            scrutinees,
            clauses,
            position: start.merge(&close.pos()),
        })))
    })
}

/// match_clause := pattern,+ "=>" term
fn match_clause() -> BoxedParser<MatchClause> {
    ((separated1(pattern()) - expect_arrow()) + term())
        >> |(patterns, body)| {
            let position = match patterns.first() {
                Some(first) => first.position().merge(&body.position()),
                None => body.position(),
            };
            MatchClause {
                patterns,
                body,
                position,
            }
        }
}
