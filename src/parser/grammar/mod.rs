//! Grammar for Trellis source
//!
//! The parsing rules, organized by category:
//! - `literal`: identifiers, atoms and string literals
//! - `pattern`: patterns in function clauses, bindings and match clauses
//! - `term`: terms, including cons, lists and match
//! - `item`: top-level function clauses, bindings and expressions

mod item;
mod literal;
mod pattern;
mod term;

pub use item::item;
pub use pattern::pattern;
pub use term::term;

use crate::ast::Program;
use crate::lexer::Token;

use super::combinators::{BoxedParser, expect_semicolon};
use super::state::{ParseError, ParseState, Parser};

/// Skip past the next `;`
fn skip_to_next_item(state: &mut ParseState) {
    while let Some(tok) = state.advance() {
        if matches!(tok, Token::Semicolon(_)) {
            break;
        }
    }
}

/// program := (item ";")*
/// With error recovery: if an item fails to parse, skip to the next one
pub fn program() -> BoxedParser<Program> {
    BoxedParser::new(|state: &mut ParseState| {
        let mut items = Vec::new();

        while state.has_next() {
            let pos = state.position();
            match (item() - expect_semicolon()).parse(state) {
                Ok(item) => items.push(item),
                Err(_) => {
                    state.commit_furthest_error();
                    state.restore(pos);
                    skip_to_next_item(state);
                }
            }
        }

        Ok(Program { items })
    })
}

/// Parse a complete program from the token stream
///
/// Returns the program only when no errors were found, along with every
/// error collected during recovery.
pub fn parse(state: &mut ParseState) -> (Option<Program>, Vec<ParseError>) {
    let program = match program().parse(state) {
        Ok(program) => Some(program),
        Err(err) => {
            match state.get_furthest_error() {
                Some(furthest) => {
                    let furthest = furthest.clone();
                    state.collect_error(furthest);
                }
                None => state.collect_error(err),
            }
            None
        }
    };

    let errors = state.take_errors();
    if errors.is_empty() {
        (program, errors)
    } else {
        (None, errors)
    }
}
