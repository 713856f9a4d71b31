//! Parser for Trellis source
//!
//! A small parser-combinator library ([`combinators`]) and the grammar built
//! on top of it ([`grammar`]). Parsing never stops at the first error: a
//! failed item is reported and the parser resumes after the next `;`.

mod combinators;
mod grammar;
mod state;

pub use combinators::*;
pub use grammar::*;
pub use state::{ParseError, ParseResult, ParseState, Parser};

use thiserror::Error;

use crate::ast::Program;
use crate::lexer::{self, LexError};

/// Everything that can go wrong between source text and a surface program
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("{}", join_errors(.0))]
    Parse(Vec<ParseError>),
}

fn join_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lex and parse `source` into a surface program.
pub fn parse_source(source: &str) -> Result<Program, SourceError> {
    let tokens = lexer::lex(source)?;
    let mut state = ParseState::new(tokens);

    match parse(&mut state) {
        (Some(program), _) => Ok(program),
        (None, errors) => Err(SourceError::Parse(errors)),
    }
}
