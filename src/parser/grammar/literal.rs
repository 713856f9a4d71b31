//! Literal parsers: identifiers, atoms and string literals

use crate::ast::term::{Atom, Ident, StringLiteral};
use crate::lexer::{Token, is_keyword};

use crate::parser::combinators::BoxedParser;
use crate::parser::state::{ParseError, ParseState};

/// Parse a lowercase identifier that is not a keyword or the wildcard
pub fn ident() -> BoxedParser<Ident> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::Ident(id)) if !is_keyword(&id.value) => {
            let ident = Ident {
                value: id.value.clone(),
                position: id.position.clone(),
            };
            state.advance();
            Ok(ident)
        }
        Some(tok) => {
            let err = ParseError::new("unexpected token")
                .expected("identifier")
                .found(tok.describe())
                .at(tok.pos());
            state.record_error(err.clone());
            Err(err)
        }
        None => {
            let err = ParseError::new("unexpected end of input").expected("identifier");
            state.record_error(err.clone());
            Err(err)
        }
    })
}

/// Parse a bare or quoted atom
pub fn atom() -> BoxedParser<Atom> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::Atom(a)) => {
            let atom = Atom {
                value: a.value.clone(),
                position: a.position.clone(),
            };
            state.advance();
            Ok(atom)
        }
        Some(Token::QuotedAtom(a)) => {
            let atom = Atom {
                value: unquote(&a.value, '\''),
                position: a.position.clone(),
            };
            state.advance();
            Ok(atom)
        }
        Some(tok) => {
            let err = ParseError::new("unexpected token")
                .expected("atom")
                .found(tok.describe())
                .at(tok.pos());
            state.record_error(err.clone());
            Err(err)
        }
        None => {
            let err = ParseError::new("unexpected end of input").expected("atom");
            state.record_error(err.clone());
            Err(err)
        }
    })
}

/// Parse a string literal
pub fn string_literal() -> BoxedParser<StringLiteral> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::StringLiteral(s)) => {
            let string = StringLiteral {
                value: unquote(&s.value, '"'),
                position: s.position.clone(),
            };
            state.advance();
            Ok(string)
        }
        Some(tok) => {
            let err = ParseError::new("unexpected token")
                .expected("string")
                .found(tok.describe())
                .at(tok.pos());
            state.record_error(err.clone());
            Err(err)
        }
        None => {
            let err = ParseError::new("unexpected end of input").expected("string");
            state.record_error(err.clone());
            Err(err)
        }
    })
}

/// Strip the surrounding `quote` characters and unescape `\<quote>`. Any
/// other backslash stays as written.
fn unquote(literal: &str, quote: char) -> String {
    let inner = literal
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .unwrap_or(literal);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' && chars.peek() == Some(&quote) {
            out.push(quote);
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::unquote;

    #[test]
    fn unquote_removes_quotes_and_escaped_quotes() {
        assert_eq!(unquote(r"'it\'s'", '\''), "it's");
        assert_eq!(unquote(r#""say \"hi\"""#, '"'), "say \"hi\"");
    }

    #[test]
    fn other_backslashes_are_kept() {
        assert_eq!(unquote(r"'a\nb'", '\''), r"a\nb");
    }
}
