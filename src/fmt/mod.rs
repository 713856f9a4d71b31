//! Rendering for Trellis
//!
//! This module provides the two value renderings behind the `display` and
//! `print` builtins, and a pretty printer for canonical (lowered) programs.

pub mod core;
pub mod value;

pub use value::{display, print};

/// Atom text as it would be written in source: bare when it lexes as a bare
/// atom, single-quoted otherwise.
pub fn atom_text(text: &str) -> String {
    if is_bare_atom(text) {
        text.to_string()
    } else {
        quote(text, '\'')
    }
}

/// Wrap `text` in `delimiter`, escaping the delimiter itself along with
/// control characters.
pub fn quote(text: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(delimiter);
    for c in text.chars() {
        if c == delimiter {
            out.push('\\');
            out.push(c);
        } else {
            push_escaped(&mut out, c);
        }
    }
    out.push(delimiter);
    out
}

fn is_bare_atom(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() || first.is_ascii_digit() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Escape the control characters that would break a one-line rendering.
fn push_escaped(out: &mut String, c: char) {
    match c {
        '\t' => out.push_str("\\t"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        c => out.push(c),
    }
}
