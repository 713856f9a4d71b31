use std::fmt;

use crate::core::{Functor, ReservedTag};
use crate::interpreter::Value;

use super::{atom_text, quote};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    /// Lists of one-character atoms render as `"text"`.
    Human,
    /// Every list renders element by element.
    Machine,
}

/// Human-oriented rendering used by the `display` builtin.
///
/// A value that is a string (a list of one-character atoms) renders as its
/// raw text. Strings nested inside other values render double-quoted.
pub fn display(value: &Value) -> String {
    match value.as_text() {
        Some(text) => text,
        None => render(value, Style::Human),
    }
}

/// Machine-oriented rendering used by the `print` builtin.
pub fn print(value: &Value) -> String {
    render(value, Style::Machine)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print(self))
    }
}

fn render(value: &Value, style: Style) -> String {
    let mut buffer = String::new();
    write_value(&mut buffer, value, style);
    buffer
}

fn write_value(buffer: &mut String, value: &Value, style: Style) {
    if let Some(elements) = value.as_list() {
        if style == Style::Human {
            if let Some(text) = value.as_text() {
                buffer.push_str(&quote(&text, '"'));
                return;
            }
        }

        buffer.push('[');
        write_separated(buffer, elements.into_iter(), style);
        buffer.push(']');
        return;
    }

    match (value.functor(), value.children()) {
        (Functor::Reserved(ReservedTag::ListCons), [head, tail]) => {
            write_value(buffer, head, style);
            buffer.push_str(" : ");
            write_value(buffer, tail, style);
        }
        (Functor::Reserved(_), children) => {
            buffer.push_str(&value.functor().to_string());
            write_children(buffer, children, style);
        }
        (Functor::Atom(text), children) => {
            buffer.push_str(&atom_text(text));
            write_children(buffer, children, style);
        }
    }
}

fn write_children(buffer: &mut String, children: &[Value], style: Style) {
    if children.is_empty() {
        return;
    }
    buffer.push('(');
    write_separated(buffer, children.iter(), style);
    buffer.push(')');
}

fn write_separated<'a>(
    buffer: &mut String,
    values: impl Iterator<Item = &'a Value>,
    style: Style,
) {
    for (index, value) in values.enumerate() {
        if index > 0 {
            buffer.push_str(", ");
        }
        write_value(buffer, value, style);
    }
}
