use std::rc::Rc;

use crate::core::{Functor, ReservedTag};

/// An evaluated term: a functor and its children.
///
/// Values are immutable and compared structurally. Children sit behind an
/// `Rc`, so cloning a value (e.g. when reading a variable) never copies the
/// tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    functor: Functor,
    children: Rc<[Value]>,
}

impl Value {
    pub fn new(functor: Functor, children: Vec<Value>) -> Self {
        Self {
            functor,
            children: children.into(),
        }
    }

    pub fn atom(text: &str) -> Self {
        Self::new(Functor::atom(text), vec![])
    }

    pub fn tree(text: &str, children: Vec<Value>) -> Self {
        Self::new(Functor::atom(text), children)
    }

    pub fn empty_list() -> Self {
        Self::new(Functor::empty(), vec![])
    }

    pub fn cons(head: Value, tail: Value) -> Self {
        Self::new(Functor::cons(), vec![head, tail])
    }

    pub fn list(elements: Vec<Value>) -> Self {
        elements
            .into_iter()
            .rev()
            .fold(Self::empty_list(), |tail, head| Self::cons(head, tail))
    }

    /// The list of one-character atoms a string literal lowers to.
    pub fn string(text: &str) -> Self {
        Self::list(
            text.chars()
                .map(|c| Self::new(Functor::atom(c.to_string()), vec![]))
                .collect(),
        )
    }

    pub fn functor(&self) -> &Functor {
        &self.functor
    }

    pub fn children(&self) -> &[Value] {
        &self.children
    }

    /// Elements of a proper list (cons cells ending in the empty list).
    pub fn as_list(&self) -> Option<Vec<&Value>> {
        let mut elements = Vec::new();
        let mut current = self;

        loop {
            match (&current.functor, current.children()) {
                (Functor::Reserved(ReservedTag::ListEmpty), []) => return Some(elements),
                (Functor::Reserved(ReservedTag::ListCons), [head, tail]) => {
                    elements.push(head);
                    current = tail;
                }
                _ => return None,
            }
        }
    }

    /// The character this value stands for, if it is a zero-arity atom
    /// whose text is exactly one character.
    pub fn as_char(&self) -> Option<char> {
        let text = self.functor.as_atom()?;
        if !self.children.is_empty() {
            return None;
        }

        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// The text of a list of one-character atoms. The empty list is the
    /// empty string.
    pub fn as_text(&self) -> Option<String> {
        self.as_list()?
            .into_iter()
            .map(Value::as_char)
            .collect()
    }
}
