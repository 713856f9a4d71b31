use lachs::Span;

use super::pattern::Pattern;

/// A term as written in source, sugar included.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// `Atom` or `Atom(t, ...)`
    Tree(TreeTerm),
    /// `name`
    Var(Ident),
    /// `name(t, ...)`
    App(AppTerm),
    /// `head : tail`
    Cons(ConsTerm),
    /// `"text"`
    String(StringLiteral),
    /// `[t, ...]`
    List(ListTerm),
    /// `match t, ... { p, ... => t, ... }`
    Match(Box<MatchTerm>),
}

impl Term {
    pub fn position(&self) -> Span {
        match self {
            Term::Tree(tree) => tree.position.clone(),
            Term::Var(ident) => ident.position.clone(),
            Term::App(app) => app.position.clone(),
            Term::Cons(cons) => cons.position.clone(),
            Term::String(string) => string.position.clone(),
            Term::List(list) => list.position.clone(),
            Term::Match(m) => m.position.clone(),
        }
    }
}

/// Lowercase name: a variable, an operation or a pattern binder.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub value: String,
    pub position: Span,
}

/// Functor label with quotes and escapes already removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub value: String,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeTerm {
    pub functor: Atom,
    pub children: Vec<Term>,
    pub position: Span,
}

/// Call of a named operation. `f()` is an application with no arguments,
/// while a bare `f` is a [`Term::Var`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppTerm {
    pub operation: Ident,
    pub args: Vec<Term>,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsTerm {
    pub head: Box<Term>,
    pub tail: Box<Term>,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListTerm {
    pub elements: Vec<Term>,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchTerm {
    pub scrutinees: Vec<Term>,
    pub clauses: Vec<MatchClause>,
    pub position: Span,
}

/// One `patterns => body` alternative of a match term.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchClause {
    pub patterns: Vec<Pattern>,
    pub body: Term,
    pub position: Span,
}
