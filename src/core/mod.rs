//! # Core AST - Canonical Program After Lowering
//!
//! This module defines the **canonical** representation of a program: the
//! form produced by [`crate::desugar`], read by [`crate::check`] and executed
//! by [`crate::interpreter`].
//!
//! ## Pipeline Position
//!
//! ```text
//! Parser → Surface AST → Lowering → [CORE AST] → Checker → Interpreter
//! ```
//!
//! ## Surface AST vs Core AST
//!
//! | Feature | Surface AST | Core AST |
//! |---------|-------------|----------|
//! | Cons `h:t` | `Term::Cons` | tree with [`ReservedTag::ListCons`] |
//! | List `[a, b]` | `Term::List` | right fold of cons cells ending in [`ReservedTag::ListEmpty`] |
//! | String `"ab"` | `Term::String` | list of one-character atoms |
//! | Function clauses | one item per clause | one [`FunctionDef`] per name |
//! | Source positions | every node | none |
//!
//! ## Functor Identity
//!
//! Every tree carries a [`Functor`]. User atoms and the two reserved list
//! tags live in different enum variants, so no atom text written in source
//! can ever collide with the list encoding:
//!
//! ```text
//! Functor::Atom("Suc")                  // Suc(n)
//! Functor::Reserved(ReservedTag::ListCons)   // h : t
//! Functor::Reserved(ReservedTag::ListEmpty)  // []
//! ```
//!
//! Arity is never declared. `F(A)` and `F(A, B)` are both fine and are
//! simply different shapes.
//!
//! ## Key Invariants
//!
//! 1. All clauses of a [`FunctionDef`] are meant to share one arity. Lowering
//!    does not enforce this; the checker reports `ArityMismatch`.
//! 2. Items keep source order, except that every clause of a function is
//!    merged into the definition sitting at the name's first occurrence.
//! 3. Variable and application terms exist only here, in program bodies.
//!    Evaluated values ([`crate::interpreter::Value`]) are plain trees.

use std::fmt;
use std::rc::Rc;

/// Internal structural tags. Never produced from atom text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedTag {
    ListCons,
    ListEmpty,
}

/// The label distinguishing one tree shape from another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Functor {
    Atom(Rc<str>),
    Reserved(ReservedTag),
}

impl Functor {
    pub fn atom(text: impl Into<Rc<str>>) -> Self {
        Functor::Atom(text.into())
    }

    pub fn cons() -> Self {
        Functor::Reserved(ReservedTag::ListCons)
    }

    pub fn empty() -> Self {
        Functor::Reserved(ReservedTag::ListEmpty)
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Functor::Atom(text) => Some(&**text),
            Functor::Reserved(_) => None,
        }
    }
}

impl fmt::Display for Functor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Functor::Atom(text) => f.write_str(text),
            Functor::Reserved(ReservedTag::ListCons) => f.write_str("<cons>"),
            Functor::Reserved(ReservedTag::ListEmpty) => f.write_str("<empty>"),
        }
    }
}

/// Unevaluated term, as found in clause bodies and top-level items.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Tree(TreeTerm),
    Var(String),
    App(AppTerm),
    Match(MatchTerm),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeTerm {
    pub functor: Functor,
    pub children: Vec<Term>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppTerm {
    pub operation: String,
    pub args: Vec<Term>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchTerm {
    pub scrutinees: Vec<Term>,
    pub clauses: Vec<Clause>,
}

impl Term {
    pub fn tree(functor: Functor, children: Vec<Term>) -> Self {
        Term::Tree(TreeTerm { functor, children })
    }

    pub fn atom(text: &str) -> Self {
        Term::tree(Functor::atom(text), vec![])
    }

    pub fn var(name: impl Into<String>) -> Self {
        Term::Var(name.into())
    }

    pub fn app(operation: impl Into<String>, args: Vec<Term>) -> Self {
        Term::App(AppTerm {
            operation: operation.into(),
            args,
        })
    }

    pub fn empty_list() -> Self {
        Term::tree(Functor::empty(), vec![])
    }

    pub fn cons(head: Term, tail: Term) -> Self {
        Term::tree(Functor::cons(), vec![head, tail])
    }

    /// `[e0, ..., en]` as nested cons cells ending in the empty list.
    pub fn list(elements: Vec<Term>) -> Self {
        elements
            .into_iter()
            .rev()
            .fold(Term::empty_list(), |tail, head| Term::cons(head, tail))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Tree(TreePattern),
    Var(String),
    Wildcard,
    As(AsPattern),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreePattern {
    pub functor: Functor,
    pub children: Vec<Pattern>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AsPattern {
    pub name: String,
    pub pattern: Box<Pattern>,
}

impl Pattern {
    pub fn tree(functor: Functor, children: Vec<Pattern>) -> Self {
        Pattern::Tree(TreePattern { functor, children })
    }

    pub fn atom(text: &str) -> Self {
        Pattern::tree(Functor::atom(text), vec![])
    }

    pub fn var(name: impl Into<String>) -> Self {
        Pattern::Var(name.into())
    }

    pub fn as_pattern(name: impl Into<String>, pattern: Pattern) -> Self {
        Pattern::As(AsPattern {
            name: name.into(),
            pattern: Box::new(pattern),
        })
    }

    pub fn empty_list() -> Self {
        Pattern::tree(Functor::empty(), vec![])
    }

    pub fn cons(head: Pattern, tail: Pattern) -> Self {
        Pattern::tree(Functor::cons(), vec![head, tail])
    }

    pub fn list(elements: Vec<Pattern>) -> Self {
        elements
            .into_iter()
            .rev()
            .fold(Pattern::empty_list(), |tail, head| {
                Pattern::cons(head, tail)
            })
    }

    /// Names this pattern binds, left to right. A name repeated in a
    /// non-linear pattern is listed once per occurrence.
    pub fn bound_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_bound_names(&mut names);
        names
    }

    fn collect_bound_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Pattern::Tree(tree) => {
                for child in &tree.children {
                    child.collect_bound_names(names);
                }
            }
            Pattern::Var(name) => names.push(name),
            Pattern::Wildcard => {}
            Pattern::As(as_pattern) => {
                names.push(&as_pattern.name);
                as_pattern.pattern.collect_bound_names(names);
            }
        }
    }
}

/// One alternative of a function or match term.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub patterns: Vec<Pattern>,
    pub body: Term,
}

impl Clause {
    pub fn bound_names(&self) -> Vec<&str> {
        self.patterns.iter().flat_map(Pattern::bound_names).collect()
    }
}

/// All clauses of one function name, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub clauses: Vec<Clause>,
}

impl FunctionDef {
    /// The arity fixed by the first clause.
    pub fn arity(&self) -> usize {
        self.clauses
            .first()
            .map(|clause| clause.patterns.len())
            .unwrap_or_default()
    }
}

/// `let pattern = value`, evaluated once.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub pattern: Pattern,
    pub value: Term,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Function(FunctionDef),
    Binding(Binding),
    Expression(Term),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub items: Vec<Item>,
}

impl Program {
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDef> {
        self.items.iter().filter_map(|item| match item {
            Item::Function(def) => Some(def),
            _ => None,
        })
    }
}
