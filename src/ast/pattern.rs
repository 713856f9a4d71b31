//! # Pattern AST Nodes
//!
//! This module defines the surface form of patterns. Patterns appear in:
//!
//! - **Function clauses**: `fn len(_:t) = ...`
//! - **Destructuring bindings**: `let h:t = [A, B];`
//! - **Match clauses**: `match x { Zero => ..., Suc(n) => ... }`
//!
//! ## Pattern Forms
//!
//! ```text
//! Suc(n)        tree pattern: functor + child patterns
//! n             variable: binds the matched value
//! _             wildcard: matches anything, binds nothing
//! all@Suc(n)    as-pattern: binds `all` and matches `Suc(n)`
//! h:t           cons sugar
//! "ab"          string sugar
//! [a, b]        list sugar
//! ```
//!
//! The three sugared forms survive only until lowering, which rewrites them
//! into tree patterns over the reserved list tags (see [`crate::desugar`]).
//!
//! ## Non-linear Patterns
//!
//! A variable may appear more than once in the same clause. All occurrences
//! must then match structurally equal values:
//!
//! ```text
//! fn same(x, x) = True;
//! fn same(_, _) = False;
//! ```

use lachs::Span;

use super::term::{Atom, Ident, StringLiteral};

/// All surface pattern forms.
///
/// # Variants
///
/// * `Tree` - functor with child patterns (`Suc(n)`, `Zero`, `'a'`)
/// * `Var` - binds the matched value (`n`)
/// * `Wildcard` - matches anything (`_`)
/// * `As` - binds a name while matching an inner pattern (`all@Suc(n)`)
/// * `Cons` - list head and tail (`h:t`)
/// * `String` - list of one-character atoms (`"ab"`)
/// * `List` - fixed-length list (`[a, b]`)
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Tree(TreePattern),
    Var(Ident),
    Wildcard(Wildcard),
    As(AsPattern),
    Cons(ConsPattern),
    String(StringLiteral),
    List(ListPattern),
}

impl Pattern {
    /// Get the source position of this pattern
    pub fn position(&self) -> Span {
        match self {
            Pattern::Tree(tree) => tree.position.clone(),
            Pattern::Var(ident) => ident.position.clone(),
            Pattern::Wildcard(w) => w.position.clone(),
            Pattern::As(as_pattern) => as_pattern.position.clone(),
            Pattern::Cons(cons) => cons.position.clone(),
            Pattern::String(string) => string.position.clone(),
            Pattern::List(list) => list.position.clone(),
        }
    }
}

/// Tree pattern.
///
/// Matches a value whose functor is `functor` and whose children match
/// `children` pairwise. The child count is part of the match: `F(x)` does
/// not match `F(A, B)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TreePattern {
    pub functor: Atom,
    pub children: Vec<Pattern>,
    pub position: Span,
}

/// Wildcard pattern (`_`).
#[derive(Debug, Clone, PartialEq)]
pub struct Wildcard {
    pub position: Span,
}

/// As-pattern (`name@pattern`).
///
/// The inner pattern is matched first; `name` is then bound to the whole
/// value under the same rules as a variable pattern, so it takes part in the
/// non-linearity check.
#[derive(Debug, Clone, PartialEq)]
pub struct AsPattern {
    pub name: Ident,
    pub pattern: Box<Pattern>,
    pub position: Span,
}

/// Cons pattern (`head:tail`).
///
/// Matches a non-empty list. Right associative, so `a:b:rest` matches a list
/// of at least two elements.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsPattern {
    pub head: Box<Pattern>,
    pub tail: Box<Pattern>,
    pub position: Span,
}

/// List pattern (`[p0, ..., pn]`), matching lists of exactly `n + 1` elements.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPattern {
    pub elements: Vec<Pattern>,
    pub position: Span,
}
