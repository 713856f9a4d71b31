use lachs::Span;

use super::pattern::Pattern;
use super::term::{Ident, Term};

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Function(FunctionClause),
    Binding(Binding),
    Expression(Term),
}

/// One `fn name(patterns) = body` clause. Clauses sharing a name are merged
/// into a single definition during lowering.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionClause {
    pub name: Ident,
    pub patterns: Vec<Pattern>,
    pub body: Term,
    pub position: Span,
}

/// `let pattern = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub pattern: Pattern,
    pub value: Term,
    pub position: Span,
}
