//! Desugaring - Lower the surface AST to the canonical core AST
//!
//! This module handles the lowering transformations:
//! - Cons `h:t` → tree over [`ReservedTag::ListCons`](crate::core::ReservedTag)
//! - List `[a, b]` → right fold of cons cells ending in the empty list
//! - String `"ab"` → list of one-character atoms
//! - Function clauses sharing a name → one definition at the first occurrence
//!
//! Lowering is total: every parsed program lowers, and it never reports
//! errors. Arity consistency is left to [`crate::check`].

use std::collections::HashMap;

use tracing::trace;

use crate::ast;
use crate::core::*;

/// Lower a complete program
pub fn desugar_program(program: ast::Program) -> Program {
    let mut items: Vec<Item> = Vec::with_capacity(program.items.len());
    let mut definitions: HashMap<String, usize> = HashMap::new();

    for item in program.items {
        match item {
            ast::item::Item::Function(clause) => {
                let name = clause.name.value.clone();
                let clause = desugar_function_clause(clause);

                match definitions.get(&name) {
                    Some(&index) => {
                        if let Item::Function(def) = &mut items[index] {
                            def.clauses.push(clause);
                        }
                    }
                    None => {
                        trace!(%name, index = items.len(), "new function definition");
                        definitions.insert(name.clone(), items.len());
                        items.push(Item::Function(FunctionDef {
                            name,
                            clauses: vec![clause],
                        }));
                    }
                }
            }
            ast::item::Item::Binding(binding) => items.push(Item::Binding(Binding {
                pattern: desugar_pattern(binding.pattern),
                value: desugar_term(binding.value),
            })),
            ast::item::Item::Expression(term) => items.push(Item::Expression(desugar_term(term))),
        }
    }

    Program { items }
}

fn desugar_function_clause(clause: ast::item::FunctionClause) -> Clause {
    Clause {
        patterns: clause.patterns.into_iter().map(desugar_pattern).collect(),
        body: desugar_term(clause.body),
    }
}

fn desugar_match_clause(clause: ast::term::MatchClause) -> Clause {
    Clause {
        patterns: clause.patterns.into_iter().map(desugar_pattern).collect(),
        body: desugar_term(clause.body),
    }
}

pub fn desugar_term(term: ast::term::Term) -> Term {
    use ast::term::Term as Surface;

    match term {
        Surface::Tree(tree) => Term::tree(
            Functor::atom(tree.functor.value),
            tree.children.into_iter().map(desugar_term).collect(),
        ),
        Surface::Var(ident) => Term::Var(ident.value),
        Surface::App(app) => Term::App(AppTerm {
            operation: app.operation.value,
            args: app.args.into_iter().map(desugar_term).collect(),
        }),
        Surface::Cons(cons) => Term::cons(desugar_term(*cons.head), desugar_term(*cons.tail)),
        Surface::String(string) => Term::list(
            string_atoms(&string.value)
                .map(|atom| Term::tree(atom, vec![]))
                .collect(),
        ),
        Surface::List(list) => Term::list(list.elements.into_iter().map(desugar_term).collect()),
        Surface::Match(m) => Term::Match(MatchTerm {
            scrutinees: m.scrutinees.into_iter().map(desugar_term).collect(),
            clauses: m.clauses.into_iter().map(desugar_match_clause).collect(),
        }),
    }
}

pub fn desugar_pattern(pattern: ast::pattern::Pattern) -> Pattern {
    use ast::pattern::Pattern as Surface;

    match pattern {
        Surface::Tree(tree) => Pattern::tree(
            Functor::atom(tree.functor.value),
            tree.children.into_iter().map(desugar_pattern).collect(),
        ),
        Surface::Var(ident) => Pattern::Var(ident.value),
        Surface::Wildcard(_) => Pattern::Wildcard,
        Surface::As(as_pattern) => {
            Pattern::as_pattern(as_pattern.name.value, desugar_pattern(*as_pattern.pattern))
        }
        Surface::Cons(cons) => {
            Pattern::cons(desugar_pattern(*cons.head), desugar_pattern(*cons.tail))
        }
        Surface::String(string) => Pattern::list(
            string_atoms(&string.value)
                .map(|atom| Pattern::tree(atom, vec![]))
                .collect(),
        ),
        Surface::List(list) => {
            Pattern::list(list.elements.into_iter().map(desugar_pattern).collect())
        }
    }
}

/// One functor per character of a string literal.
fn string_atoms(text: &str) -> impl Iterator<Item = Functor> + '_ {
    text.chars().map(|c| Functor::atom(c.to_string()))
}
