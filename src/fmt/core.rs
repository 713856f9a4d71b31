//! Pretty printer for the canonical program
//!
//! Shows a lowered program the way `--emit core` prints it: one definition
//! per function name, lists and strings folded back into `[..]` where the
//! cons chain is proper, and every atom rendered as it would be lexed.

use std::fmt::{self, Display};

use crate::core::{
    Binding, Clause, Functor, FunctionDef, Item, MatchTerm, Pattern, Program, ReservedTag, Term,
};

use super::atom_text;

const INDENT: &str = "  ";

struct Formatter {
    buffer: String,
    indent_level: usize,
}

impl Formatter {
    fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }

    fn write_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    fn write_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn finish(self) -> String {
        self.buffer
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();

        for item in &self.items {
            format_item(item, &mut formatter);
            formatter.write_newline();
        }

        f.write_str(&formatter.finish())
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        format_term(self, &mut formatter);
        f.write_str(&formatter.finish())
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        format_pattern(self, &mut formatter);
        f.write_str(&formatter.finish())
    }
}

fn format_item(item: &Item, fmt: &mut Formatter) {
    match item {
        Item::Function(def) => format_function(def, fmt),
        Item::Binding(binding) => format_binding(binding, fmt),
        Item::Expression(term) => {
            format_term(term, fmt);
            fmt.write_str(";");
        }
    }
}

fn format_function(def: &FunctionDef, fmt: &mut Formatter) {
    fmt.write_str("fn ");
    fmt.write_str(&def.name);
    fmt.indent();
    for clause in &def.clauses {
        fmt.write_newline();
        fmt.write_indent();
        format_patterns(&clause.patterns, fmt);
        fmt.write_str(" = ");
        format_term(&clause.body, fmt);
        fmt.write_str(";");
    }
    fmt.dedent();
}

fn format_binding(binding: &Binding, fmt: &mut Formatter) {
    fmt.write_str("let ");
    format_pattern(&binding.pattern, fmt);
    fmt.write_str(" = ");
    format_term(&binding.value, fmt);
    fmt.write_str(";");
}

fn format_term(term: &Term, fmt: &mut Formatter) {
    if let Some(elements) = term_list(term) {
        fmt.write_str("[");
        format_separated(&elements, fmt, format_term);
        fmt.write_str("]");
        return;
    }

    match term {
        Term::Tree(tree) => match (&tree.functor, tree.children.as_slice()) {
            (Functor::Reserved(ReservedTag::ListCons), [head, tail]) => {
                let nested = is_cons_term(head);
                if nested {
                    fmt.write_str("(");
                }
                format_term(head, fmt);
                if nested {
                    fmt.write_str(")");
                }
                fmt.write_str(" : ");
                format_term(tail, fmt);
            }
            (functor, children) => {
                format_functor(functor, fmt);
                if !children.is_empty() {
                    fmt.write_str("(");
                    let children: Vec<&Term> = children.iter().collect();
                    format_separated(&children, fmt, format_term);
                    fmt.write_str(")");
                }
            }
        },
        Term::Var(name) => fmt.write_str(name),
        Term::App(app) => {
            fmt.write_str(&app.operation);
            fmt.write_str("(");
            let args: Vec<&Term> = app.args.iter().collect();
            format_separated(&args, fmt, format_term);
            fmt.write_str(")");
        }
        Term::Match(m) => format_match(m, fmt),
    }
}

fn format_match(m: &MatchTerm, fmt: &mut Formatter) {
    fmt.write_str("match ");
    let scrutinees: Vec<&Term> = m.scrutinees.iter().collect();
    format_separated(&scrutinees, fmt, format_term);
    fmt.write_str(" {");
    fmt.indent();
    for (i, clause) in m.clauses.iter().enumerate() {
        if i > 0 {
            fmt.write_str(",");
        }
        fmt.write_newline();
        fmt.write_indent();
        format_clause_arm(clause, fmt);
    }
    fmt.dedent();
    fmt.write_newline();
    fmt.write_indent();
    fmt.write_str("}");
}

fn format_clause_arm(clause: &Clause, fmt: &mut Formatter) {
    let patterns: Vec<&Pattern> = clause.patterns.iter().collect();
    format_separated(&patterns, fmt, format_pattern);
    fmt.write_str(" => ");
    format_term(&clause.body, fmt);
}

fn format_patterns(patterns: &[Pattern], fmt: &mut Formatter) {
    fmt.write_str("(");
    let patterns: Vec<&Pattern> = patterns.iter().collect();
    format_separated(&patterns, fmt, format_pattern);
    fmt.write_str(")");
}

fn format_pattern(pattern: &Pattern, fmt: &mut Formatter) {
    if let Some(elements) = pattern_list(pattern) {
        fmt.write_str("[");
        format_separated(&elements, fmt, format_pattern);
        fmt.write_str("]");
        return;
    }

    match pattern {
        Pattern::Tree(tree) => match (&tree.functor, tree.children.as_slice()) {
            (Functor::Reserved(ReservedTag::ListCons), [head, tail]) => {
                let nested = is_cons_pattern(head);
                if nested {
                    fmt.write_str("(");
                }
                format_pattern(head, fmt);
                if nested {
                    fmt.write_str(")");
                }
                fmt.write_str(" : ");
                format_pattern(tail, fmt);
            }
            (functor, children) => {
                format_functor(functor, fmt);
                if !children.is_empty() {
                    format_patterns(children, fmt);
                }
            }
        },
        Pattern::Var(name) => fmt.write_str(name),
        Pattern::Wildcard => fmt.write_str("_"),
        Pattern::As(as_pattern) => {
            fmt.write_str(&as_pattern.name);
            fmt.write_str("@");
            let nested = is_cons_pattern(&as_pattern.pattern);
            if nested {
                fmt.write_str("(");
            }
            format_pattern(&as_pattern.pattern, fmt);
            if nested {
                fmt.write_str(")");
            }
        }
    }
}

fn format_functor(functor: &Functor, fmt: &mut Formatter) {
    match functor {
        Functor::Atom(text) => fmt.write_str(&atom_text(text)),
        Functor::Reserved(ReservedTag::ListEmpty) => fmt.write_str("[]"),
        Functor::Reserved(tag) => fmt.write_str(&Functor::Reserved(*tag).to_string()),
    }
}

fn format_separated<T>(items: &[&T], fmt: &mut Formatter, format: impl Fn(&T, &mut Formatter)) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            fmt.write_str(", ");
        }
        format(*item, fmt);
    }
}

/// Elements of a proper cons chain, if `term` is one.
fn term_list(term: &Term) -> Option<Vec<&Term>> {
    let mut elements = Vec::new();
    let mut current = term;
    loop {
        let Term::Tree(tree) = current else {
            return None;
        };
        match (&tree.functor, tree.children.as_slice()) {
            (Functor::Reserved(ReservedTag::ListEmpty), []) => return Some(elements),
            (Functor::Reserved(ReservedTag::ListCons), [head, tail]) => {
                elements.push(head);
                current = tail;
            }
            _ => return None,
        }
    }
}

fn pattern_list(pattern: &Pattern) -> Option<Vec<&Pattern>> {
    let mut elements = Vec::new();
    let mut current = pattern;
    loop {
        let Pattern::Tree(tree) = current else {
            return None;
        };
        match (&tree.functor, tree.children.as_slice()) {
            (Functor::Reserved(ReservedTag::ListEmpty), []) => return Some(elements),
            (Functor::Reserved(ReservedTag::ListCons), [head, tail]) => {
                elements.push(head);
                current = tail;
            }
            _ => return None,
        }
    }
}

fn is_cons_term(term: &Term) -> bool {
    matches!(term, Term::Tree(tree) if tree.functor == Functor::cons()) && term_list(term).is_none()
}

fn is_cons_pattern(pattern: &Pattern) -> bool {
    matches!(pattern, Pattern::Tree(tree) if tree.functor == Functor::cons())
        && pattern_list(pattern).is_none()
}
