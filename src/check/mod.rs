//! Static scope and arity checking
//!
//! One left-to-right pass over the canonical items, threading the set of
//! bound names:
//!
//! - built-ins and **every** function name are bound from the start, so
//!   functions may call each other regardless of order;
//! - a destructuring binding's term is checked first, and only then are its
//!   pattern variables added for later items;
//! - clause bodies additionally see their own pattern variables.
//!
//! The first violation aborts the check.

pub mod env;
pub mod error;

pub use env::BoundNames;
pub use error::CheckError;

use tracing::debug;

use crate::core::{Clause, FunctionDef, Item, Program, Term};
use crate::interpreter::Builtin;

use error::MATCH_NAME;

/// Check a whole program, failing on the first unbound name or arity mismatch
pub fn check_program(program: &Program) -> Result<(), CheckError> {
    let mut checker = Checker::new(program);

    for item in &program.items {
        checker.check_item(item)?;
    }

    Ok(())
}

struct Checker<'a> {
    bound: BoundNames<'a>,
}

impl<'a> Checker<'a> {
    fn new(program: &'a Program) -> Self {
        let builtins = Builtin::ALL.into_iter().map(|builtin| builtin.name());
        let functions = program.functions().map(|def| def.name.as_str());

        Self {
            bound: BoundNames::new(builtins.chain(functions)),
        }
    }

    fn check_item(&mut self, item: &'a Item) -> Result<(), CheckError> {
        match item {
            Item::Function(def) => {
                debug!(name = %def.name, clauses = def.clauses.len(), "checking function");
                self.check_function(def)
            }
            Item::Binding(binding) => {
                // the binding's own variables are not visible in its value
                self.check_term(&binding.value)?;
                let names = binding.pattern.bound_names();
                debug!(?names, "binding introduces names");
                self.bound.bind_global(names);
                Ok(())
            }
            Item::Expression(term) => self.check_term(term),
        }
    }

    fn check_function(&mut self, def: &'a FunctionDef) -> Result<(), CheckError> {
        self.check_clauses(&def.name, def.arity(), &def.clauses)
    }

    fn check_clauses(
        &mut self,
        name: &str,
        arity: usize,
        clauses: &'a [Clause],
    ) -> Result<(), CheckError> {
        for clause in clauses {
            if clause.patterns.len() != arity {
                return Err(CheckError::arity_mismatch(
                    name,
                    arity,
                    clause.patterns.len(),
                ));
            }

            self.bound.enter(clause.bound_names());
            let result = self.check_term(&clause.body);
            self.bound.leave();
            result?;
        }

        Ok(())
    }

    fn check_term(&mut self, term: &'a Term) -> Result<(), CheckError> {
        match term {
            Term::Tree(tree) => tree
                .children
                .iter()
                .try_for_each(|child| self.check_term(child)),
            Term::Var(name) => {
                if self.bound.contains(name) {
                    Ok(())
                } else {
                    Err(CheckError::unbound_variable(name))
                }
            }
            Term::App(app) => {
                if !self.bound.contains(&app.operation) {
                    return Err(CheckError::unbound_operation(&app.operation));
                }
                app.args.iter().try_for_each(|arg| self.check_term(arg))
            }
            Term::Match(m) => {
                m.scrutinees
                    .iter()
                    .try_for_each(|scrutinee| self.check_term(scrutinee))?;
                self.check_clauses(MATCH_NAME, m.scrutinees.len(), &m.clauses)
            }
        }
    }
}
