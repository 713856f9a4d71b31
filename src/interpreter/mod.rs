//! Evaluator for canonical programs
//!
//! Items are processed in order against one [`Scope`] (whose bottom frame is
//! the global environment) and one [`Operations`] table:
//!
//! - a function definition becomes callable under its name;
//! - a destructuring binding is evaluated, matched, and its bindings merged
//!   into the global frame;
//! - a bare expression is evaluated for the output its builtin calls write.
//!
//! When definitions become callable is controlled by [`DefinitionOrder`].

mod builtins;
mod error;
mod eval;
pub mod matching;
mod scope;
mod value;

pub use builtins::{Builtin, Operation, Operations};
pub use error::RuntimeError;
pub use eval::Context;
pub use matching::{match_all, match_pattern};
pub use scope::{Scope, Substitution};
pub use value::Value;

use std::io::{self, Write};

use tracing::debug;

use crate::core::{Item, Program, Term};

/// When function definitions enter the operation table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DefinitionOrder {
    /// Register every definition before evaluating any binding or bare
    /// expression, so calls may precede definitions just as the checker
    /// allows.
    ///
    /// Globals are still bound in item order. A body that reads a global
    /// bound after an earlier call site passes the check but fails with an
    /// unbound name when that call runs.
    #[default]
    Hoisted,
    /// Register each definition when the item loop reaches it. Calling a
    /// function before its definition fails with an unbound name.
    Sequential,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub definitions: DefinitionOrder,
}

/// Runs programs, writing builtin output to `out`.
pub struct Interpreter<W> {
    scope: Scope,
    ops: Operations,
    out: W,
    options: Options,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Self::with_options(out, Options::default())
    }

    pub fn with_options(out: W, options: Options) -> Self {
        Self {
            scope: Scope::new(),
            ops: Operations::with_builtins(),
            out,
            options,
        }
    }

    /// Process every item of a checked program
    pub fn run(&mut self, program: Program) -> Result<(), RuntimeError> {
        let items = match self.options.definitions {
            DefinitionOrder::Hoisted => {
                let (definitions, rest): (Vec<_>, Vec<_>) = program
                    .items
                    .into_iter()
                    .partition(|item| matches!(item, Item::Function(_)));
                for definition in definitions {
                    self.run_item(definition)?;
                }
                rest
            }
            DefinitionOrder::Sequential => program.items,
        };

        for item in items {
            self.run_item(item)?;
        }

        self.out.flush()?;
        Ok(())
    }

    pub fn run_item(&mut self, item: Item) -> Result<(), RuntimeError> {
        match item {
            Item::Function(def) => {
                debug!(name = %def.name, arity = def.arity(), "defining operation");
                self.ops.define(def);
            }
            Item::Binding(binding) => {
                let value = self.eval(&binding.value)?;
                let bindings = match_pattern(&binding.pattern, &value, Substitution::new())
                    .ok_or_else(|| RuntimeError::exhausted(None))?;
                debug!(names = ?bindings.keys().collect::<Vec<_>>(), "binding globals");
                self.scope.define_globals(bindings);
            }
            Item::Expression(term) => {
                self.eval(&term)?;
            }
        }

        Ok(())
    }

    /// Evaluate a term against the current globals and operations
    pub fn eval(&mut self, term: &Term) -> Result<Value, RuntimeError> {
        let mut cx = Context {
            ops: &self.ops,
            out: &mut self.out,
        };
        term.eval(&mut self.scope, &mut cx)
    }

    /// Look up a name bound by a top-level destructuring binding
    pub fn global(&self, name: &str) -> Option<&Value> {
        self.scope.global(name)
    }

    pub fn operations(&self) -> &Operations {
        &self.ops
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

/// Run a checked program, writing to standard output
pub fn run(program: Program, options: Options) -> Result<(), RuntimeError> {
    let stdout = io::stdout().lock();
    Interpreter::with_options(stdout, options).run(program)
}
