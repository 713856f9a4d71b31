use std::collections::HashMap;
use std::io::Write;

use crate::core::FunctionDef;
use crate::fmt::value::{display, print};

use super::error::RuntimeError;
use super::value::Value;

/// Builtin operation identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// Human-oriented rendering of its arguments on one line.
    Display,
    /// Machine-oriented rendering, one line per argument.
    Print,
}

impl Builtin {
    pub const ALL: [Builtin; 2] = [Builtin::Display, Builtin::Print];

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Display => "display",
            Builtin::Print => "print",
        }
    }

    /// Write the arguments to `out`. Both builtins evaluate to `[]`.
    pub fn call(&self, args: &[Value], out: &mut dyn Write) -> Result<Value, RuntimeError> {
        match self {
            Builtin::Display => {
                let line = args.iter().map(display).collect::<Vec<_>>().join(" ");
                writeln!(out, "{line}")?;
            }
            Builtin::Print => {
                for arg in args {
                    writeln!(out, "{}", print(arg))?;
                }
            }
        }

        Ok(Value::empty_list())
    }
}

/// Something an application term can call.
#[derive(Debug, Clone)]
pub enum Operation {
    Builtin(Builtin),
    Defined(FunctionDef),
}

/// The global operation table.
#[derive(Debug, Clone)]
pub struct Operations {
    table: HashMap<String, Operation>,
}

impl Default for Operations {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl Operations {
    /// A table holding only the builtins
    pub fn with_builtins() -> Self {
        Self {
            table: Builtin::ALL
                .into_iter()
                .map(|builtin| (builtin.name().to_string(), Operation::Builtin(builtin)))
                .collect(),
        }
    }

    /// Make a user definition callable, replacing any operation of that name
    pub fn define(&mut self, def: FunctionDef) {
        self.table
            .insert(def.name.clone(), Operation::Defined(def));
    }

    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.table.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }
}
