use std::io::Write;

use tracing::trace;

use crate::core::{Clause, FunctionDef, Term};

use super::builtins::{Operation, Operations};
use super::error::RuntimeError;
use super::matching::match_all;
use super::scope::{Scope, Substitution};
use super::value::Value;

/// What evaluation needs besides the scope: the operation table and the sink
/// the builtins write to.
pub struct Context<'a> {
    pub ops: &'a Operations,
    pub out: &'a mut dyn Write,
}

impl Term {
    /// Evaluate eagerly, left to right.
    pub fn eval(&self, scope: &mut Scope, cx: &mut Context<'_>) -> Result<Value, RuntimeError> {
        match self {
            Term::Tree(tree) => {
                let children = eval_all(&tree.children, scope, cx)?;
                Ok(Value::new(tree.functor.clone(), children))
            }
            Term::Var(name) => match scope.resolve(name) {
                Some(value) => Ok(value.clone()),
                None => eval_nullary(name, scope, cx),
            },
            Term::App(app) => {
                let args = eval_all(&app.args, scope, cx)?;
                let ops = cx.ops;
                let operation = ops
                    .get(&app.operation)
                    .ok_or_else(|| RuntimeError::unbound_name(&app.operation))?;
                operation.apply(args, scope, cx)
            }
            Term::Match(m) => {
                let values = eval_all(&m.scrutinees, scope, cx)?;
                for clause in &m.clauses {
                    if let Some(bindings) = match_all(&clause.patterns, &values, Substitution::new())
                    {
                        return clause.run(bindings, scope, cx);
                    }
                }
                Err(RuntimeError::exhausted(None))
            }
        }
    }
}

fn eval_all(
    terms: &[Term],
    scope: &mut Scope,
    cx: &mut Context<'_>,
) -> Result<Vec<Value>, RuntimeError> {
    terms.iter().map(|term| term.eval(scope, cx)).collect()
}

/// A name no frame binds may still refer to a function taking no patterns.
fn eval_nullary(
    name: &str,
    scope: &mut Scope,
    cx: &mut Context<'_>,
) -> Result<Value, RuntimeError> {
    let ops = cx.ops;
    match ops.get(name) {
        Some(Operation::Defined(def)) if def.arity() == 0 => def.apply(vec![], scope, cx),
        _ => Err(RuntimeError::unbound_name(name)),
    }
}

impl Operation {
    pub fn apply(
        &self,
        args: Vec<Value>,
        scope: &mut Scope,
        cx: &mut Context<'_>,
    ) -> Result<Value, RuntimeError> {
        match self {
            Operation::Builtin(builtin) => {
                trace!(name = builtin.name(), args = args.len(), "calling builtin");
                builtin.call(&args, &mut *cx.out)
            }
            Operation::Defined(def) => def.apply(args, scope, cx),
        }
    }
}

impl FunctionDef {
    /// Run the first clause whose patterns accept `args`. The clause body
    /// sees the caller's scope plus one frame with the clause's bindings.
    pub fn apply(
        &self,
        args: Vec<Value>,
        scope: &mut Scope,
        cx: &mut Context<'_>,
    ) -> Result<Value, RuntimeError> {
        for (index, clause) in self.clauses.iter().enumerate() {
            if let Some(bindings) = match_all(&clause.patterns, &args, Substitution::new()) {
                trace!(name = %self.name, clause = index, depth = scope.depth(), "dispatch");
                return clause.run(bindings, scope, cx);
            }
        }

        Err(RuntimeError::exhausted(Some(&self.name)))
    }
}

impl Clause {
    fn run(
        &self,
        bindings: Substitution,
        scope: &mut Scope,
        cx: &mut Context<'_>,
    ) -> Result<Value, RuntimeError> {
        scope.enter(bindings);
        let result = self.body.eval(scope, cx);
        scope.leave();
        result
    }
}
