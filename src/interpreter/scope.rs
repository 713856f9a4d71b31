use std::collections::HashMap;

use super::value::Value;

/// Bindings produced by one successful match.
pub type Substitution = HashMap<String, Value>;

/// Manages variable lookup during interpretation.
///
/// The bottom frame is the global environment: it is only ever extended, by
/// top-level destructuring bindings. Every clause invocation pushes one
/// fresh frame on top of whatever is live at the call site and pops it on
/// return.
#[derive(Debug, Clone)]
pub struct Scope {
    frames: Vec<Substitution>,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    /// Create a scope holding only an empty global frame
    pub fn new() -> Self {
        Self {
            frames: vec![Substitution::new()],
        }
    }

    /// Enter a clause frame holding `bindings`
    pub fn enter(&mut self, bindings: Substitution) {
        self.frames.push(bindings);
    }

    /// Leave the innermost clause frame. The global frame stays.
    pub fn leave(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Resolve a name by searching from innermost to outermost frame
    pub fn resolve(&self, name: &str) -> Option<&Value> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    /// Merge bindings into the global frame
    pub fn define_globals(&mut self, bindings: Substitution) {
        self.frames[0].extend(bindings);
    }

    pub fn global(&self, name: &str) -> Option<&Value> {
        self.frames[0].get(name)
    }

    /// Number of clause frames currently on top of the global frame
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }
}
