//! # Check Error Definitions
//!
//! Errors reported by the static checker before any evaluation starts:
//!
//! - A variable is used but not bound (`UnboundVariable`)
//! - An operation is called but neither built in nor defined (`UnboundOperation`)
//! - Clauses disagree on how many patterns they take (`ArityMismatch`)
//!
//! The checker stops at the first violation, so a failed check always
//! carries exactly one error.

use thiserror::Error;

/// Name reported by `ArityMismatch` when the offending clauses belong to a
/// match term rather than a named function.
pub const MATCH_NAME: &str = "match";

/// Static error found by [`check_program`](super::check_program).
///
/// # Example Error Messages
///
/// ```text
/// unbound variable: x
/// unbound operation: frob
/// arity mismatch in 'f': expected 1 patterns, found 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// Reference to a variable that no enclosing pattern, earlier binding or
    /// function definition introduces.
    #[error("unbound variable: {name}")]
    UnboundVariable {
        /// The undefined variable name
        name: String,
    },

    /// Call of an operation that is neither built in nor defined anywhere in
    /// the program.
    #[error("unbound operation: {name}")]
    UnboundOperation { name: String },

    /// A clause whose pattern count differs from the expected arity.
    ///
    /// For functions the expected arity comes from the first clause. For
    /// match terms it is the number of scrutinees, and `name` is
    /// [`MATCH_NAME`].
    #[error("arity mismatch in '{name}': expected {expected} patterns, found {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
}

impl CheckError {
    pub fn unbound_variable(name: impl Into<String>) -> Self {
        CheckError::UnboundVariable { name: name.into() }
    }

    pub fn unbound_operation(name: impl Into<String>) -> Self {
        CheckError::UnboundOperation { name: name.into() }
    }

    pub fn arity_mismatch(name: impl Into<String>, expected: usize, found: usize) -> Self {
        CheckError::ArityMismatch {
            name: name.into(),
            expected,
            found,
        }
    }
}
