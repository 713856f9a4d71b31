use std::io;

use thiserror::Error;

/// Failure while running a checked program.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// No clause of a function, match term or destructuring binding accepted
    /// the values. `operation` names the function when there is one.
    #[error("pattern match failure{}", describe_operation(.operation))]
    PatternMatchExhausted { operation: Option<String> },

    /// A name with no binding and no operation behind it.
    ///
    /// Unreachable for checked programs unless definitions are registered
    /// sequentially and a call precedes its definition.
    #[error("unbound name: {name}")]
    UnboundName { name: String },

    #[error("failed to write output")]
    Output(#[from] io::Error),
}

fn describe_operation(operation: &Option<String>) -> String {
    operation
        .as_ref()
        .map(|name| format!(": {name}"))
        .unwrap_or_default()
}

impl RuntimeError {
    pub fn exhausted(operation: Option<&str>) -> Self {
        RuntimeError::PatternMatchExhausted {
            operation: operation.map(str::to_string),
        }
    }

    pub fn unbound_name(name: impl Into<String>) -> Self {
        RuntimeError::UnboundName { name: name.into() }
    }
}
