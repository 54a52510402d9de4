//! Error types for the input layer.

use thiserror::Error;

/// Configuration-time error type.
///
/// Every variant is raised while the input layer is being built from a
/// binding description. Queries and assertion updates are total functions
/// and cannot fail.
#[derive(Error, Debug)]
pub enum Error {
    /// A named action is missing from the binding set.
    #[error("action not found: {0}")]
    ActionNotFound(String),

    /// A named action appears more than once in the binding set.
    #[error("ambiguous action: {name} matched {count} times")]
    AmbiguousAction { name: String, count: usize },

    /// A concrete control path could not be resolved to a physical control.
    #[error("unknown control path: {0}")]
    UnknownControlPath(String),

    /// An action's binding has no key or button entry to evaluate.
    #[error("binding has no control entry: {0}")]
    MissingControl(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
