//! Error types for Blueprint
//!
//! Uses `thiserror` for library errors. Composition errors are raised at
//! definition time so a malformed blueprint never yields a partial factory.

use thiserror::Error;

/// Result type alias for Blueprint operations
pub type BlueprintResult<T> = Result<T, BlueprintError>;

/// Main error type for Blueprint operations
#[derive(Error, Debug)]
pub enum BlueprintError {
    /// The `Extends` directive names something that is not a factory
    #[error("'Extends' target is not a factory (found {found})")]
    InvalidParent { found: String },

    /// A borrow source is neither a factory nor a member map
    #[error("borrow source at position {index} is neither a factory nor a member map (found {found})")]
    InvalidDonor { index: usize, found: String },

    /// A bind name does not resolve to an invokable member
    #[error("cannot bind '{name}': member is missing or not invokable")]
    NonInvokableBindTarget { name: String },

    /// A directive payload appeared under a key where it cannot be interpreted
    #[error("directive '{key}' has an unusable payload (found {found})")]
    MalformedDirective { key: String, found: String },

    /// Explicit invocation of a member that is not defined anywhere on the chain
    #[error("member '{name}' is not defined")]
    UndefinedMember { name: String },

    /// Explicit invocation of a member that is not invokable
    #[error("member '{name}' is not invokable")]
    NotInvokable { name: String },
}
