//! Error types used in the library.
//!
//! Every violation is a hard failure --- there is no silent truncation or coercion anywhere in the facade.
//! And, each failing operation fails before any effect on the engine, so a returned error never leaves a clause partially submitted.

/// The kind of a handle, named in errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HandleKind {
    /// A variable handle.
    Variable,

    /// A literal handle.
    Literal,
}

impl std::fmt::Display for HandleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable => write!(f, "variable"),
            Self::Literal => write!(f, "literal"),
        }
    }
}

/// Errors which may surface through the caller-facing API.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A value of the wrong kind where a variable or literal was required.
    ///
    /// Handles themselves are statically typed, so in practice this arises only at the external numbering boundary, where an integer may denote no literal (notably zero).
    TypeMismatch {
        /// The offending external number.
        found: i64,
    },

    /// A handle was used with a solver other than the one which created it.
    ///
    /// The single most important guard in the facade, as mixing handles across solver instances would silently corrupt variable indices.
    CrossSolverUsage {
        /// The kind of the offending handle.
        kind: HandleKind,
    },

    /// The engine cannot allocate a further variable.
    ///
    /// Resource exhaustion, not expected to be recoverable.
    AllocationFailure,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { found } => {
                write!(f, "{found} does not denote a literal")
            }
            Self::CrossSolverUsage { kind } => {
                write!(f, "{kind} created by a different solver")
            }
            Self::AllocationFailure => {
                write!(f, "the engine cannot allocate a further variable")
            }
        }
    }
}

impl std::error::Error for ErrorKind {}
