//! Clause elements: the union of the two handle kinds a clause may be built from.

use crate::{
    codec::Code,
    structures::{literal::Literal, variable::Variable, SolverId},
    types::err::HandleKind,
};

/// A clause element: either a variable, standing for its positive literal, or a literal used as-is.
///
/// Arguments to clause submission and model lookup accept anything convertible to an element.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Element {
    /// A variable, read as its positive literal.
    Variable(Variable),

    /// A literal.
    Literal(Literal),
}

impl Element {
    /// The kind of the underlying handle, as named in errors.
    pub fn kind(&self) -> HandleKind {
        match self {
            Self::Variable(_) => HandleKind::Variable,
            Self::Literal(_) => HandleKind::Literal,
        }
    }

    /// The literal code the element contributes to a clause.
    pub(crate) fn code(&self) -> Code {
        match self {
            Self::Variable(variable) => variable.literal().code(),
            Self::Literal(literal) => literal.code(),
        }
    }

    pub(crate) fn solver(&self) -> SolverId {
        match self {
            Self::Variable(variable) => variable.solver(),
            Self::Literal(literal) => literal.solver(),
        }
    }
}

impl From<Variable> for Element {
    fn from(variable: Variable) -> Self {
        Self::Variable(variable)
    }
}

impl From<Literal> for Element {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<&Variable> for Element {
    fn from(variable: &Variable) -> Self {
        Self::Variable(*variable)
    }
}

impl From<&Literal> for Element {
    fn from(literal: &Literal) -> Self {
        Self::Literal(*literal)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(variable) => write!(f, "{variable}"),
            Self::Literal(literal) => write!(f, "{literal}"),
        }
    }
}
