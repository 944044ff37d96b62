//! Variable handles.

use crate::{
    codec,
    structures::{literal::Literal, SolverId},
};

/// A handle to a variable of some solver.
///
/// Internally a variable is a small index, dense-allocated in creation order from zero.
/// Externally variables are numbered from one, following the DIMACS convention --- see [external](Variable::external).
///
/// A variable is valid only with the solver which created it, and every operation consuming the handle checks as much.
#[derive(Clone, Copy, Debug)]
pub struct Variable {
    index: u32,
    solver: SolverId,
}

impl Variable {
    pub(crate) fn new(index: u32, solver: SolverId) -> Self {
        Self { index, solver }
    }

    /// The internal (0-based) index of the variable.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The external (1-based) number of the variable.
    pub fn external(&self) -> i64 {
        codec::external(self.index)
    }

    /// The positive literal of the variable.
    pub fn literal(&self) -> Literal {
        Literal::new(codec::encode(self.index, false), self.solver)
    }

    pub(crate) fn solver(&self) -> SolverId {
        self.solver
    }
}

/// Equality compares variable indices and nothing else, as in provenance-checked use two equal-indexed handles name the same variable.
impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Variable {}

impl std::hash::Hash for Variable {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index.cmp(&other.index)
    }
}

/// The negative literal of the variable, a shortcut for negating [literal](Variable::literal).
impl std::ops::Neg for Variable {
    type Output = Literal;

    fn neg(self) -> Self::Output {
        self.literal().negate()
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.external())
    }
}
