//! Literal handles.

use crate::{
    codec::{self, Code},
    structures::{variable::Variable, SolverId},
};

/// A signed reference to a [Variable]: a variable index paired with a polarity, packed as a [Code].
///
/// A literal carries the provenance tag of its originating variable, and is subject to the same cross-solver checks.
///
/// ```rust
/// # use marten_sat::solver::Solver;
/// let mut solver = Solver::new();
/// let x = solver.fresh_variable().unwrap();
///
/// let positive = x.literal();
/// let negative = -x;
///
/// assert!(positive.is_positive());
/// assert_eq!(positive.negate(), negative);
/// assert_eq!(negative.negate().negate().negate(), positive);
/// assert_ne!(positive, negative);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Literal {
    code: Code,
    solver: SolverId,
}

impl Literal {
    pub(crate) fn new(code: Code, solver: SolverId) -> Self {
        Self { code, solver }
    }

    /// The internal (0-based) index of the literal's variable.
    pub fn index(&self) -> u32 {
        codec::index_of(self.code)
    }

    /// The variable of the literal.
    pub fn variable(&self) -> Variable {
        Variable::new(self.index(), self.solver)
    }

    /// Whether the literal is a positive occurrence of its variable.
    pub fn is_positive(&self) -> bool {
        !codec::is_negated(self.code)
    }

    /// Whether the literal is a negated occurrence of its variable.
    pub fn is_negative(&self) -> bool {
        codec::is_negated(self.code)
    }

    /// The negation of the literal.
    ///
    /// An involution, and never equal to the literal itself.
    pub fn negate(&self) -> Self {
        Self {
            code: codec::negate(self.code),
            solver: self.solver,
        }
    }

    /// The signed external number of the literal, negative for a negated occurrence.
    pub fn external(&self) -> i64 {
        codec::external_literal(self.code)
    }

    pub(crate) fn code(&self) -> Code {
        self.code
    }

    pub(crate) fn solver(&self) -> SolverId {
        self.solver
    }
}

/// Equality compares the packed code and nothing else: same variable index and same polarity.
impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Literal {}

impl std::hash::Hash for Literal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Literals are ordered by variable and then polarity, with a positive occurrence strictly less than a negated one.
impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.code.cmp(&other.code)
    }
}

impl std::ops::Neg for Literal {
    type Output = Literal;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.external())
    }
}
