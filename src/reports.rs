/*!
Reports on the state of a solver.
*/

use crate::solver::SolverState;

/// A high-level report on the most recent solve.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Report {
    /// The formula of the solver is satisfiable.
    Satisfiable,

    /// The formula of the solver is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the solver is unknown, for some reason.
    Unknown,
}

impl From<&SolverState> for Report {
    fn from(state: &SolverState) -> Self {
        match state {
            SolverState::Input => Self::Unknown,
            SolverState::Satisfiable => Self::Satisfiable,
            SolverState::UnsatisfiableBySimplification | SolverState::UnsatisfiableBySearch => {
                Self::Unsatisfiable
            }
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
