//! Allocation of fresh variables.

use crate::{
    engine::Engine,
    misc::log::targets,
    solver::{Solver, SolverState},
    structures::variable::Variable,
    types::err::ErrorKind,
};

impl<E: Engine> Solver<E> {
    /// Allocates a fresh variable, permanently scoped to this solver.
    ///
    /// The engine assigns the next dense index.
    /// Exhaustion of the engine surfaces as [ErrorKind::AllocationFailure], a terminal failure.
    pub fn fresh_variable(&mut self) -> Result<Variable, ErrorKind> {
        match self.engine.new_variable() {
            Some(index) => {
                log::trace!(target: targets::SOLVER, "Fresh variable {}", index + 1);
                self.state = SolverState::Input;
                Ok(Variable::new(index, self.id))
            }
            None => Err(ErrorKind::AllocationFailure),
        }
    }

    /// Allocates `count` fresh variables, in order.
    pub fn fresh_variables(&mut self, count: usize) -> Result<Vec<Variable>, ErrorKind> {
        (0..count).map(|_| self.fresh_variable()).collect()
    }
}
