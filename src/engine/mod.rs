/*!
The boundary with the solving engine.

The facade consumes a conflict-driven (or any complete) search procedure through the narrow [Engine] trait, and treats everything behind it --- propagation, clause learning, simplification --- as a black box.
Clauses cross the boundary as vectors of packed [literal codes](crate::codec), and assignments come back as ternary [Truth](crate::structures::truth::Truth) values.

The [Dpll] reference engine is small, complete, and deterministic under a fixed [Config](crate::config::Config), and is the default engine of a [Solver](crate::solver::Solver).
*/

use crate::{codec::Code, structures::truth::Truth};

mod dpll;
pub use dpll::Dpll;

/// A solving engine, as consumed by the [Solver](crate::solver::Solver) facade.
///
/// Implementations own their clause database and assignment outright.
/// The facade never hands an engine a literal whose variable the engine did not allocate.
pub trait Engine {
    /// Allocates the next dense variable index, or `None` on exhaustion.
    fn new_variable(&mut self) -> Option<u32>;

    /// The number of variables allocated so far.
    fn variable_count(&self) -> u32;

    /// Permanently adds a clause of packed literals.
    ///
    /// The clause is taken as given: deduplication and tautology handling are the engine's own concern.
    fn register_clause(&mut self, clause: Vec<Code>);

    /// Pre-solve simplification.
    ///
    /// Returns false if top-level unsatisfiability is already detected, in which case the result is permanent.
    fn simplify(&mut self) -> bool;

    /// Searches for an assignment satisfying every registered clause together with the given assumption literals.
    ///
    /// Returns true on a satisfying assignment, afterwards readable through [assignment_of](Engine::assignment_of).
    fn solve(&mut self, assumptions: &[Code]) -> bool;

    /// The value of a variable under the most recent satisfying assignment.
    ///
    /// Queried only after [solve](Engine::solve) has returned true, for each index below [variable_count](Engine::variable_count).
    fn assignment_of(&self, index: u32) -> Truth;
}
