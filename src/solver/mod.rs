/*!
The solver facade --- within which variables are allocated, clauses submitted, and solves take place.

A [Solver] owns exactly one [Engine] instance, together with the monotonically growing set of variables allocated against it.
Every handle the solver hands out carries the solver's identity, and every operation consuming a handle verifies it.

Execution is synchronous and single-threaded: [solve](Solver::solve) blocks until the engine completes, no operation suspends, and no internal locking is performed.
Clause submission is immediately and permanently visible to subsequent solves --- there is no transaction or rollback.

# Example

```rust
# use marten_sat::solver::Solver;
# use marten_sat::reports::Report;
# use marten_sat::structures::truth::Truth;
let mut solver = Solver::new();

let p = solver.fresh_variable().unwrap();
let q = solver.fresh_variable().unwrap();

solver.add_clause([p, q]).unwrap();
solver.add_clause([-p]).unwrap();

let model = solver.solve().expect("a satisfiable formula");
assert_eq!(solver.report(), Report::Satisfiable);

assert_eq!(model.value_of(p), Ok(Truth::False));
assert_eq!(model.value_of(q), Ok(Truth::True));
```
*/

mod models;
pub use models::Models;
mod registry;

use crate::{
    builder,
    config::Config,
    engine::{Dpll, Engine},
    formula::Formula,
    misc::log::targets,
    model::Model,
    reports::Report,
    structures::{element::Element, SolverId},
    types::err::ErrorKind,
};

/// The state of a solver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolverState {
    /// The solver allows input, and satisfiability is unknown.
    Input,

    /// The most recent solve found a satisfying assignment.
    Satisfiable,

    /// Unsatisfiability was established during pre-solve simplification.
    UnsatisfiableBySimplification,

    /// Unsatisfiability was established by a full search.
    UnsatisfiableBySearch,
}

impl std::fmt::Display for SolverState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::UnsatisfiableBySimplification => write!(f, "Unsatisfiable (simplification)"),
            Self::UnsatisfiableBySearch => write!(f, "Unsatisfiable (search)"),
        }
    }
}

/// A facade over a solving engine, parameterised to the engine used.
pub struct Solver<E: Engine = Dpll> {
    /// The identity stamped on every handle this solver creates.
    id: SolverId,

    /// The owned engine instance.
    engine: E,

    /// The state of the solver.
    state: SolverState,
}

impl Solver<Dpll> {
    /// A solver over a default-configured [Dpll] engine.
    pub fn new() -> Self {
        Self::from_config(Config::default())
    }

    /// A solver over a [Dpll] engine with the given configuration.
    pub fn from_config(config: Config) -> Self {
        Self::with_engine(Dpll::new(&config))
    }
}

impl Default for Solver<Dpll> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Engine> Solver<E> {
    /// A solver over the given engine instance.
    ///
    /// The engine is owned outright, and should be empty: the solver only knows of variables allocated through it.
    pub fn with_engine(engine: E) -> Self {
        Self {
            id: SolverId::fresh(),
            engine,
            state: SolverState::Input,
        }
    }

    /// The engine, read-only.
    ///
    /// Mutation stays with the solver, which is what keeps handles and engine state in step.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The number of variables allocated so far, as reported by the engine.
    pub fn variable_count(&self) -> u32 {
        self.engine.variable_count()
    }

    /// A report on the most recent solve.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// Adds a clause: a disjunction over the given variables and literals.
    ///
    /// A variable stands for its positive literal.
    /// Duplicate literals and tautologies are passed to the engine unmodified.
    ///
    /// Validation is all-or-nothing: an element from a different solver fails with [ErrorKind::CrossSolverUsage] before anything reaches the engine.
    ///
    /// Returns the solver itself, to allow chaining.
    /// Submission is irreversible --- no clause-removal operation exists.
    pub fn add_clause<C, T>(&mut self, elements: C) -> Result<&mut Self, ErrorKind>
    where
        C: IntoIterator<Item = T>,
        T: Into<Element>,
    {
        let clause = builder::build_clause(self.id, elements.into_iter().map(Into::into))?;

        log::trace!(target: targets::SOLVER, "Clause of length {} submitted", clause.len());
        self.engine.register_clause(clause);
        self.state = SolverState::Input;

        Ok(self)
    }

    /// Adds a propositional [Formula], clause by clause of its conjunctive normal form.
    ///
    /// Each clause passes through the ordinary submission path, so provenance is enforced throughout.
    /// A formula mixing handles from another solver may fail after some of its clauses were submitted; build formulas from one solver's handles.
    pub fn add_formula(&mut self, formula: &Formula) -> Result<&mut Self, ErrorKind> {
        for clause in formula.cnf() {
            self.add_clause(clause)?;
        }
        Ok(self)
    }

    /// Determines the satisfiability of the submitted clauses.
    ///
    /// Simplification runs first; if it alone proves unsatisfiability no search happens.
    /// Otherwise the engine searches with no assumptions.
    /// On success the engine's assignment is copied into a fresh [Model] scoped to this solver.
    ///
    /// Both unsatisfiable paths surface as `None`; [report](Solver::report) and the solver state keep the distinction for diagnostics.
    /// Repeated calls after further input are permitted, and re-run the full procedure.
    pub fn solve(&mut self) -> Option<Model> {
        if !self.engine.simplify() {
            log::info!(target: targets::SOLVER, "Unsatisfiable by simplification");
            self.state = SolverState::UnsatisfiableBySimplification;
            return None;
        }

        if !self.engine.solve(&[]) {
            log::info!(target: targets::SOLVER, "Unsatisfiable by search");
            self.state = SolverState::UnsatisfiableBySearch;
            return None;
        }

        self.state = SolverState::Satisfiable;

        let count = self.engine.variable_count();
        let values = (0..count).map(|index| self.engine.assignment_of(index)).collect();

        log::info!(target: targets::SOLVER, "Satisfiable over {count} variables");
        Some(Model::new(values, self.id))
    }
}
