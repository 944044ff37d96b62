//! A handle-safe facade over a boolean satisfiability engine.
//!
//! marten_sat lets a caller declare boolean variables, assemble clauses (disjunctions of literals) over those variables, invoke solving, and, on success, query a resulting truth assignment.
//! The crate is concerned with the part of this surface that is easy to get subtly wrong: literal sign encoding, cross-solver handle safety, and model snapshot semantics.
//!
//! The search itself is delegated to a [solving engine](crate::engine) behind a narrow trait.
//! A small, complete reference engine ([Dpll](crate::engine::Dpll)) is provided so the facade is usable out of the box, and any conflict-driven solver can be slotted in by implementing the same five-operation boundary.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [Solver](crate::solver::Solver).
//!
//! A solver owns exactly one engine instance.
//! [Variables](crate::structures::variable::Variable) are allocated from a solver, [literals](crate::structures::literal::Literal) are signed references to variables, and both are lightweight `Copy` handles tagged with the identity of the solver which created them.
//! Every operation which consumes a handle checks that tag, so handles from distinct solvers can never silently corrupt one another's variable indices.
//!
//! On a successful solve a [Model](crate::model::Model) is returned: an immutable snapshot of the engine's assignment, indexed by variable, with a ternary [Truth](crate::structures::truth::Truth) value for each.
//! A model can produce a [blocking clause](crate::model::Model::blocking_clause) which, added back to the solver, forbids that assignment and so drives enumeration of all distinct models.
//!
//! Useful starting points:
//! - The [solver] module, for the caller-facing surface.
//! - The [codec] module, for the packed literal encoding and the 1-based DIMACS numbering convention.
//! - The [engine] module, for the boundary with the search procedure.
//!
//! # Examples
//!
//! Solve a small formula and read the assignment.
//!
//! ```rust
//! # use marten_sat::solver::Solver;
//! # use marten_sat::structures::truth::Truth;
//! let mut solver = Solver::new();
//!
//! let x = solver.fresh_variable().unwrap();
//! let y = solver.fresh_variable().unwrap();
//!
//! solver.add_clause([x, y]).unwrap();
//! solver.add_clause([-x, -y]).unwrap();
//!
//! let model = solver.solve().expect("a satisfiable formula");
//!
//! assert!(model.value_of(x).unwrap() != model.value_of(y).unwrap());
//! ```
//!
//! Count every distinct model of the same formula.
//!
//! ```rust
//! # use marten_sat::solver::Solver;
//! let mut solver = Solver::new();
//!
//! let x = solver.fresh_variable().unwrap();
//! let y = solver.fresh_variable().unwrap();
//!
//! solver.add_clause([x, y]).unwrap();
//! solver.add_clause([-x, -y]).unwrap();
//!
//! assert_eq!(solver.models().count(), 2);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made at the points where the facade talks to the engine, under the targets listed in [misc::log].
//! No log implementation is provided; attach one (e.g. env_logger) to inspect a solve.

mod builder;

pub mod codec;
pub mod config;
pub mod engine;
pub mod formula;
pub mod misc;
pub mod model;
pub mod reports;
pub mod solver;
pub mod structures;
pub mod types;
