//! Iteration over all distinct models.

use crate::{engine::Engine, model::Model, solver::Solver};

impl<E: Engine> Solver<E> {
    /// An iterator over every distinct model of the submitted clauses.
    ///
    /// Each step solves, yields the model, and adds its [blocking clause](Model::blocking_clause) before the next solve, so no model is yielded twice and --- the formula having finitely many models --- the iterator ends.
    ///
    /// The blocking clauses are ordinary, irreversible input: after iteration the solver's formula denies every model yielded so far.
    ///
    /// ```rust
    /// # use marten_sat::solver::Solver;
    /// let mut solver = Solver::new();
    /// let x = solver.fresh_variable().unwrap();
    /// let y = solver.fresh_variable().unwrap();
    /// solver.add_clause([x]).unwrap();
    /// solver.add_clause([y]).unwrap();
    ///
    /// assert_eq!(solver.models().count(), 1);
    /// assert!(solver.solve().is_none());
    /// ```
    pub fn models(&mut self) -> Models<'_, E> {
        Models {
            solver: self,
            previous: None,
        }
    }
}

/// See [models](Solver::models).
pub struct Models<'s, E: Engine> {
    solver: &'s mut Solver<E>,
    previous: Option<Model>,
}

impl<E: Engine> Iterator for Models<'_, E> {
    type Item = Model;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(previous) = self.previous.take() {
            // The blocking literals are the solver's own, so the builder cannot reject them.
            let _ = self.solver.add_clause(previous.blocking_clause());
        }

        let model = self.solver.solve()?;
        self.previous = Some(model.clone());
        Some(model)
    }
}
