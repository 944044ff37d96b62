/*!
Model snapshots.

A [Model] is taken at the moment solving succeeds: a fixed-length copy of the engine's per-variable assignment, tagged with the solver which produced it.
The copy is owned outright, so a model never changes --- not even if the originating solver later allocates more variables or clauses.

Beyond value lookup, a model produces a [blocking clause](Model::blocking_clause): the clause false under exactly this assignment, which added back to the solver forbids the engine from returning the identical assignment again.

```rust
# use marten_sat::solver::Solver;
# use marten_sat::structures::truth::Truth;
let mut solver = Solver::new();
let x = solver.fresh_variable().unwrap();
solver.add_clause([x]).unwrap();

let model = solver.solve().expect("a satisfiable formula");
assert_eq!(model.value_of(x), Ok(Truth::True));
assert_eq!(model.value_of(-x), Ok(Truth::False));

solver.add_clause(model.blocking_clause()).unwrap();
assert!(solver.solve().is_none());
```
*/

use crate::{
    codec,
    structures::{element::Element, literal::Literal, truth::Truth, SolverId},
    types::err::ErrorKind,
};

/// An immutable snapshot of a satisfying assignment, scoped to the solver which produced it.
#[derive(Clone, Debug)]
pub struct Model {
    values: Box<[Truth]>,
    solver: SolverId,
}

impl Model {
    pub(crate) fn new(values: Vec<Truth>, solver: SolverId) -> Self {
        Self {
            values: values.into_boxed_slice(),
            solver,
        }
    }

    /// The fixed length of the snapshot: the number of variables which existed at solve time.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Whether the snapshot covers no variables.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value of a variable or literal under this model.
    ///
    /// For a variable, the stored ternary value at its index.
    /// For a literal, the stored value with the literal's polarity applied ([Unknown](Truth::Unknown) absorbing).
    ///
    /// A handle from a different solver is rejected with [ErrorKind::CrossSolverUsage].
    /// A variable allocated after the snapshot was taken reads as [Unknown](Truth::Unknown).
    pub fn value_of(&self, element: impl Into<Element>) -> Result<Truth, ErrorKind> {
        let element = element.into();

        if element.solver() != self.solver {
            return Err(ErrorKind::CrossSolverUsage {
                kind: element.kind(),
            });
        }

        let stored = self
            .values
            .get(codec::index_of(element.code()) as usize)
            .copied()
            .unwrap_or(Truth::Unknown);

        Ok(stored.polarised(codec::is_negated(element.code())))
    }

    /// The values of a sequence of variables and literals, in order.
    ///
    /// Fails on the first handle from a different solver, looking nothing up beyond it.
    pub fn values_at<C, T>(&self, elements: C) -> Result<Vec<Truth>, ErrorKind>
    where
        C: IntoIterator<Item = T>,
        T: Into<Element>,
    {
        elements
            .into_iter()
            .map(|element| self.value_of(element))
            .collect()
    }

    /// The clause which denies this model.
    ///
    /// For each index the emitted literal is the one false under the model: the negated literal where the stored value is [True](Truth::True), and the positive literal otherwise ([Unknown](Truth::Unknown) is treated as false).
    /// Adding the clause back to the originating solver enables enumeration of all distinct models.
    pub fn blocking_clause(&self) -> Vec<Literal> {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let mut code = codec::encode(index as u32, false);
                if value.is_true() {
                    code = codec::negate(code);
                }
                Literal::new(code, self.solver)
            })
            .collect()
    }
}
