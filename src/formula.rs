/*!
Propositional formulas over literals, and their conversion to conjunctive normal form.

A [Formula] is a tree of conjunctions and disjunctions with literals at the leaves.
Negation is resolved structurally: De Morgan's laws push it down to the leaves, where it becomes literal negation, so no negation node exists.

[cnf](Formula::cnf) converts by distributing disjunctions over conjunctions.
The conversion is exact and introduces no fresh variables, at the cost of a possible blow-up in clause count --- suited to the small side formulas this layer is for.

Formulas are built from handles, so a formula inherits the provenance of its literals and [add_formula](crate::solver::Solver::add_formula) enforces the usual cross-solver checks.

```rust
# use marten_sat::solver::Solver;
# use marten_sat::formula::Formula;
# use marten_sat::structures::truth::Truth;
let mut solver = Solver::new();
let x = solver.fresh_variable().unwrap();
let y = solver.fresh_variable().unwrap();

// (x ∨ y) ∧ (¬x ∨ ¬y), via the operator sugar.
let exclusive = (x | y) & (-x | -y);
solver.add_formula(&exclusive).unwrap();

let model = solver.solve().expect("a satisfiable formula");
assert!(model.value_of(x).unwrap() != model.value_of(y).unwrap());
```
*/

use crate::structures::{literal::Literal, variable::Variable};

/// A propositional formula over literals.
#[derive(Clone, Debug)]
pub enum Formula {
    /// A literal.
    Literal(Literal),

    /// The conjunction of two formulas.
    And(Box<Formula>, Box<Formula>),

    /// The disjunction of two formulas.
    Or(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// The conjunction of this formula and another.
    pub fn and(self, other: impl Into<Formula>) -> Self {
        Self::And(Box::new(self), Box::new(other.into()))
    }

    /// The disjunction of this formula and another.
    pub fn or(self, other: impl Into<Formula>) -> Self {
        Self::Or(Box::new(self), Box::new(other.into()))
    }

    /// Material implication: `¬self ∨ other`.
    pub fn implies(self, other: impl Into<Formula>) -> Self {
        self.negated().or(other)
    }

    /// The negation of the formula, pushed to the literals by De Morgan's laws.
    pub fn negated(&self) -> Self {
        match self {
            Self::Literal(literal) => Self::Literal(literal.negate()),

            Self::And(lhs, rhs) => {
                Self::Or(Box::new(lhs.negated()), Box::new(rhs.negated()))
            }

            Self::Or(lhs, rhs) => {
                Self::And(Box::new(lhs.negated()), Box::new(rhs.negated()))
            }
        }
    }

    /// The conjunctive normal form of the formula, as a sequence of clauses.
    pub fn cnf(&self) -> Vec<Vec<Literal>> {
        match self {
            Self::Literal(literal) => vec![vec![*literal]],

            Self::And(lhs, rhs) => {
                let mut clauses = lhs.cnf();
                clauses.append(&mut rhs.cnf());
                clauses
            }

            Self::Or(lhs, rhs) => {
                let left = lhs.cnf();
                let right = rhs.cnf();
                left.iter()
                    .flat_map(|l| {
                        right
                            .iter()
                            .map(|r| l.iter().copied().chain(r.iter().copied()).collect())
                    })
                    .collect()
            }
        }
    }
}

impl From<Literal> for Formula {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Variable> for Formula {
    fn from(variable: Variable) -> Self {
        Self::Literal(variable.literal())
    }
}

impl<T: Into<Formula>> std::ops::BitAnd<T> for Formula {
    type Output = Formula;

    fn bitand(self, rhs: T) -> Self::Output {
        self.and(rhs)
    }
}

impl<T: Into<Formula>> std::ops::BitOr<T> for Formula {
    type Output = Formula;

    fn bitor(self, rhs: T) -> Self::Output {
        self.or(rhs)
    }
}

impl<T: Into<Formula>> std::ops::BitAnd<T> for Variable {
    type Output = Formula;

    fn bitand(self, rhs: T) -> Self::Output {
        Formula::from(self).and(rhs)
    }
}

impl<T: Into<Formula>> std::ops::BitOr<T> for Variable {
    type Output = Formula;

    fn bitor(self, rhs: T) -> Self::Output {
        Formula::from(self).or(rhs)
    }
}

impl<T: Into<Formula>> std::ops::BitAnd<T> for Literal {
    type Output = Formula;

    fn bitand(self, rhs: T) -> Self::Output {
        Formula::from(self).and(rhs)
    }
}

impl<T: Into<Formula>> std::ops::BitOr<T> for Literal {
    type Output = Formula;

    fn bitor(self, rhs: T) -> Self::Output {
        Formula::from(self).or(rhs)
    }
}

/// Negation, mirroring the unary negation of variables and literals.
impl std::ops::Neg for Formula {
    type Output = Formula;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::And(lhs, rhs) => write!(f, "({lhs} ∧ {rhs})"),
            Self::Or(lhs, rhs) => write!(f, "({lhs} ∨ {rhs})"),
        }
    }
}
