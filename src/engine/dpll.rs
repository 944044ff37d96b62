//! A reference engine: plain DPLL search with unit propagation.
//!
//! The engine is deliberately small.
//! It keeps clauses exactly as registered, propagates units, and branches with a backtracking search --- no watched literals, no clause learning, no restarts.
//! Decisions are made only on variables occurring in a not-yet-satisfied clause, so a variable no clause constrains stays [Unknown](Truth::Unknown) in the reported assignment.
//!
//! Decision polarity is drawn from a seeded rng with a configurable lean, so a solve is reproducible under a fixed [Config].

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    codec::{self, Code, INDEX_MAX},
    config::Config,
    misc::log::targets,
    structures::truth::Truth,
};

use super::Engine;

/// The result of exhaustive unit propagation over an assignment.
enum Propagation {
    /// No conflict, and no further unit clauses.
    Stable,

    /// Some clause has every literal false.
    Conflict,
}

/// A DPLL engine over packed literal codes.
pub struct Dpll {
    /// Registered clauses, as given.
    clauses: Vec<Box<[Code]>>,

    /// The number of allocated variables.
    variable_count: u32,

    /// The assignment found by the most recent successful solve.
    assignment: Vec<Truth>,

    /// Set once simplification detects a top-level conflict.
    root_conflict: bool,

    /// The source of decision polarities.
    rng: StdRng,

    /// The probability a decision tries true first.
    polarity_lean: f64,
}

impl Dpll {
    /// An empty engine with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            clauses: Vec::new(),
            variable_count: 0,
            assignment: Vec::new(),
            root_conflict: false,
            rng: StdRng::seed_from_u64(config.seed),
            // The rng rejects probabilities outside [0, 1].
            polarity_lean: if config.polarity_lean.is_nan() {
                0.0
            } else {
                config.polarity_lean.clamp(0.0, 1.0)
            },
        }
    }

    /// The number of registered clauses.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The registered clauses, exactly as received.
    pub fn clauses(&self) -> impl Iterator<Item = &[Code]> {
        self.clauses.iter().map(|clause| clause.as_ref())
    }

    /// Propagates unit clauses until stable or a conflict.
    fn propagate(clauses: &[Box<[Code]>], assignment: &mut [Option<bool>]) -> Propagation {
        loop {
            let mut change = false;

            'clause_loop: for clause in clauses {
                let mut open_count = 0;
                let mut open_literal = None;

                for &literal in clause.iter() {
                    let (index, negated) = codec::decode(literal);
                    match assignment[index as usize] {
                        Some(value) => {
                            if value != negated {
                                // The literal is true, and so the clause satisfied.
                                continue 'clause_loop;
                            }
                        }
                        None => {
                            open_count += 1;
                            open_literal = Some(literal);
                        }
                    }
                }

                match (open_count, open_literal) {
                    (0, _) => return Propagation::Conflict,

                    (1, Some(literal)) => {
                        let (index, negated) = codec::decode(literal);
                        assignment[index as usize] = Some(!negated);
                        change = true;
                    }

                    _ => {}
                }
            }

            if !change {
                return Propagation::Stable;
            }
        }
    }

    /// An unassigned variable occurring in some not-yet-satisfied clause, if any.
    ///
    /// `None` entails every clause is satisfied, as after a stable propagation no clause is open with fewer than two unassigned literals.
    fn branch_variable(&self, assignment: &[Option<bool>]) -> Option<u32> {
        'clause_loop: for clause in &self.clauses {
            let mut open = None;

            for &literal in clause.iter() {
                let (index, negated) = codec::decode(literal);
                match assignment[index as usize] {
                    Some(value) => {
                        if value != negated {
                            continue 'clause_loop;
                        }
                    }
                    None => open = Some(index),
                }
            }

            if let Some(index) = open {
                return Some(index);
            }
        }
        None
    }

    /// Backtracking search from the given assignment.
    ///
    /// On success the assignment is extended to one satisfying every clause.
    fn search(&mut self, assignment: &mut [Option<bool>]) -> bool {
        if let Propagation::Conflict = Self::propagate(&self.clauses, assignment) {
            return false;
        }

        let Some(index) = self.branch_variable(assignment) else {
            return true;
        };

        let lean = self.rng.random_bool(self.polarity_lean);
        log::trace!(target: targets::ENGINE, "Decision {index} -> {lean}");

        for value in [lean, !lean] {
            let mut attempt = assignment.to_vec();
            attempt[index as usize] = Some(value);

            if self.search(&mut attempt) {
                assignment.copy_from_slice(&attempt);
                return true;
            }
        }

        false
    }
}

impl Default for Dpll {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Engine for Dpll {
    fn new_variable(&mut self) -> Option<u32> {
        if self.variable_count > INDEX_MAX {
            return None;
        }
        let index = self.variable_count;
        self.variable_count += 1;
        Some(index)
    }

    fn variable_count(&self) -> u32 {
        self.variable_count
    }

    fn register_clause(&mut self, clause: Vec<Code>) {
        log::trace!(target: targets::ENGINE, "Registered clause of length {}", clause.len());
        self.clauses.push(clause.into_boxed_slice());
    }

    fn simplify(&mut self) -> bool {
        if self.root_conflict {
            return false;
        }

        let mut roots = vec![None; self.variable_count as usize];
        if let Propagation::Conflict = Self::propagate(&self.clauses, &mut roots) {
            log::debug!(target: targets::ENGINE, "Conflict at the root level");
            self.root_conflict = true;
            return false;
        }

        true
    }

    fn solve(&mut self, assumptions: &[Code]) -> bool {
        let mut assignment: Vec<Option<bool>> = vec![None; self.variable_count as usize];

        for &literal in assumptions {
            let (index, negated) = codec::decode(literal);
            match assignment[index as usize] {
                Some(value) if value == negated => return false,
                _ => assignment[index as usize] = Some(!negated),
            }
        }

        let satisfiable = self.search(&mut assignment);

        if satisfiable {
            self.assignment = assignment.into_iter().map(Truth::from).collect();
        }

        satisfiable
    }

    fn assignment_of(&self, index: u32) -> Truth {
        self.assignment
            .get(index as usize)
            .copied()
            .unwrap_or(Truth::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh(engine: &mut Dpll, count: u32) -> Vec<u32> {
        (0..count).map(|_| engine.new_variable().unwrap()).collect()
    }

    #[test]
    fn unit_propagation_solves_a_chain() {
        let mut engine = Dpll::default();
        let atoms = fresh(&mut engine, 3);

        engine.register_clause(vec![codec::encode(atoms[0], false)]);
        engine.register_clause(vec![
            codec::encode(atoms[0], true),
            codec::encode(atoms[1], false),
        ]);
        engine.register_clause(vec![
            codec::encode(atoms[1], true),
            codec::encode(atoms[2], false),
        ]);

        assert!(engine.simplify());
        assert!(engine.solve(&[]));
        for atom in atoms {
            assert_eq!(engine.assignment_of(atom), Truth::True);
        }
    }

    #[test]
    fn simplify_detects_a_root_conflict() {
        let mut engine = Dpll::default();
        let atoms = fresh(&mut engine, 1);

        engine.register_clause(vec![codec::encode(atoms[0], false)]);
        engine.register_clause(vec![codec::encode(atoms[0], true)]);

        assert!(!engine.simplify());
        // The result is permanent.
        assert!(!engine.simplify());
    }

    #[test]
    fn assumptions_restrict_the_search() {
        let mut engine = Dpll::default();
        let atoms = fresh(&mut engine, 2);

        engine.register_clause(vec![
            codec::encode(atoms[0], false),
            codec::encode(atoms[1], false),
        ]);

        assert!(engine.solve(&[codec::encode(atoms[0], true)]));
        assert_eq!(engine.assignment_of(atoms[0]), Truth::False);
        assert_eq!(engine.assignment_of(atoms[1]), Truth::True);

        assert!(!engine.solve(&[
            codec::encode(atoms[0], true),
            codec::encode(atoms[0], false),
        ]));
    }

    #[test]
    fn an_out_of_range_polarity_lean_is_clamped() {
        let config = Config {
            polarity_lean: 2.0,
            seed: 0,
        };
        let mut engine = Dpll::new(&config);
        let atoms = fresh(&mut engine, 2);

        engine.register_clause(vec![
            codec::encode(atoms[0], false),
            codec::encode(atoms[1], false),
        ]);

        assert!(engine.solve(&[]));
        // Clamped to one, the decision tries true first.
        assert_eq!(engine.assignment_of(atoms[1]), Truth::True);
    }

    #[test]
    fn unconstrained_variables_stay_unknown() {
        let mut engine = Dpll::default();
        let atoms = fresh(&mut engine, 2);

        engine.register_clause(vec![codec::encode(atoms[0], false)]);

        assert!(engine.solve(&[]));
        assert_eq!(engine.assignment_of(atoms[0]), Truth::True);
        assert_eq!(engine.assignment_of(atoms[1]), Truth::Unknown);
    }
}
