use marten_sat::{reports::Report, solver::Solver, structures::truth::Truth};

mod basic {
    use super::*;

    #[test]
    fn a_disjunction_is_satisfied() {
        let mut solver = Solver::new();

        let x = solver.fresh_variable().unwrap();
        let y = solver.fresh_variable().unwrap();

        solver.add_clause([x, y]).unwrap();

        let model = solver.solve().expect("x ∨ y is satisfiable");
        assert_eq!(solver.report(), Report::Satisfiable);

        let x_value = model.value_of(x).unwrap();
        let y_value = model.value_of(y).unwrap();
        assert!(x_value.is_true() || y_value.is_true());
    }

    #[test]
    fn a_contradiction_has_no_model() {
        let mut solver = Solver::new();

        let x = solver.fresh_variable().unwrap();

        solver.add_clause([x]).unwrap();
        solver.add_clause([-x]).unwrap();

        assert!(solver.solve().is_none());
        assert_eq!(solver.report(), Report::Unsatisfiable);
    }

    #[test]
    fn an_unconstrained_variable_is_consistent_across_lookups() {
        let mut solver = Solver::new();

        let x = solver.fresh_variable().unwrap();

        let model = solver.solve().expect("an empty formula is satisfiable");
        assert_eq!(model.size(), 1);

        // Whatever the value, the variable and its positive literal agree.
        assert_eq!(model.value_of(x), model.value_of(x.literal()));
    }

    #[test]
    fn a_blocking_clause_denies_the_only_model() {
        let mut solver = Solver::new();

        let x = solver.fresh_variable().unwrap();
        solver.add_clause([x]).unwrap();

        let first = solver.solve().expect("x is satisfiable");
        assert_eq!(first.value_of(x), Ok(Truth::True));

        solver.add_clause(first.blocking_clause()).unwrap();
        assert!(solver.solve().is_none());
    }

    #[test]
    fn clause_submission_chains() {
        let mut solver = Solver::new();

        let x = solver.fresh_variable().unwrap();
        let y = solver.fresh_variable().unwrap();

        solver.add_clause([x]).unwrap().add_clause([y]).unwrap();
        let model = solver.solve().expect("two units are satisfiable");
        assert_eq!(model.values_at([x, y]), Ok(vec![Truth::True, Truth::True]));
    }

    #[test]
    fn solving_again_after_further_input_reruns_the_procedure() {
        let mut solver = Solver::new();

        let x = solver.fresh_variable().unwrap();
        solver.add_clause([x]).unwrap();

        let first = solver.solve().expect("x is satisfiable");
        assert_eq!(first.value_of(x), Ok(Truth::True));

        let y = solver.fresh_variable().unwrap();
        solver.add_clause([-y]).unwrap();

        let second = solver.solve().expect("x ∧ ¬y is satisfiable");
        assert_eq!(second.size(), 2);
        assert_eq!(second.value_of(y), Ok(Truth::False));
    }
}

mod passthrough {
    use super::*;

    #[test]
    fn duplicates_and_tautologies_reach_the_engine_unmodified() {
        let mut solver = Solver::new();

        let x = solver.fresh_variable().unwrap();

        solver.add_clause([x.literal(), x.literal(), -x]).unwrap();

        assert_eq!(solver.engine().clause_count(), 1);
        let clauses: Vec<_> = solver.engine().clauses().collect();
        assert_eq!(clauses[0].len(), 3);

        // A tautological clause is trivially satisfiable.
        assert!(solver.solve().is_some());
    }
}
