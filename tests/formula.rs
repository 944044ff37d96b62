use marten_sat::{formula::Formula, solver::Solver, structures::truth::Truth};

#[test]
fn implication_has_the_expected_clause() {
    let mut solver = Solver::new();

    let x = solver.fresh_variable().unwrap();
    let y = solver.fresh_variable().unwrap();

    let implication = Formula::from(x).implies(y);
    assert_eq!(implication.cnf(), vec![vec![-x, y.literal()]]);
}

#[test]
fn disjunction_distributes_over_conjunction() {
    let mut solver = Solver::new();

    let a = solver.fresh_variable().unwrap();
    let b = solver.fresh_variable().unwrap();
    let c = solver.fresh_variable().unwrap();

    let formula = (a & b) | c;
    assert_eq!(
        formula.cnf(),
        vec![
            vec![a.literal(), c.literal()],
            vec![b.literal(), c.literal()],
        ]
    );
}

#[test]
fn negation_follows_de_morgan() {
    let mut solver = Solver::new();

    let x = solver.fresh_variable().unwrap();
    let y = solver.fresh_variable().unwrap();

    let conjunction = x & y;
    assert_eq!(conjunction.negated().cnf(), vec![vec![-x, -y]]);

    let disjunction = x | y;
    assert_eq!(disjunction.negated().cnf(), vec![vec![-x], vec![-y]]);
}

#[test]
fn a_forcing_chain_solves_through_add_formula() {
    let mut solver = Solver::new();

    let x = solver.fresh_variable().unwrap();
    let y = solver.fresh_variable().unwrap();
    let z = solver.fresh_variable().unwrap();

    let chain = Formula::from(x)
        .and(Formula::from(x).implies(y))
        .and(Formula::from(y).implies(z));
    solver.add_formula(&chain).unwrap();

    let model = solver.solve().expect("the chain is satisfiable");
    assert_eq!(
        model.values_at([x, y, z]),
        Ok(vec![Truth::True, Truth::True, Truth::True])
    );
}

#[test]
fn a_formula_with_foreign_handles_is_rejected() {
    let mut ours = Solver::new();
    let mut theirs = Solver::new();

    let local = ours.fresh_variable().unwrap();
    let foreign = theirs.fresh_variable().unwrap();

    let mixed = local & foreign;
    assert!(ours.add_formula(&mixed).is_err());
}
