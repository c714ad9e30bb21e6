//! End-to-end coverage of the §8 boundary cases and concrete scenarios,
//! driven through the DIMACS loader and every variant, not just the
//! in-module unit tests next to `Solver` itself.

use dpll_sat::clause::Clause;
use dpll_sat::config::{SolverConfig, Variant};
use dpll_sat::dimacs;
use dpll_sat::literal::Literal;
use dpll_sat::solver::{SolveOutcome, Solver};

const VARIANTS: [Variant; 3] = [Variant::D1, Variant::D2, Variant::D3];

fn solve_dimacs(body: &str, variant: Variant) -> SolveOutcome {
    let formula = dimacs::parse(body).expect("well-formed CNF body");
    let max_variable = formula.max_variable();
    let clauses = formula.clauses();
    Solver::new(clauses, max_variable, SolverConfig::for_variant(variant)).solve()
}

fn assert_sat(body: &str) {
    for variant in VARIANTS {
        assert!(
            matches!(solve_dimacs(body, variant), SolveOutcome::Sat(_)),
            "expected SAT for {:?} on:\n{}",
            variant,
            body
        );
    }
}

fn assert_unsat(body: &str) {
    for variant in VARIANTS {
        assert!(
            matches!(solve_dimacs(body, variant), SolveOutcome::Unsat),
            "expected UNSAT for {:?} on:\n{}",
            variant,
            body
        );
    }
}

#[test]
fn boundary_single_positive_unit_is_sat_with_var_true() {
    for variant in VARIANTS {
        match solve_dimacs("p cnf 1 1\n1 0\n", variant) {
            SolveOutcome::Sat(model) => assert!(model.value(1)),
            SolveOutcome::Unsat => panic!("expected SAT"),
        }
    }
}

#[test]
fn boundary_contradictory_units_are_unsat() {
    assert_unsat("p cnf 1 2\n1 0\n-1 0\n");
}

#[test]
fn boundary_empty_clause_is_unsat_without_branching() {
    let clauses = vec![Clause::new(Vec::<Literal>::new())];
    for variant in VARIANTS {
        let solver = Solver::new(clauses.clone(), 1, SolverConfig::for_variant(variant));
        assert!(matches!(solver.solve(), SolveOutcome::Unsat));
    }
}

#[test]
fn boundary_tautological_clause_is_sat() {
    assert_sat("p cnf 1 1\n1 -1 0\n");
}

#[test]
fn scenario_one_forces_contradiction_via_unit_propagation() {
    assert_unsat("p cnf 2 3\n1 2 0\n-1 2 0\n-2 0\n");
}

#[test]
fn scenario_two_is_sat_via_branching() {
    for variant in VARIANTS {
        match solve_dimacs("p cnf 2 3\n1 2 0\n-1 -2 0\n1 -2 0\n", variant) {
            SolveOutcome::Sat(model) => {
                assert!(model.value(1));
                assert!(!model.value(2));
            }
            SolveOutcome::Unsat => panic!("expected SAT for {:?}", variant),
        }
    }
}

#[test]
fn scenario_three_chains_unit_propagation_to_a_full_model() {
    for variant in VARIANTS {
        match solve_dimacs("p cnf 3 3\n1 0\n-1 2 0\n-2 3 0\n", variant) {
            SolveOutcome::Sat(model) => {
                assert!(model.value(1));
                assert!(model.value(2));
                assert!(model.value(3));
            }
            SolveOutcome::Unsat => panic!("expected SAT for {:?}", variant),
        }
    }
}

#[test]
fn scenario_four_pigeonhole_three_into_two_is_unsat() {
    // p_i_j true iff pigeon i occupies hole j, i in 0..3, j in 0..2.
    let var = |i: i32, j: i32| i * 2 + j + 1;
    let mut body = String::from("p cnf 6 9\n");
    for i in 0..3 {
        body.push_str(&format!("{} {} 0\n", var(i, 0), var(i, 1)));
    }
    for j in 0..2 {
        for i1 in 0..3 {
            for i2 in (i1 + 1)..3 {
                body.push_str(&format!("{} {} 0\n", -var(i1, j), -var(i2, j)));
            }
        }
    }
    assert_unsat(&body);
}

#[test]
fn scenario_five_single_wide_clause_is_sat_and_reproducible() {
    let body = "p cnf 3 1\n1 -2 3 0\n";
    for variant in VARIANTS {
        let first = solve_dimacs(body, variant);
        let second = solve_dimacs(body, variant);
        let to_tuple = |outcome: SolveOutcome| match outcome {
            SolveOutcome::Sat(model) => Some((model.value(1), model.value(2), model.value(3))),
            SolveOutcome::Unsat => None,
        };
        let (a, b) = (to_tuple(first), to_tuple(second));
        assert!(a.is_some(), "expected SAT for {:?}", variant);
        assert_eq!(a, b, "repeated solves of the same binary must agree");
    }
}

#[test]
fn scenario_six_forces_unit_after_branching_then_contradicts() {
    assert_unsat("p cnf 3 4\n1 2 0\n1 -2 0\n-1 3 0\n-1 -3 0\n");
}

#[test]
fn rejects_formulas_with_no_clauses() {
    let err = dimacs::parse("c only a comment\n").unwrap_err();
    assert!(matches!(err, dpll_sat::error::SolverError::EmptyFormula));
}

#[test]
fn rejects_clauses_that_parse_to_nothing_but_the_terminator() {
    // A line starting with `0` is skipped outright (§6), so the only way a
    // non-skipped line yields zero literals is a leading `-0` token, which
    // parses to the value 0 and is treated as the terminator.
    let err = dimacs::parse("1 2 0\n-0\n").unwrap_err();
    assert!(matches!(
        err,
        dpll_sat::error::SolverError::EmptyClause { line: 2 }
    ));
}
