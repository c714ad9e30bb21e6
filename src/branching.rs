//! Branching heuristics (§4.3): three interchangeable strategies behind one
//! entry point, `pick_branch`, selected by [`Variant`]. It returns `None`
//! when nothing remains to branch on, the Rust idiom for the reference
//! implementation's sentinel `0`.

use crate::assignment::AssignmentState;
use crate::config::{SolverConfig, Variant};
use crate::literal::Literal;
use crate::store::ClauseStore;

pub fn pick_branch(store: &ClauseStore, state: &AssignmentState, config: &SolverConfig) -> Option<Literal> {
    match config.variant {
        Variant::D1 => trivial(state),
        Variant::D2 => first_literal_of_first_unsatisfied(store, state),
        Variant::D3 => vsids(store, state),
    }
}

/// D1: first unassigned variable in numerical order, tried positive first.
fn trivial(state: &AssignmentState) -> Option<Literal> {
    (1..=state.num_variables())
        .find(|&var| state.is_unassigned(var))
        .map(|var| Literal::from_variable(var, true))
}

/// D2: first literal of the first clause still in the unsatisfied set.
fn first_literal_of_first_unsatisfied(store: &ClauseStore, state: &AssignmentState) -> Option<Literal> {
    state
        .unsatisfied_indices()
        .next()
        .and_then(|idx| store.working(idx).first().copied())
}

/// D3: VSIDS-decayed activity. Weight is `1 + activity` for every literal
/// of an unassigned variable appearing in a live clause; the maximum-weight
/// literal wins, ties broken by iteration order (ascending clause index,
/// then a clause's working-literal order) for reproducibility.
fn vsids(store: &ClauseStore, state: &AssignmentState) -> Option<Literal> {
    let mut best: Option<(Literal, f64)> = None;

    for idx in state.unsatisfied_indices() {
        for &lit in store.working(idx) {
            if !state.is_unassigned(lit.variable()) {
                continue;
            }

            let record = state.record(lit.variable());
            let activity = if lit.is_positive() { record.pos_activity } else { record.neg_activity };
            let weight = 1.0 + activity;

            let is_better = match best {
                None => true,
                Some((_, best_weight)) => weight > best_weight,
            };
            if is_better {
                best = Some((lit, weight));
            }
        }
    }

    best.map(|(lit, _)| lit)
}
