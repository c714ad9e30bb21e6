//! The assign/unassign pair (§4.1): the only code that mutates a clause's
//! working form and the unsatisfied set during search. Everything else —
//! pure-literal detection, branching, learning, the driver — calls into
//! this module rather than touching the store or assignment state
//! directly.

use crate::assignment::{AssignmentState, VarValue};
use crate::literal::Literal;
use crate::store::ClauseStore;

/// Outcome of [`assign`]. A conflict carries the reason clause the learner
/// may consume; it can be empty when no informative reason was available,
/// matching the reference implementation's behavior of still reporting a
/// conflict with nothing worth learning.
pub enum AssignOutcome {
    Success,
    Conflict(Vec<Literal>),
}

impl AssignOutcome {
    pub fn is_conflict(&self) -> bool {
        matches!(self, AssignOutcome::Conflict(_))
    }
}

fn insert_unique(reason: &mut Vec<Literal>, lit: Literal) {
    if !reason.contains(&lit) {
        reason.push(lit);
    }
}

/// The value a variable must hold for `lit` to evaluate false.
fn falsifying_value(lit: Literal) -> VarValue {
    if lit.is_positive() {
        VarValue::False
    } else {
        VarValue::True
    }
}

/// Attempts to make `literal` true (§4.1).
///
/// If the literal's variable is already assigned, this succeeds iff the
/// existing value agrees with `literal`'s polarity, with no side effects —
/// callers may pass an already-assigned literal under that contract.
/// Otherwise the variable is assigned, clauses satisfied by `literal` are
/// dropped from the unsatisfied set, and `-literal` is struck from the
/// working form of clauses it still appears in. A conflict is detected and
/// reported via the heuristic "count == 1" rule described in the module's
/// governing design notes, rather than a proper implication-graph cut.
pub fn assign(store: &mut ClauseStore, state: &mut AssignmentState, literal: Literal) -> AssignOutcome {
    let var = literal.variable();

    match state.value_of(var) {
        VarValue::True => {
            return if literal.is_positive() {
                AssignOutcome::Success
            } else {
                AssignOutcome::Conflict(Vec::new())
            };
        }
        VarValue::False => {
            return if literal.is_positive() {
                AssignOutcome::Conflict(Vec::new())
            } else {
                AssignOutcome::Success
            };
        }
        VarValue::Unassigned => {}
    }

    state.set_value(var, if literal.is_positive() { VarValue::True } else { VarValue::False });

    let mut satisfied_side_matched = false;
    let mut reason: Vec<Literal> = Vec::new();

    for &idx in store.occurs_same(literal) {
        if !state.is_unsatisfied(idx) {
            continue;
        }

        let mut all_other_literals_false = true;
        for &original_lit in store.original(idx) {
            if original_lit == literal {
                continue;
            }
            match state.value_of(original_lit.variable()) {
                VarValue::Unassigned => {
                    all_other_literals_false = false;
                    break;
                }
                value if value != falsifying_value(original_lit) => {
                    all_other_literals_false = false;
                    break;
                }
                _ => {}
            }
        }

        if all_other_literals_false && !satisfied_side_matched {
            satisfied_side_matched = true;
            for &original_lit in store.original(idx) {
                if state.value_of(original_lit.variable()) == falsifying_value(original_lit) {
                    insert_unique(&mut reason, original_lit);
                }
            }
        }

        state.mark_satisfied(idx);
    }

    let negated = literal.negate();
    for &idx in store.occurs_opposite(literal) {
        if !state.is_unsatisfied(idx) {
            continue;
        }

        if store.working_len(idx) == 1 && satisfied_side_matched {
            for &original_lit in store.original(idx) {
                if original_lit != negated {
                    insert_unique(&mut reason, original_lit);
                }
            }
            state.set_value(var, VarValue::Unassigned);
            return AssignOutcome::Conflict(reason);
        }

        store.remove_working_literal(idx, negated);
    }

    AssignOutcome::Success
}

/// Reverses [`assign`] (§4.1). Must be called in exact reverse order of the
/// matching `assign` calls — the working-form deltas do not commute, and
/// `reinsert_working_literal` will panic if invoked out of order against a
/// slot that already holds the literal.
pub fn unassign(store: &mut ClauseStore, state: &mut AssignmentState, literal: Literal) {
    let var = literal.variable();
    state.set_value(var, VarValue::Unassigned);

    let negated = literal.negate();
    for &idx in store.occurs_opposite(literal) {
        store.reinsert_working_literal(idx, negated);
    }

    for &idx in store.occurs_same(literal) {
        if !clause_satisfied(store, state, idx) {
            state.mark_unsatisfied(idx);
        }
    }
}

fn clause_satisfied(store: &ClauseStore, state: &AssignmentState, idx: usize) -> bool {
    store.working(idx).iter().any(|&lit| state.is_true(lit))
}
