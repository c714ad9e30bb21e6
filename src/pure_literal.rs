//! Pure-literal detection (§4.2). A single pass over every live clause's
//! working form tallies which literals occur; a literal is pure when its
//! negation occurs in none of them and its variable is still unassigned.
//!
//! As noted in the governing design notes, purity is an approximation: a
//! literal pure at scan time may stop being pure later if learning or
//! propagation introduces the opposite polarity. That is accepted — the
//! assignment was safe when made, and any resulting inconsistency is
//! handled by the ordinary conflict/learning path.

use std::collections::BTreeSet;

use crate::assignment::AssignmentState;
use crate::literal::Literal;
use crate::store::ClauseStore;

/// Returns every literal pure under the current working state, in
/// ascending literal order — a `BTreeSet` rather than the reference
/// implementation's `unordered_set` so repeated scans of identical state
/// make identical assignments (§10.6's reproducibility requirement).
pub fn find_pure_literals(store: &ClauseStore, state: &AssignmentState) -> Vec<Literal> {
    let mut seen: BTreeSet<Literal> = BTreeSet::new();
    for idx in state.unsatisfied_indices() {
        for &lit in store.working(idx) {
            seen.insert(lit);
        }
    }

    seen.iter()
        .filter(|&&lit| state.is_unassigned(lit.variable()) && !seen.contains(&lit.negate()))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::Clause;

    fn lit(v: i32) -> Literal {
        Literal::new(v)
    }

    fn store_with(clauses: Vec<Vec<i32>>) -> (ClauseStore, AssignmentState) {
        let max_var = clauses.iter().flatten().map(|&v| v.unsigned_abs()).max().unwrap_or(0);
        let mut store = ClauseStore::new(max_var);
        for c in &clauses {
            store.push_clause(Clause::new(c.iter().map(|&v| lit(v))));
        }
        let state = AssignmentState::new(max_var, clauses.len());
        (store, state)
    }

    #[test]
    fn finds_single_polarity_literals() {
        let (store, state) = store_with(vec![vec![1, 2], vec![-1, 3]]);
        // 1 appears both positively and negatively: not pure.
        // 2 and 3 appear only positively: pure.
        let pure = find_pure_literals(&store, &state);
        assert_eq!(pure, vec![lit(2), lit(3)]);
    }

    #[test]
    fn no_pure_literals_when_every_variable_has_both_polarities() {
        let (store, state) = store_with(vec![vec![1, 2], vec![-1, -2]]);
        assert!(find_pure_literals(&store, &state).is_empty());
    }

    #[test]
    fn satisfied_clauses_do_not_contribute_candidates() {
        let (mut store, mut state) = store_with(vec![vec![1, 2], vec![2, 3]]);
        crate::propagator::assign(&mut store, &mut state, lit(1));
        // Clause 0 is now satisfied and leaves the unsatisfied set; only
        // clause 1 is scanned, so 2 and 3 are pure and 1 is never offered.
        let pure = find_pure_literals(&store, &state);
        assert_eq!(pure, vec![lit(2), lit(3)]);
    }
}
