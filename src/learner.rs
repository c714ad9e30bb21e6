//! Conflict-clause learning (§4.4). Triggered only by the driver, only
//! when `assign` reported a conflict whose reason is short enough to learn
//! and the global learned-clause cap has not been reached.

use crate::assignment::AssignmentState;
use crate::clause::Clause;
use crate::config::SolverConfig;
use crate::literal::Literal;
use crate::store::ClauseStore;

/// Owns the learned-clause count and the caps computed at initialization:
/// a maximum clause length and a global count ceiling of
/// `floor(initial_clause_count * learned_clause_limit_percentage / 100)`.
pub struct ConflictLearner {
    max_learned_clause_len: usize,
    learned_clause_cap: usize,
    learned_count: usize,
}

impl ConflictLearner {
    pub fn new(initial_clause_count: usize, config: &SolverConfig) -> Self {
        ConflictLearner {
            max_learned_clause_len: config.max_learned_clause_len(),
            learned_clause_cap: initial_clause_count * config.learned_clause_limit_percentage as usize / 100,
            learned_count: 0,
        }
    }

    pub fn learned_count(&self) -> usize {
        self.learned_count
    }

    pub fn cap_reached(&self) -> bool {
        self.learned_count >= self.learned_clause_cap
    }

    /// Learns `reason` if it is non-empty, short enough, and under the
    /// global cap. On success, appends the raw reason as the new original
    /// clause and a filtered copy (literals whose variable is unassigned,
    /// or whose current value still matches the literal's polarity) as the
    /// new working clause, registers occurrence lists, and marks the new
    /// index unsatisfied. Returns the raw learned-clause literals on
    /// success, for the caller to use in VSIDS activity bumping.
    pub fn try_learn(
        &mut self,
        store: &mut ClauseStore,
        state: &mut AssignmentState,
        reason: &[Literal],
    ) -> Option<Vec<Literal>> {
        if reason.is_empty() {
            return None;
        }
        if reason.len() >= self.max_learned_clause_len {
            return None;
        }
        if self.cap_reached() {
            return None;
        }

        let original = Clause::new(reason.iter().copied());
        let working_literals: Vec<Literal> = original
            .literals()
            .iter()
            .copied()
            .filter(|&lit| state.is_unassigned(lit.variable()) || state.is_true(lit))
            .collect();

        let learned_literals = original.literals().to_vec();
        let index = store.push_with_working(original, working_literals);
        state.grow_for_new_clause(index);
        self.learned_count += 1;

        Some(learned_literals)
    }
}
