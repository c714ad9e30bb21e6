use crate::clause::Clause;
use crate::literal::{Literal, Variable};

/// Indexed arena of clauses and per-variable occurrence lists.
///
/// `original` and `working` share an index space: index `i` always refers to
/// the same clause in both. `original` is append-only (grows at load time and
/// at learn time); `working` shrinks and regrows as literals are falsified and
/// un-falsified during search, but never changes length.
pub struct ClauseStore {
    original: Vec<Clause>,
    working: Vec<Vec<Literal>>,
    occurs_pos: Vec<Vec<usize>>,
    occurs_neg: Vec<Vec<usize>>,
}

impl ClauseStore {
    /// Creates an empty store sized to hold variables `1..=max_variable`.
    pub fn new(max_variable: Variable) -> Self {
        let slots = max_variable as usize + 1;
        ClauseStore {
            original: Vec::new(),
            working: Vec::new(),
            occurs_pos: vec![Vec::new(); slots],
            occurs_neg: vec![Vec::new(); slots],
        }
    }

    /// Appends a clause to both arenas, registers it in every occurrence
    /// list its literals touch, and returns its stable index.
    pub fn push_clause(&mut self, clause: Clause) -> usize {
        let working_literals = clause.literals().to_vec();
        self.push_with_working(clause, working_literals)
    }

    /// Appends a clause whose *original* body is `clause` but whose initial
    /// *working* form is `working_literals` — used by the conflict learner
    /// (§4.4), which files a filtered working form alongside the raw reason
    /// as the permanent original. Occurrence lists are registered from the
    /// original (raw) literals, since those are what backtracking needs to
    /// reconstruct the working form later.
    pub fn push_with_working(&mut self, clause: Clause, working_literals: Vec<Literal>) -> usize {
        let index = self.original.len();

        for &lit in clause.literals() {
            let var = lit.variable() as usize;
            debug_assert!(
                var < self.occurs_pos.len(),
                "clause references a variable beyond the store's capacity"
            );
            if lit.is_positive() {
                self.occurs_pos[var].push(index);
            } else {
                self.occurs_neg[var].push(index);
            }
        }

        self.original.push(clause);
        self.working.push(working_literals);
        index
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn original(&self, index: usize) -> &[Literal] {
        self.original[index].literals()
    }

    pub fn working(&self, index: usize) -> &[Literal] {
        &self.working[index]
    }

    pub fn working_len(&self, index: usize) -> usize {
        self.working[index].len()
    }

    /// Occurrence list of clauses whose *original* form contains `+var`.
    pub fn occurs_pos(&self, var: Variable) -> &[usize] {
        &self.occurs_pos[var as usize]
    }

    /// Occurrence list of clauses whose *original* form contains `-var`.
    pub fn occurs_neg(&self, var: Variable) -> &[usize] {
        &self.occurs_neg[var as usize]
    }

    /// The occurrence list matching `literal`'s own polarity.
    pub fn occurs_same(&self, literal: Literal) -> &[usize] {
        if literal.is_positive() {
            self.occurs_pos(literal.variable())
        } else {
            self.occurs_neg(literal.variable())
        }
    }

    /// The occurrence list matching the polarity opposite `literal`'s.
    pub fn occurs_opposite(&self, literal: Literal) -> &[usize] {
        if literal.is_positive() {
            self.occurs_neg(literal.variable())
        } else {
            self.occurs_pos(literal.variable())
        }
    }

    /// Removes `literal` from the working form of clause `index`, if present.
    /// Returns whether it was present.
    pub fn remove_working_literal(&mut self, index: usize, literal: Literal) -> bool {
        let slot = &mut self.working[index];
        if let Some(pos) = slot.iter().position(|&l| l == literal) {
            slot.remove(pos);
            true
        } else {
            false
        }
    }

    /// Reinserts `literal` into the working form of clause `index`, at the
    /// position its original-clause order implies — `working` is always kept
    /// as the subsequence of `original`'s literals that are still
    /// unassigned, in `original`'s order, so a full unassign/reassign cycle
    /// reproduces the exact pre-assign `Vec` rather than an
    /// insertion-order-dependent permutation of it.
    pub fn reinsert_working_literal(&mut self, index: usize, literal: Literal) {
        let original_literals = self.original[index].literals();
        let original_pos = original_literals
            .iter()
            .position(|&l| l == literal)
            .expect("reinserted literal must belong to this clause's original form");

        let slot = &mut self.working[index];
        debug_assert!(
            !slot.contains(&literal),
            "reinserting a literal that is already present corrupts the working form"
        );

        let insert_at = slot
            .iter()
            .position(|&existing| {
                let existing_pos = original_literals
                    .iter()
                    .position(|&l| l == existing)
                    .expect("working literal must belong to this clause's original form");
                existing_pos > original_pos
            })
            .unwrap_or(slot.len());

        slot.insert(insert_at, literal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(v: i32) -> Literal {
        Literal::new(v)
    }

    #[test]
    fn push_clause_registers_occurrences() {
        let mut store = ClauseStore::new(3);
        let idx = store.push_clause(Clause::new([lit(1), lit(-2), lit(3)]));

        assert_eq!(store.occurs_pos(1), &[idx]);
        assert_eq!(store.occurs_neg(2), &[idx]);
        assert_eq!(store.occurs_pos(3), &[idx]);
        assert_eq!(store.working(idx), store.original(idx));
    }

    #[test]
    fn remove_then_reinsert_restores_working_form() {
        let mut store = ClauseStore::new(2);
        let idx = store.push_clause(Clause::new([lit(1), lit(2)]));

        assert!(store.remove_working_literal(idx, lit(2)));
        assert_eq!(store.working(idx), &[lit(1)]);

        store.reinsert_working_literal(idx, lit(2));
        assert_eq!(store.working(idx), &[lit(1), lit(2)]);
    }

    #[test]
    fn reinsert_restores_original_position_not_insertion_order() {
        // Original order is [1, 2, 3]. Remove 1 then 2 (in that order), then
        // reinsert 2 then 1 — the reverse order — and the working form must
        // come back as [1, 2, 3], not [3, 2, 1].
        let mut store = ClauseStore::new(3);
        let idx = store.push_clause(Clause::new([lit(1), lit(2), lit(3)]));

        store.remove_working_literal(idx, lit(1));
        store.remove_working_literal(idx, lit(2));
        assert_eq!(store.working(idx), &[lit(3)]);

        store.reinsert_working_literal(idx, lit(2));
        assert_eq!(store.working(idx), &[lit(2), lit(3)]);

        store.reinsert_working_literal(idx, lit(1));
        assert_eq!(store.working(idx), &[lit(1), lit(2), lit(3)]);
    }

    #[test]
    fn occurrence_lists_are_append_only_across_learn_time_pushes() {
        let mut store = ClauseStore::new(2);
        let first = store.push_clause(Clause::new([lit(1)]));
        let second = store.push_clause(Clause::new([lit(1), lit(-2)]));

        assert_eq!(store.occurs_pos(1), &[first, second]);
    }
}
