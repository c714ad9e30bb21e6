//! The search driver (§4.5): the recursive `dpll` loop that ties the
//! propagator, pure-literal detector, branching heuristic, and conflict
//! learner together. This is the only module that owns a `Solver` value
//! end to end; everything it calls operates on the store and assignment
//! state it hands them.

use log::{debug, trace};

use crate::assignment::{AssignmentState, VarValue};
use crate::branching;
use crate::clause::Clause;
use crate::config::{SolverConfig, Variant};
use crate::learner::ConflictLearner;
use crate::literal::{Literal, Variable};
use crate::propagator::{self, AssignOutcome};
use crate::pure_literal;
use crate::store::ClauseStore;

/// A total assignment over `1..=num_variables`, with unassigned variables
/// reported as false/0 per §6's stable-output contract.
pub struct Model {
    values: Vec<bool>,
}

impl Model {
    fn from_state(state: &AssignmentState) -> Self {
        let n = state.num_variables();
        let mut values = vec![false; n as usize + 1];
        for var in 1..=n {
            values[var as usize] = matches!(state.value_of(var), VarValue::True);
        }
        Model { values }
    }

    pub fn value(&self, var: Variable) -> bool {
        self.values[var as usize]
    }

    /// Ascending `(variable, value)` pairs for variables `1..=N`.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.values
            .iter()
            .enumerate()
            .skip(1)
            .map(|(var, &value)| (var as Variable, value))
    }
}

pub enum SolveOutcome {
    Sat(Model),
    Unsat,
}

/// Single-threaded, synchronous backtracking search (§5) over one clause
/// store and assignment state for its whole lifetime.
pub struct Solver {
    store: ClauseStore,
    state: AssignmentState,
    config: SolverConfig,
    learner: ConflictLearner,
    decision_count: u32,
}

impl Solver {
    /// Builds a solver over `clauses`, whose highest literal magnitude is
    /// `max_variable`. Clauses are loaded in order; their indices become
    /// stable handles shared by the working and original arenas (§3).
    pub fn new(clauses: Vec<Clause>, max_variable: Variable, config: SolverConfig) -> Solver {
        let initial_clause_count = clauses.len();
        let mut store = ClauseStore::new(max_variable);
        for clause in clauses {
            store.push_clause(clause);
        }

        let state = AssignmentState::new(max_variable, initial_clause_count);
        let learner = ConflictLearner::new(initial_clause_count, &config);

        Solver {
            store,
            state,
            config,
            learner,
            decision_count: 0,
        }
    }

    /// Runs the search to completion and returns SAT with a witnessing
    /// model, or UNSAT.
    pub fn solve(mut self) -> SolveOutcome {
        if self.dpll() {
            SolveOutcome::Sat(Model::from_state(&self.state))
        } else {
            SolveOutcome::Unsat
        }
    }

    /// The recursive core (§4.5): propagate, eliminate pure literals
    /// (D2/D3), then branch.
    fn dpll(&mut self) -> bool {
        self.decision_count += 1;
        if self.config.variant.vsids() && self.decision_count % self.config.decay_interval == 0 {
            trace!("decision {}: periodic VSIDS decay", self.decision_count);
            self.decay_activities();
        }

        if !self.unit_propagate() {
            return false;
        }
        if self.state.unsatisfied_is_empty() {
            return true;
        }

        if self.config.variant.pure_literal_elimination() {
            if !self.pure_literal_loop() {
                return false;
            }
            if self.state.unsatisfied_is_empty() {
                return true;
            }
        }

        self.branch()
    }

    /// Repeatedly assigns the sole literal of every working-size-1 clause,
    /// recomputing the unit-clause list from scratch after each successful
    /// assignment (§4.5 step 2's stated design choice). A clause whose
    /// working form is already empty is treated as an immediate conflict.
    fn unit_propagate(&mut self) -> bool {
        loop {
            if self
                .state
                .unsatisfied_indices()
                .any(|idx| self.store.working_len(idx) == 0)
            {
                debug!("empty clause under current assignment: unsat without branching");
                return false;
            }

            let unit_idx = self
                .state
                .unsatisfied_indices()
                .filter(|&idx| self.store.working_len(idx) == 1)
                .last();

            let idx = match unit_idx {
                Some(idx) => idx,
                None => return true,
            };

            let literal = self.store.working(idx)[0];
            match propagator::assign(&mut self.store, &mut self.state, literal) {
                AssignOutcome::Success => {
                    self.state.push_trail(literal);
                    if self.state.unsatisfied_is_empty() {
                        return true;
                    }
                }
                AssignOutcome::Conflict(reason) => {
                    self.learn_if_eligible(&reason);
                    propagator::unassign(&mut self.store, &mut self.state, literal);
                    return false;
                }
            }
        }
    }

    /// D2/D3 only: assigns every pure literal found, repeating until a scan
    /// finds none. Failures here are never learned from (§4.4).
    fn pure_literal_loop(&mut self) -> bool {
        loop {
            let pure_literals = pure_literal::find_pure_literals(&self.store, &self.state);
            if pure_literals.is_empty() {
                return true;
            }

            for literal in pure_literals {
                match propagator::assign(&mut self.store, &mut self.state, literal) {
                    AssignOutcome::Success => self.state.push_trail(literal),
                    AssignOutcome::Conflict(_) => {
                        propagator::unassign(&mut self.store, &mut self.state, literal);
                        return false;
                    }
                }
            }

            if self.state.unsatisfied_is_empty() {
                return true;
            }
        }
    }

    /// Picks a decision literal and tries both polarities, undoing every
    /// effect of a failed branch before trying the next (§4.5 step 4).
    fn branch(&mut self) -> bool {
        let literal = match branching::pick_branch(&self.store, &self.state, &self.config) {
            Some(lit) => lit,
            None => return self.state.unsatisfied_is_empty(),
        };

        for val in [literal, literal.negate()] {
            let mark = self.state.trail_len();

            match propagator::assign(&mut self.store, &mut self.state, val) {
                AssignOutcome::Success => {
                    self.state.push_trail(val);
                    if self.dpll() {
                        return true;
                    }

                    while self.state.trail_len() > mark {
                        if let Some(popped) = self.state.pop_trail() {
                            propagator::unassign(&mut self.store, &mut self.state, popped);
                        }
                    }
                }
                AssignOutcome::Conflict(reason) => {
                    let learnable = self.learn_if_eligible(&reason);
                    propagator::unassign(&mut self.store, &mut self.state, val);

                    if learnable && self.config.decision_conflict_early_return {
                        debug!("decision-level conflict on first polarity, short-circuiting");
                        return false;
                    }
                }
            }
        }

        false
    }

    /// Learns from `reason` when the variant supports conflict learning and
    /// the reason is short enough, then bumps VSIDS activity on its
    /// literals (D3 only). Returns whether the reason was *eligible* for
    /// learning — used by the caller to decide on the decision-level
    /// early-return quirk (§9) regardless of whether the count cap
    /// happened to block the actual learn.
    fn learn_if_eligible(&mut self, reason: &[Literal]) -> bool {
        let eligible =
            self.config.variant.conflict_learning() && reason.len() < self.config.max_learned_clause_len();

        if self.config.variant.conflict_learning() {
            if let Some(learned) = self.learner.try_learn(&mut self.store, &mut self.state, reason) {
                trace!("learned clause #{} ({} literals)", self.learner.learned_count(), learned.len());
                if self.config.variant.vsids() {
                    self.bump_activity(&learned);
                }
            } else if self.learner.cap_reached() {
                trace!("learned-clause cap reached, dropping conflict silently");
            }
        }

        eligible
    }

    /// VSIDS conflict bump (§4.3): every literal of a freshly learned
    /// clause gets `conflict_weight` added to its polarity's activity,
    /// followed immediately by a decay pass — the documented double-decay
    /// quirk, preserved for reproducibility (§9).
    fn bump_activity(&mut self, literals: &[Literal]) {
        for &lit in literals {
            let record = self.state.record_mut(lit.variable());
            if lit.is_positive() {
                record.pos_activity += self.config.conflict_weight;
            } else {
                record.neg_activity += self.config.conflict_weight;
            }
        }
        self.decay_activities();
    }

    fn decay_activities(&mut self) {
        let factor = self.config.decay_factor;
        for record in self.state.all_records_mut() {
            record.pos_activity *= factor;
            record.neg_activity *= factor;
        }
    }
}
