use fixedbitset::FixedBitSet;

use crate::literal::{Literal, Variable};

/// The truth value of a variable under the current (partial) assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarValue {
    Unassigned,
    True,
    False,
}

/// Per-variable bookkeeping: current value and, for the VSIDS heuristic, a
/// decayed activity counter per polarity.
#[derive(Debug, Clone, Copy)]
pub struct VarRecord {
    pub value: VarValue,
    pub pos_activity: f64,
    pub neg_activity: f64,
}

impl Default for VarRecord {
    fn default() -> Self {
        VarRecord {
            value: VarValue::Unassigned,
            pos_activity: 0.0,
            neg_activity: 0.0,
        }
    }
}

/// Per-variable truth values, the assignment trail, and the set of clause
/// indices not yet known to be satisfied.
pub struct AssignmentState {
    variables: Vec<VarRecord>,
    trail: Vec<Literal>,
    unsatisfied: FixedBitSet,
}

impl AssignmentState {
    pub fn new(max_variable: Variable, clause_count: usize) -> Self {
        let mut unsatisfied = FixedBitSet::with_capacity(clause_count);
        unsatisfied.insert_range(0..clause_count);

        AssignmentState {
            variables: vec![VarRecord::default(); max_variable as usize + 1],
            trail: Vec::new(),
            unsatisfied,
        }
    }

    pub fn value_of(&self, var: Variable) -> VarValue {
        self.variables[var as usize].value
    }

    pub fn record(&self, var: Variable) -> &VarRecord {
        &self.variables[var as usize]
    }

    pub fn record_mut(&mut self, var: Variable) -> &mut VarRecord {
        &mut self.variables[var as usize]
    }

    pub fn all_records_mut(&mut self) -> impl Iterator<Item = &mut VarRecord> {
        self.variables.iter_mut()
    }

    /// Whether `literal` currently evaluates to true.
    pub fn is_true(&self, literal: Literal) -> bool {
        match self.value_of(literal.variable()) {
            VarValue::Unassigned => false,
            VarValue::True => literal.is_positive(),
            VarValue::False => !literal.is_positive(),
        }
    }

    /// Whether `literal` currently evaluates to false.
    pub fn is_false(&self, literal: Literal) -> bool {
        match self.value_of(literal.variable()) {
            VarValue::Unassigned => false,
            VarValue::True => !literal.is_positive(),
            VarValue::False => literal.is_positive(),
        }
    }

    pub fn is_unassigned(&self, var: Variable) -> bool {
        matches!(self.value_of(var), VarValue::Unassigned)
    }

    pub fn set_value(&mut self, var: Variable, value: VarValue) {
        self.variables[var as usize].value = value;
    }

    pub fn push_trail(&mut self, literal: Literal) {
        self.trail.push(literal);
    }

    pub fn pop_trail(&mut self) -> Option<Literal> {
        self.trail.pop()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    pub fn truncate_trail(&mut self, len: usize) {
        self.trail.truncate(len);
    }

    /// Grows the unsatisfied-set bitset to accommodate an additional learned
    /// clause index and marks it live; the arena is append-only so this
    /// bitset must grow in lock-step.
    pub fn grow_for_new_clause(&mut self, index: usize) {
        if index >= self.unsatisfied.len() {
            self.unsatisfied.grow(index + 1);
        }
        self.unsatisfied.insert(index);
    }

    pub fn mark_satisfied(&mut self, index: usize) {
        self.unsatisfied.set(index, false);
    }

    pub fn mark_unsatisfied(&mut self, index: usize) {
        self.unsatisfied.set(index, true);
    }

    pub fn is_unsatisfied(&self, index: usize) -> bool {
        self.unsatisfied.contains(index)
    }

    pub fn unsatisfied_is_empty(&self) -> bool {
        self.unsatisfied.count_ones(..) == 0
    }

    /// Ascending clause-index order, deterministic across runs.
    pub fn unsatisfied_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.unsatisfied.ones()
    }

    pub fn num_variables(&self) -> Variable {
        self.variables.len() as Variable - 1
    }
}
