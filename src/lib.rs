//! A DPLL SAT solver core over DIMACS CNF input, with three variants
//! sharing one engine (see [`config::Variant`]): plain DPLL with unit
//! propagation and arbitrary branching (D1); D1 plus pure-literal
//! elimination and conflict-clause learning (D2); D2 plus VSIDS-decayed
//! activity branching (D3).
//!
//! The hard engineering lives in [`propagator`], [`pure_literal`],
//! [`branching`], [`learner`], and [`solver`] — the interplay of
//! assignment state, clause-indexed propagation, and backtracking that a
//! DPLL search is built from. [`dimacs`] and [`cli`] are external
//! collaborators: the core itself never parses text, touches a
//! filesystem, or fails — it only ever returns SAT or UNSAT.

pub mod assignment;
pub mod branching;
pub mod cli;
pub mod clause;
pub mod config;
pub mod dimacs;
pub mod error;
pub mod learner;
pub mod literal;
pub mod propagator;
pub mod pure_literal;
pub mod solver;
pub mod store;
pub mod telemetry;
