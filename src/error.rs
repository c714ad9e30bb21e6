use std::path::PathBuf;

/// Errors surfaced by the collaborators around the core (§7): the DIMACS
/// loader and the CLI. The core itself never returns an error — it returns
/// SAT or UNSAT — so this type only appears outside `Solver`.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Error: Input file must be a valid .cnf file and must exist.")]
    InvalidInputPath { path: PathBuf },

    #[error("Error: No valid clauses found in CNF file.")]
    EmptyFormula,

    #[error("Error: clause contains no literals after parsing.")]
    EmptyClause { line: usize },

    #[error("Error: could not parse literal on line {line}: {source}")]
    MalformedLiteral {
        line: usize,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
