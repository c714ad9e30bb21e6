//! The CLI collaborator (§6, §10.5): a thin, `clap`-derived front end
//! shared by the three variant binaries. Parses one positional `.cnf`
//! path, loads and solves it, and prints the §6 output contract. Holds no
//! solver logic of its own — that all lives in [`crate::solver`].

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use log::debug;

use crate::config::{SolverConfig, Variant};
use crate::dimacs;
use crate::solver::{SolveOutcome, Solver};
use crate::telemetry;

#[derive(Parser, Debug)]
#[command(about = "A DPLL SAT solver over DIMACS CNF input", version)]
struct Args {
    /// Path to a DIMACS CNF file. Must exist and end in `.cnf`.
    cnf_path: PathBuf,
}

/// Runs the shared CLI for `variant`: parses arguments, loads the CNF
/// file, solves it, and prints the result block. Any failure — malformed
/// input — is returned as an `Err` so `main` can report it on the
/// diagnostic stream and exit non-zero without partial output (§7).
///
/// Argument parsing uses `Args::parse()` rather than `try_parse`, so
/// `--help`/`--version` are handled by clap itself (printed to stdout, exit
/// code 0) instead of being funneled through this function's error path;
/// malformed arguments still terminate the process via clap's own exit
/// code 2, independent of this crate's §7 exit-code-1 contract for
/// malformed *input*.
pub fn run(variant: Variant) -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let formula = dimacs::load_file(&args.cnf_path)?;
    let max_variable = formula.max_variable();
    let clauses = formula.clauses();

    debug!("loaded {} clauses over {} variables", clauses.len(), max_variable);

    let config = SolverConfig::for_variant(variant);
    let solver = Solver::new(clauses, max_variable, config);

    let start = Instant::now();
    let outcome = solver.solve();
    let elapsed = start.elapsed();
    let memory_kb = telemetry::memory_used_kb();

    println!("[{}]", variant.tag());
    match outcome {
        SolveOutcome::Sat(model) => {
            println!("RESULT: SAT");
            print!("ASSIGNMENT: ");
            for (var, value) in model.iter() {
                print!("{}={} ", var, value as u8);
            }
            println!();
        }
        SolveOutcome::Unsat => {
            println!("RESULT: UNSAT");
        }
    }

    println!("Time taken: {:.7} seconds", elapsed.as_secs_f64());
    match memory_kb {
        Some(kb) => println!("Memory used: {} KB", kb),
        None => println!("Memory used: unknown"),
    }

    Ok(())
}
