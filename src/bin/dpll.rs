//! `D1`: pure DPLL with unit propagation and arbitrary branching.

use dpll_sat::config::Variant;

fn main() {
    if let Err(err) = dpll_sat::cli::run(Variant::D1) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
