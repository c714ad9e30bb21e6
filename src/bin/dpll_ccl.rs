//! `D2`: DPLL with unit propagation, pure-literal elimination, and
//! conflict-clause learning.

use dpll_sat::config::Variant;

fn main() {
    if let Err(err) = dpll_sat::cli::run(Variant::D2) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
