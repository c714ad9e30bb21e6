//! `D3`: D2 plus VSIDS-decayed literal activity branching.

use dpll_sat::config::Variant;

fn main() {
    if let Err(err) = dpll_sat::cli::run(Variant::D3) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
