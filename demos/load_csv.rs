//! Load a table from CSV.
//!
//! Reads the file named on the command line, or a built-in sample when no
//! argument is given.

use std::fs::File;
use std::process::ExitCode;

use boxtable::prelude::*;

const SAMPLE: &str = "\
Id,Date,Description
1,2022-01-04,\"Bought a new keyboard, the old one was sticky\"
2,2022-01-09,Coffee
3,2022-02-11,Renewed the domain for another year
";

fn main() -> ExitCode {
    let mut table = Table::new(std::io::stdout());
    table.set_available_width_from_terminal();

    let loaded = match std::env::args().nth(1) {
        Some(path) => match File::open(&path) {
            Ok(file) => table.load_csv(file, true),
            Err(err) => {
                eprintln!("cannot open {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => table.load_csv(SAMPLE.as_bytes(), true),
    };

    if let Err(err) = loaded {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    match table.try_render() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
