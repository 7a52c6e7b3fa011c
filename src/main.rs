//! Stardock - sidecar metadata for project directories

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = stardock::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
