//! niakctl CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, translate
//! `--opt-*` flags, and dispatch to the pipeline loader. The process exit
//! code mirrors the pipeline's own exit status. For programmatic use, prefer
//! the library API (`niakctl::build_opt`, `niakctl::pipeline`).

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::from_env();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            err.exit_code()
        }
    }
}
