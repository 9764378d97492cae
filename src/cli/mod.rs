//! Command Line Interface (CLI) layer for niakctl.
//!
//! This module defines argument parsing (`args`) and the orchestration logic
//! (`runner`) that wires parsed flags and translated `--opt-*` options to the
//! pipeline loader.
//!
//! If you are embedding the launcher into another application, prefer the
//! library surface (`niakctl::build_opt`, `niakctl::pipeline`) over calling
//! the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
