use clap::Parser;
use std::path::PathBuf;

use niakctl::opts;
use niakctl::pipeline::DEFAULT_PIPELINE;

#[derive(Parser)]
#[command(name = "niakctl", version, about = "NIAK pipeline launcher")]
pub struct CliArgs {
    /// Pipeline identifier
    #[arg(short = 'p', long, default_value = DEFAULT_PIPELINE)]
    pub pipeline: String,

    /// Input data location
    #[arg(long = "file_in")]
    pub file_in: Option<PathBuf>,

    /// Output directory
    #[arg(long = "folder_out")]
    pub folder_out: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Print the pipeline invocation as JSON instead of executing it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Dynamic pipeline options: `--opt-<component>-<setting> VALUE`,
    /// translated into dotted configuration keys (`component.setting`).
    /// May appear anywhere on the command line.
    #[arg(
        value_name = "OPT",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub opt: Vec<String>,
}

impl CliArgs {
    /// Parse the process command line. Dynamic `--opt-*` flags and their
    /// values are split out before the primary parse, so primary flags may
    /// appear before, between, or after them.
    pub fn from_env() -> Self {
        let raw: Vec<String> = std::env::args().skip(1).collect();
        Self::try_from_tokens(&raw).unwrap_or_else(|err| err.exit())
    }

    pub fn try_from_tokens(raw: &[String]) -> Result<Self, clap::Error> {
        let (primary, dynamic) = split_dynamic(raw);
        let mut args =
            Self::try_parse_from(std::iter::once("niakctl".to_string()).chain(primary))?;
        args.opt.extend(dynamic);
        Ok(args)
    }
}

/// Route every `--opt-*` flag and its run of value tokens to the dynamic
/// side, leaving the rest for the derive parser.
fn split_dynamic(tokens: &[String]) -> (Vec<String>, Vec<String>) {
    let mut primary = Vec::new();
    let mut dynamic = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if opts::is_option_flag(&tokens[i]) {
            dynamic.push(tokens[i].clone());
            i += 1;
            while i < tokens.len() && !opts::looks_like_flag(&tokens[i]) {
                dynamic.push(tokens[i].clone());
                i += 1;
            }
        } else {
            primary.push(tokens[i].clone());
            i += 1;
        }
    }
    (primary, dynamic)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn primary_flags_parse_after_opt_flags() {
        let args = CliArgs::try_from_tokens(&tokens(&[
            "--opt-a-b",
            "v",
            "--file_in",
            "in_dir",
        ]))
        .unwrap();
        assert_eq!(args.file_in, Some(PathBuf::from("in_dir")));
        assert_eq!(args.opt, tokens(&["--opt-a-b", "v"]));
    }

    #[test]
    fn primary_flags_parse_between_opt_flags() {
        let args = CliArgs::try_from_tokens(&tokens(&[
            "--opt-a-b",
            "v",
            "-p",
            "MyPipe",
            "--opt-c-d",
            "w",
            "--folder_out",
            "out_dir",
        ]))
        .unwrap();
        assert_eq!(args.pipeline, "MyPipe");
        assert_eq!(args.folder_out, Some(PathBuf::from("out_dir")));
        assert_eq!(args.opt, tokens(&["--opt-a-b", "v", "--opt-c-d", "w"]));
    }

    #[test]
    fn split_groups_values_with_their_flag() {
        let (primary, dynamic) = split_dynamic(&tokens(&[
            "--opt-a-b",
            "1",
            "2",
            "--file_in",
            "in_dir",
        ]));
        assert_eq!(primary, tokens(&["--file_in", "in_dir"]));
        assert_eq!(dynamic, tokens(&["--opt-a-b", "1", "2"]));
    }
}
