//! Octave-backed pipeline loader.
//!
//! Renders the invocation into a short Octave script (`opt` struct
//! assignments plus a call to the pipeline function) and executes it with
//! `octave --no-gui --eval`. Dotted option keys map directly onto nested
//! struct fields, so `psom.max_queued = 4` becomes `opt.psom.max_queued = 4;`.
use std::collections::BTreeMap;
use std::env;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::error::{Error, Result};

use super::{Pipeline, PipelineLoader};

/// Environment variable overriding the Octave binary.
pub const OCTAVE_BIN_VAR: &str = "NIAK_OCTAVE";

pub struct OctaveLoader {
    octave_bin: PathBuf,
}

impl OctaveLoader {
    pub fn new(octave_bin: impl Into<PathBuf>) -> Self {
        Self {
            octave_bin: octave_bin.into(),
        }
    }

    /// Loader using the `NIAK_OCTAVE` binary if set, `octave` from PATH
    /// otherwise.
    pub fn from_env() -> Self {
        let bin = env::var_os(OCTAVE_BIN_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("octave"));
        Self::new(bin)
    }
}

impl PipelineLoader for OctaveLoader {
    fn load(
        &self,
        name: &str,
        file_in: Option<&Path>,
        folder_out: Option<&Path>,
        options: &BTreeMap<String, String>,
    ) -> Result<Box<dyn Pipeline>> {
        let script = render_script(name, file_in, folder_out, options)?;
        debug!("rendered pipeline script:\n{}", script);
        Ok(Box::new(OctavePipeline {
            octave_bin: self.octave_bin.clone(),
            script,
        }))
    }
}

pub struct OctavePipeline {
    octave_bin: PathBuf,
    script: String,
}

impl Pipeline for OctavePipeline {
    fn run(&mut self) -> Result<()> {
        info!("Running pipeline via {:?}", self.octave_bin);
        let status = Command::new(&self.octave_bin)
            .arg("--no-gui")
            .arg("--eval")
            .arg(&self.script)
            .status()?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::PipelineExit {
                status: status.code().unwrap_or(1),
            })
        }
    }
}

/// Build the Octave script for one invocation. Deterministic: options come
/// from a sorted mapping.
pub(crate) fn render_script(
    name: &str,
    file_in: Option<&Path>,
    folder_out: Option<&Path>,
    options: &BTreeMap<String, String>,
) -> Result<String> {
    let mut script = String::from("opt = struct();\n");
    for (key, value) in options {
        validate_key(key)?;
        let _ = writeln!(script, "opt.{} = {};", key, octave_literal(value));
    }
    if let Some(folder) = folder_out {
        let _ = writeln!(
            script,
            "opt.folder_out = {};",
            quoted(&folder.to_string_lossy())
        );
    }
    match file_in {
        Some(path) => {
            let _ = writeln!(script, "files_in = {};", quoted(&path.to_string_lossy()));
        }
        None => script.push_str("files_in = struct();\n"),
    }
    let _ = writeln!(script, "{}(files_in, opt);", name.to_ascii_lowercase());
    Ok(script)
}

/// Option keys are spliced into the script as struct field paths, so every
/// dot-separated segment must be a plain Octave identifier.
fn validate_key(key: &str) -> Result<()> {
    let valid_segment = |s: &str| {
        let mut chars = s.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    };
    if !key.is_empty() && key.split('.').all(valid_segment) {
        Ok(())
    } else {
        Err(Error::InvalidOptionKey {
            key: key.to_string(),
        })
    }
}

/// Emit numbers, booleans, `Inf` and `NaN` bare; everything else as a
/// single-quoted Octave string.
fn octave_literal(value: &str) -> String {
    let bare = value.parse::<f64>().is_ok()
        || matches!(value, "true" | "false" | "Inf" | "-Inf" | "NaN");
    if bare {
        value.to_string()
    } else {
        quoted(value)
    }
}

fn quoted(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
