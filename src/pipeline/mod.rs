//! Pipeline collaborator seam.
//!
//! The launcher itself never executes pipeline stages; it builds an
//! [`Invocation`] and hands it to a [`PipelineLoader`], which returns a
//! [`Pipeline`] exposing a single no-argument `run` operation. The concrete
//! loader shipped with the crate drives the NIAK/PSOM Octave runtime
//! (see [`octave`]).
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod octave;

/// Pipeline identifier used when `--pipeline` is absent.
pub const DEFAULT_PIPELINE: &str = "Niak_fmri_preprocess";

/// A loaded pipeline, ready to execute. Success and failure are entirely
/// delegated to the runtime behind the implementation.
pub trait Pipeline {
    fn run(&mut self) -> Result<()>;
}

/// Loads a pipeline from a name, optional input/output paths, and the dotted
/// configuration mapping produced by the Option Translator.
pub trait PipelineLoader {
    fn load(
        &self,
        name: &str,
        file_in: Option<&Path>,
        folder_out: Option<&Path>,
        options: &BTreeMap<String, String>,
    ) -> Result<Box<dyn Pipeline>>;
}

/// Invocation parameters suitable for presets and `--dry-run` rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invocation {
    pub name: String,
    pub file_in: Option<PathBuf>,
    pub folder_out: Option<PathBuf>,
    pub options: BTreeMap<String, String>,
}

impl Default for Invocation {
    fn default() -> Self {
        Self {
            name: DEFAULT_PIPELINE.to_string(),
            file_in: None,
            folder_out: None,
            options: BTreeMap::new(),
        }
    }
}

impl Invocation {
    /// Load and run this invocation through the given loader.
    pub fn dispatch(&self, loader: &dyn PipelineLoader) -> Result<()> {
        let mut pipeline = loader.load(
            &self.name,
            self.file_in.as_deref(),
            self.folder_out.as_deref(),
            &self.options,
        )?;
        pipeline.run()
    }
}
