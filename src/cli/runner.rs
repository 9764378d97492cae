use tracing::info;

use niakctl::build_opt;
use niakctl::pipeline::octave::OctaveLoader;
use niakctl::pipeline::{Invocation, PipelineLoader};
use niakctl::Result;

use super::args::CliArgs;

fn invocation_from(args: &CliArgs) -> Invocation {
    Invocation {
        name: args.pipeline.clone(),
        file_in: args.file_in.clone(),
        folder_out: args.folder_out.clone(),
        options: build_opt(&args.opt),
    }
}

pub fn run(args: CliArgs) -> Result<()> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let invocation = invocation_from(&args);

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&invocation)?);
        return Ok(());
    }

    run_with(&invocation, &OctaveLoader::from_env())
}

/// Dispatch an invocation through an explicit loader. Split out of [`run`]
/// so tests can substitute a recording loader for the Octave runtime.
pub fn run_with(invocation: &Invocation, loader: &dyn PipelineLoader) -> Result<()> {
    info!("Loading pipeline: {}", invocation.name);
    invocation.dispatch(loader)
}
