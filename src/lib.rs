#![doc = r#"
niakctl — a command-line launcher for NIAK fMRI preprocessing pipelines.

This crate translates dynamic `--opt-<component>-<setting> VALUE` flags into a
dotted-key configuration mapping (`component.setting = VALUE`) and hands the
result, together with a pipeline name and input/output paths, to a pipeline
loader. The shipped loader drives the NIAK/PSOM Octave runtime; the loading
seam is a trait, so other runtimes (or test doubles) can be substituted.

Quick start: translate options and dispatch a pipeline
------------------------------------------------------
```rust,no_run
use niakctl::pipeline::octave::OctaveLoader;
use niakctl::pipeline::Invocation;
use niakctl::build_opt;

fn main() -> niakctl::Result<()> {
    let tokens = vec![
        "--opt-psom-max_queued".to_string(),
        "4".to_string(),
    ];
    let invocation = Invocation {
        name: "Niak_fmri_preprocess".to_string(),
        file_in: Some("data_test_niak_mnc1".into()),
        folder_out: Some("results".into()),
        options: build_opt(&tokens),
    };
    invocation.dispatch(&OctaveLoader::from_env())
}
```

Option translation
------------------
`build_opt` accepts the unrecognized remainder of a command line. Flags may
carry any number of embedded hyphens (`--opt-a-b-c VAL` yields `a.b.c = VAL`);
tokens without the `--opt` prefix are ignored, and when a flag is followed by
several value tokens only the first is retained.

Error handling
--------------
All public functions return `niakctl::Result<T>`; match on `niakctl::Error`
for specific cases, e.g. a rejected option key or a non-zero pipeline exit.

Useful modules
--------------
- [`opts`] — the option translator and its escape/unescape helpers.
- [`pipeline`] — loader/pipeline traits, `Invocation`, and the Octave backend.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod error;
pub mod opts;
pub mod pipeline;

// Curated public API surface
pub use error::{Error, Result};
pub use opts::{ESCAPE_MARKER, OPTION_PREFIX, build_opt, escape_flag, unescape_name};
pub use pipeline::octave::OctaveLoader;
pub use pipeline::{DEFAULT_PIPELINE, Invocation, Pipeline, PipelineLoader};
