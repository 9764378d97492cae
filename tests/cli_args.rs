//! Tests for CLI argument parsing.
//!
//! These run the actual binary with `--dry-run`, which prints the pipeline
//! invocation as JSON instead of starting the Octave runtime.

use std::process::Command;

fn niakctl_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_niakctl"))
}

#[test]
fn help_shows_primary_flags() {
    let output = niakctl_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--pipeline"));
    assert!(stdout.contains("--file_in"));
    assert!(stdout.contains("--folder_out"));
}

#[test]
fn dry_run_reports_primary_arguments() {
    let output = niakctl_cmd()
        .args([
            "--dry-run",
            "-p",
            "MyPipe",
            "--file_in",
            "in_dir",
            "--folder_out",
            "out_dir",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"name\": \"MyPipe\""));
    assert!(stdout.contains("\"file_in\": \"in_dir\""));
    assert!(stdout.contains("\"folder_out\": \"out_dir\""));
}

#[test]
fn dry_run_defaults_pipeline_name() {
    let output = niakctl_cmd()
        .arg("--dry-run")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"name\": \"Niak_fmri_preprocess\""));
}

#[test]
fn dry_run_translates_opt_flags() {
    let output = niakctl_cmd()
        .args([
            "--dry-run",
            "-p",
            "MyPipe",
            "--opt-psom-max_queued",
            "4",
            "--opt-slice_timing-type_scanner",
            "Bruker",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"psom.max_queued\": \"4\""));
    assert!(stdout.contains("\"slice_timing.type_scanner\": \"Bruker\""));
}

#[test]
fn dry_run_accepts_primary_flags_after_opt_flags() {
    let output = niakctl_cmd()
        .args(["--dry-run", "--opt-a-b", "v", "--file_in", "in_dir"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"file_in\": \"in_dir\""));
    assert!(stdout.contains("\"a.b\": \"v\""));
}

#[test]
fn dry_run_ignores_stray_trailing_tokens() {
    let output = niakctl_cmd()
        .args(["--dry-run", "--opt-a-b", "VAL1", "VAL2", "stray"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"a.b\": \"VAL1\""));
    assert!(!stdout.contains("VAL2"));
}

#[cfg(unix)]
#[test]
fn pipeline_exit_status_is_propagated() {
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let fake_octave = dir.path().join("octave");
    let mut script = std::fs::File::create(&fake_octave).expect("create fake octave");
    writeln!(script, "#!/bin/sh\nexit 3").expect("write fake octave");
    drop(script);
    let mut perms = std::fs::metadata(&fake_octave).expect("stat").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&fake_octave, perms).expect("chmod");

    let output = niakctl_cmd()
        .env("NIAK_OCTAVE", &fake_octave)
        .args(["-p", "MyPipe"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("status 3"), "stderr: {}", stderr);
}

#[test]
fn missing_octave_binary_exits_with_error() {
    let output = niakctl_cmd()
        .env("NIAK_OCTAVE", "/nonexistent/octave-binary-xyz")
        .args(["-p", "MyPipe"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "expected error output, got: {}", stderr);
}
