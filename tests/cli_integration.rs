//! Integration tests for the `tl` CLI.
//!
//! Each test writes a script (and sometimes a config) into a temp
//! directory, runs `tl script` as a subprocess, and checks stdout.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use pretty_assertions::assert_eq;

/// Get the path to the built `tl` binary.
fn tl_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // test binary
    path.pop(); // deps/
    path.push("tl");
    path
}

/// Run `tl` in `dir`, returning (stdout, stderr, success).
fn run_tl(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(tl_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", dir)
        .output()
        .expect("failed to run tl");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn run_tl_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_tl(dir, args);
    if !success {
        panic!("tl {:?} failed:\nstdout: {}\nstderr: {}", args, stdout, stderr);
    }
    stdout
}

/// Write `script` to `todo.tl` in `dir` and return its path as a string.
fn write_script(dir: &Path, script: &str) -> String {
    let path = dir.join("todo.tl");
    fs::write(&path, script).unwrap();
    path.to_str().unwrap().to_string()
}

const GROCERIES: &str = "\
add Buy milk
add Walk dog
complete 2
";

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

#[test]
fn script_prints_final_state() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = write_script(tmp.path(), GROCERIES);

    let out = run_tl_ok(tmp.path(), &["script", &script]);
    assert_eq!(
        out,
        "route #/ (All)\n  1. [ ] Buy milk\n  2. [x] Walk dog\n1 item left\n"
    );
}

#[test]
fn show_prints_intermediate_states() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = write_script(
        tmp.path(),
        "# shopping\nadd Buy milk\nshow\n\ntoggle 1\nroute #/active\n",
    );

    let out = run_tl_ok(tmp.path(), &["script", &script]);
    assert_eq!(
        out,
        "route #/ (All)\n  1. [ ] Buy milk\n1 item left\n\
         \n\
         route #/active (Active)\n  1. [x] Buy milk  (hidden)\n0 items left\n"
    );
}

#[test]
fn empty_script_hides_footer() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = write_script(tmp.path(), "");

    let out = run_tl_ok(tmp.path(), &["script", &script]);
    assert_eq!(out, "route #/ (All)\n  (no items)\n");
}

#[test]
fn clear_completed_and_edit() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = write_script(
        tmp.path(),
        "add a\nadd b\nadd c\ncomplete 1\nclear-completed\nedit 2   see the sea  \n",
    );

    let out = run_tl_ok(tmp.path(), &["script", &script]);
    assert_eq!(
        out,
        "route #/ (All)\n  1. [ ] b\n  2. [ ] see the sea\n2 items left\n"
    );
}

#[test]
fn script_from_stdin() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut child = Command::new(tl_bin())
        .arg("script")
        .current_dir(tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run tl");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"add From a pipe\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let out = String::from_utf8_lossy(&output.stdout);
    assert!(out.contains("  1. [ ] From a pipe"));
}

// ---------------------------------------------------------------------------
// Routing and config
// ---------------------------------------------------------------------------

#[test]
fn route_flag_sets_initial_filter() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = write_script(tmp.path(), GROCERIES);

    let out = run_tl_ok(tmp.path(), &["--route", "#/completed", "script", &script]);
    assert!(out.starts_with("route #/completed (Completed)\n"));
    assert!(out.contains("  1. [ ] Buy milk  (hidden)\n"));
    assert!(out.contains("  2. [x] Walk dog\n"));
}

#[test]
fn unrecognized_route_is_reset() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = write_script(tmp.path(), "add one\nroute #/bogus\n");

    let out = run_tl_ok(tmp.path(), &["script", &script]);
    assert!(out.starts_with("route #/ (All)\n"));
}

#[test]
fn config_file_initial_route() {
    let tmp = tempfile::TempDir::new().unwrap();
    let config = tmp.path().join("ticklist.toml");
    fs::write(&config, "initial_route = \"#/active\"\n").unwrap();
    let script = write_script(tmp.path(), GROCERIES);

    let out = run_tl_ok(
        tmp.path(),
        &["-c", config.to_str().unwrap(), "script", &script],
    );
    assert!(out.starts_with("route #/active (Active)\n"));
    assert!(out.contains("  2. [x] Walk dog  (hidden)\n"));
}

#[test]
fn default_config_location_is_used() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("ticklist")).unwrap();
    fs::write(
        tmp.path().join("ticklist/config.toml"),
        "initial_route = \"#/completed\"\n",
    )
    .unwrap();
    let script = write_script(tmp.path(), "add x\n");

    let out = run_tl_ok(tmp.path(), &["script", &script]);
    assert!(out.starts_with("route #/completed (Completed)\n"));
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[test]
fn json_output() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = write_script(tmp.path(), "add Buy milk\nshow\nadd Walk dog\ncomplete 2\n");

    let out = run_tl_ok(tmp.path(), &["script", &script, "--json"]);
    let snapshots: serde_json::Value = serde_json::from_str(&out).unwrap();
    let snapshots = snapshots.as_array().unwrap();
    assert_eq!(snapshots.len(), 2);

    assert_eq!(snapshots[0]["total"], 1);
    let last = &snapshots[1];
    assert_eq!(last["filter"], "all");
    assert_eq!(last["active"], 1);
    assert_eq!(last["counter"], "1 item left");
    assert_eq!(last["items"][1]["value"], "Walk dog");
    assert_eq!(last["items"][1]["completed"], true);
    assert_eq!(last["items"][1]["visible"], true);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn unknown_command_fails_with_line_number() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = write_script(tmp.path(), "add a\nfrobnicate\n");

    let (stdout, stderr, success) = run_tl(tmp.path(), &["script", &script]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("line 2: unknown command `frobnicate`"));
}

#[test]
fn position_out_of_range_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = write_script(tmp.path(), "add a\ntoggle 3\n");

    let (_, stderr, success) = run_tl(tmp.path(), &["script", &script]);
    assert!(!success);
    assert!(stderr.contains("no item at position 3"));
}

#[test]
fn missing_script_file_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_tl(tmp.path(), &["script", "nope.tl"]);
    assert!(!success);
    assert!(stderr.contains("could not read nope.tl"));
}

#[test]
fn broken_config_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let config = tmp.path().join("bad.toml");
    fs::write(&config, "initial_route = [").unwrap();
    let script = write_script(tmp.path(), "add a\n");

    let (_, stderr, success) = run_tl(
        tmp.path(),
        &["--config", config.to_str().unwrap(), "script", &script],
    );
    assert!(!success);
    assert!(stderr.contains("bad.toml"));
}

#[test]
fn log_file_receives_warnings() {
    let tmp = tempfile::TempDir::new().unwrap();
    let log = tmp.path().join("tl.log");
    let script = write_script(tmp.path(), "route #/bogus\n");

    run_tl_ok(
        tmp.path(),
        &["--log-file", log.to_str().unwrap(), "script", &script],
    );
    let logged = fs::read_to_string(&log).unwrap();
    assert!(logged.contains("unrecognized route"));
}
