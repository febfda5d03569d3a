//! End-to-end tests for input errors, error rendering, and configuration.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

fn gw_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gw"));
    cmd.current_dir(dir);
    cmd.env("GRAPHWALK_LOG", "error");
    cmd.env("XDG_CONFIG_HOME", dir.join("xdg"));
    cmd.env_remove("FORMAT");
    cmd.env_remove("DEBUG");
    cmd
}

fn write_file(dir: &Path, name: &str, body: &str) {
    std::fs::write(dir.join(name), body).expect("write file");
}

// ---------------------------------------------------------------------------
// Graph file errors
// ---------------------------------------------------------------------------

#[test]
fn out_of_range_edge_fails_with_line_and_code() {
    let dir = TempDir::new().expect("tempdir");
    write_file(dir.path(), "bad.txt", "3\n0 1\n1 7\n");

    gw_cmd(dir.path())
        .args(["-g", "bad.txt", "show", "--format", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E2001]"))
        .stderr(predicate::str::contains("line 3: invalid vertex 7"))
        .stderr(predicate::str::contains("suggestion:"));
}

#[test]
fn json_errors_are_structured() {
    let dir = TempDir::new().expect("tempdir");
    write_file(dir.path(), "bad.txt", "3\n0 1\n1 7\n");

    let output = gw_cmd(dir.path())
        .args(["-g", "bad.txt", "show", "--json"])
        .output()
        .expect("gw should not crash");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let json: Value = serde_json::from_slice(&output.stderr).expect("JSON error on stderr");
    assert_eq!(json["error"]["error_code"], "E2001");
    assert!(
        json["error"]["message"]
            .as_str()
            .is_some_and(|m| m.contains("bad.txt"))
    );
}

#[test]
fn malformed_edge_line_fails() {
    let dir = TempDir::new().expect("tempdir");
    write_file(dir.path(), "bad.txt", "3\n0 1\nzero one\n");

    gw_cmd(dir.path())
        .args(["-g", "bad.txt", "cycle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3: expected an edge"));
}

#[test]
fn empty_graph_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    write_file(dir.path(), "empty.txt", "# nothing here\n0\n");

    gw_cmd(dir.path())
        .args(["-g", "empty.txt", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E1001"));
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().expect("tempdir");
    gw_cmd(dir.path())
        .args(["-g", "nope.txt", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read graph file nope.txt"));
}

#[test]
fn duplicate_edges_are_skipped_not_fatal() {
    let dir = TempDir::new().expect("tempdir");
    write_file(dir.path(), "dup.txt", "2\n0 1\n0->1\n");

    gw_cmd(dir.path())
        .env("GRAPHWALK_LOG", "warn")
        .args(["-g", "dup.txt", "show", "--format", "text"])
        .assert()
        .success()
        .stdout("vertices 2\nedges 1\n0: 1\n1:\n")
        .stderr(predicate::str::contains("skipping duplicate edge"));
}

#[test]
fn huge_vertex_count_is_refused_before_allocation() {
    let dir = TempDir::new().expect("tempdir");

    gw_cmd(dir.path())
        .args(["show", "--format", "text"])
        .write_stdin("1000000000000\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "line 1: vertex count 1000000000000 exceeds the limit",
        ));

    gw_cmd(dir.path())
        .args(["random", "1000000000"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exceeds the limit"));
}

#[test]
fn graph_size_limit_is_configurable() {
    let dir = TempDir::new().expect("tempdir");
    write_file(dir.path(), "graphwalk.toml", "[limits]\nmax_graph_vertices = 3\n");
    write_file(dir.path(), "g3.txt", "3\n0 1\n");
    write_file(dir.path(), "g4.txt", "4\n0 1\n");

    gw_cmd(dir.path())
        .args(["-g", "g3.txt", "bfs", "0", "--format", "text"])
        .assert()
        .success()
        .stdout("0 1\n");

    gw_cmd(dir.path())
        .args(["-g", "g4.txt", "bfs", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1: vertex count 4 exceeds the limit of 3"));
}

#[test]
fn invalid_start_vertex_fails() {
    let dir = TempDir::new().expect("tempdir");
    write_file(dir.path(), "g.txt", "2\n0 1\n");

    gw_cmd(dir.path())
        .args(["-g", "g.txt", "dfs", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid vertex 2: graph has vertices 0..2"));

    gw_cmd(dir.path())
        .args(["-g", "g.txt", "euler", "0", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E2001"));
}

#[test]
fn usage_errors_exit_with_clap_status() {
    let dir = TempDir::new().expect("tempdir");
    gw_cmd(dir.path())
        .args(["hamilton", "0"])
        .assert()
        .code(2);
    gw_cmd(dir.path())
        .args(["random", "4", "--sparsity", "0"])
        .assert()
        .code(2);
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn config_output_format_applies_without_flags() {
    let dir = TempDir::new().expect("tempdir");
    write_file(dir.path(), "graphwalk.toml", "[output]\nformat = \"json\"\n");
    write_file(dir.path(), "g.txt", "2\n0 1\n");

    let output = gw_cmd(dir.path())
        .args(["-g", "g.txt", "bfs", "0"])
        .output()
        .expect("gw should not crash");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["order"], serde_json::json!([0, 1]));
}

#[test]
fn format_env_beats_config_and_flag_beats_env() {
    let dir = TempDir::new().expect("tempdir");
    write_file(dir.path(), "graphwalk.toml", "[output]\nformat = \"json\"\n");
    write_file(dir.path(), "g.txt", "2\n0 1\n");

    gw_cmd(dir.path())
        .env("FORMAT", "text")
        .args(["-g", "g.txt", "bfs", "0"])
        .assert()
        .success()
        .stdout("0 1\n");

    gw_cmd(dir.path())
        .env("FORMAT", "json")
        .args(["-g", "g.txt", "bfs", "0", "--format", "text"])
        .assert()
        .success()
        .stdout("0 1\n");
}

#[test]
fn config_undirected_loads_both_directions() {
    let dir = TempDir::new().expect("tempdir");
    write_file(dir.path(), "graphwalk.toml", "[load]\nundirected = true\n");
    write_file(dir.path(), "g.txt", "2\n0 1\n");

    gw_cmd(dir.path())
        .args(["-g", "g.txt", "path", "1", "0", "--format", "text"])
        .assert()
        .success()
        .stdout("1 0\n");
}

#[test]
fn matrix_wider_than_limit_is_refused() {
    let dir = TempDir::new().expect("tempdir");
    write_file(dir.path(), "graphwalk.toml", "[limits]\nmax_vertices = 2\n");
    write_file(dir.path(), "g.txt", "3\n0 1\n");

    gw_cmd(dir.path())
        .args(["-g", "g.txt", "show", "--matrix"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limited to 2"));

    // Lists are not limited.
    gw_cmd(dir.path())
        .args(["-g", "g.txt", "show", "--format", "text"])
        .assert()
        .success();
}

#[test]
fn broken_config_fails_fast() {
    let dir = TempDir::new().expect("tempdir");
    write_file(dir.path(), "graphwalk.toml", "[limits\n");

    gw_cmd(dir.path())
        .args(["random", "3", "--seed", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}
