//! Binary tests: argument handling, uniform-cost fallback, and the exact report format.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Scratch directory holding the triangle graph `A-B 5, B-C 5, A-C 20`.
struct TestEnv {
    _temp_dir: TempDir,
    edges: PathBuf,
    heuristic: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let edges = temp_dir.path().join("edges.txt");
        let heuristic = temp_dir.path().join("h.txt");

        fs::write(&edges, "A B 5\nB C 5\nA C 20\nD E 1\nEND OF INPUT\n").expect("write edges");
        fs::write(&heuristic, "C 0\nB 100\nA 100\nEND OF INPUT\n").expect("write heuristic");

        Self {
            _temp_dir: temp_dir,
            edges,
            heuristic,
        }
    }

    fn command(&self, start: &str, goal: &str) -> Command {
        let mut cmd = Command::cargo_bin("findroute").expect("binary exists");
        cmd.arg(&self.edges).arg(start).arg(goal);
        cmd
    }
}

#[test]
fn uniform_cost_without_heuristic() {
    let env = TestEnv::new();

    env.command("A", "C")
        .assert()
        .success()
        .stdout(
            "\nNodes Popped: 3\nNodes Expanded: 2\nNodes Generated: 4\n\
             Distance: 10.0 km\nRoute:\nA to B, 5.0 km\nB to C, 5.0 km\n",
        );
}

#[test]
fn greedy_with_heuristic_takes_direct_edge() {
    let env = TestEnv::new();

    env.command("A", "C")
        .arg("--heuristic")
        .arg(&env.heuristic)
        .args(["--algo", "greedy"])
        .assert()
        .success()
        .stdout(
            "\nNodes Popped: 2\nNodes Expanded: 1\nNodes Generated: 3\n\
             Distance: 20.0 km\nRoute:\nA to C, 20.0 km\n",
        );
}

#[test]
fn algo_is_ignored_without_heuristic() {
    let env = TestEnv::new();

    env.command("A", "C")
        .args(["--algo", "greedy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distance: 10.0 km"));
}

#[test]
fn unknown_algo_runs_a_star() {
    let env = TestEnv::new();

    let a_star = env
        .command("A", "C")
        .arg("--heuristic")
        .arg(&env.heuristic)
        .output()
        .expect("run astar");
    let unknown = env
        .command("A", "C")
        .arg("--heuristic")
        .arg(&env.heuristic)
        .args(["--algo", "bogus"])
        .output()
        .expect("run bogus");

    assert!(a_star.status.success());
    assert_eq!(a_star.stdout, unknown.stdout);
}

#[test]
fn unreachable_goal_prints_infinity() {
    let env = TestEnv::new();

    env.command("A", "E")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Distance: Infinity\nRoute:\nNone\n"));
}

#[test]
fn start_equals_goal() {
    let env = TestEnv::new();

    env.command("B", "B")
        .assert()
        .success()
        .stdout(
            "\nNodes Popped: 1\nNodes Expanded: 0\nNodes Generated: 1\n\
             Distance: 0.0 km\nRoute:\n",
        );
}

#[test]
fn missing_edge_file_fails() {
    let env = TestEnv::new();

    Command::cargo_bin("findroute")
        .expect("binary exists")
        .arg(env.edges.with_file_name("nope.txt"))
        .args(["A", "C"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to load edges"));
}

#[test]
fn missing_heuristic_file_fails() {
    let env = TestEnv::new();

    env.command("A", "C")
        .arg("--heuristic")
        .arg(env.heuristic.with_file_name("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load heuristics"));
}

#[test]
fn missing_arguments_is_usage_error() {
    Command::cargo_bin("findroute")
        .expect("binary exists")
        .arg("edges.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
