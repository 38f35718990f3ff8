use std::process::{Command, Output};

fn hydra(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hydra")).args(args)
                                             .output()
                                             .unwrap_or_else(|e| panic!("Failed to run hydra: {e}"))
}

#[test]
fn tree_reports_parse_errors_once_and_stops() {
    let output = hydra(&["--tree", "var a = 1\nvar b = (2\nprint(message: a)"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr.matches("Error on line 2").count(), 1, "stderr was: {stderr}");
    assert!(stdout.contains("Assignment: var"));
    assert!(!stdout.contains("1.000000"), "the script must not run: {stdout}");
}

#[test]
fn tree_runs_valid_scripts() {
    let output = hydra(&["--tree", "var a = 1\nprint(message: a)"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.starts_with("Assignment: var\n"));
    assert!(stdout.ends_with("1.000000"));
}

#[test]
fn check_does_not_run_the_script() {
    let output = hydra(&["--check", "print(message: \"ran\")"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());

    let failing = hydra(&["--check", "var a = 1 +\nfor i in [0, 1] {\n}"]);
    let stderr = String::from_utf8_lossy(&failing.stderr);
    assert_eq!(failing.status.code(), Some(1));
    assert_eq!(stderr.lines().count(), 2, "stderr was: {stderr}");
}
