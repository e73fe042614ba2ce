use std::process::Command;
use std::str;

fn driver() -> Command {
    Command::new(env!("CARGO_BIN_EXE_perfect_mazes_driver"))
}

#[test]
fn zero_grid_size_is_a_configuration_error() {
    let output = driver().arg("0").output().expect("failed to run driver");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn negative_grid_size_is_a_configuration_error() {
    let output = driver().arg("-3").output().expect("failed to run driver");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn non_numeric_grid_size_is_a_configuration_error() {
    let output = driver().arg("abc").output().expect("failed to run driver");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_grid_size_is_a_configuration_error() {
    let output = driver().output().expect("failed to run driver");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn help_is_not_an_error() {
    let output = driver().arg("--help").output().expect("failed to run driver");
    assert!(output.status.success());
}

#[test]
fn renders_a_bordered_grid_of_the_requested_size() {
    let output = driver().arg("4").output().expect("failed to run driver");
    assert!(output.status.success());

    let text = str::from_utf8(&output.stdout).expect("driver wrote invalid utf-8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2 * 4 + 1);
    assert_eq!(lines[0], "+--+--+--+--+");
    assert_eq!(lines[8], "+--+--+--+--+");
    assert!(lines.iter().all(|line| line.len() == 3 * 4 + 1));
    assert!(lines.iter().all(|line| line.starts_with("+") || line.starts_with("|")));
    assert!(lines.iter().all(|line| line.ends_with("+") || line.ends_with("|")));
}

#[test]
fn single_cell_maze_renders_as_one_box() {
    let output = driver().arg("1").output().expect("failed to run driver");
    assert!(output.status.success());
    assert_eq!(str::from_utf8(&output.stdout).unwrap(), "+--+\n|  |\n+--+\n");
}

#[test]
fn seeded_runs_are_reproducible() {
    let first = driver().args(&["6", "--seed=99"]).output().expect("failed to run driver");
    let second = driver().args(&["6", "--seed=99"]).output().expect("failed to run driver");

    assert!(first.status.success());
    assert!(!first.stdout.is_empty());
    assert_eq!(first.stdout, second.stdout);
}
