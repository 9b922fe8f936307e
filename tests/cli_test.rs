//! Argument parsing and dispatch

use std::fs;

use clap::{CommandFactory, Parser};
use rstest::rstest;
use tempfile::TempDir;

use labkit::cli::commands::execute_command;
use labkit::cli::{Cli, Commands};
use labkit::config::TreeStyle;
use labkit::exitcode;

#[test]
fn verify_cli() {
    Cli::command().debug_assert();
}

#[test]
fn given_queue_without_values_when_parse_then_defaults() {
    let cli = Cli::try_parse_from(["labkit", "queue"]).unwrap();
    match cli.command {
        Some(Commands::Queue { values }) => assert_eq!(values, vec![3, 5, -1]),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_negative_coordinates_when_parse_geometry_then_accepted() {
    let cli = Cli::try_parse_from(["labkit", "geometry", "--from", "-1", "5", "--to", "3", "2"])
        .unwrap();
    match cli.command {
        Some(Commands::Geometry { from, to }) => {
            assert_eq!(from, Some(vec![-1.0, 5.0]));
            assert_eq!(to, Some(vec![3.0, 2.0]));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_repeated_debug_flag_when_parse_then_counted() {
    let cli = Cli::try_parse_from(["labkit", "-dd", "tree", "--style", "box"]).unwrap();
    assert_eq!(cli.debug, 2);
    match cli.command {
        Some(Commands::Tree { style }) => assert_eq!(style, Some(TreeStyle::Box)),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_no_command_when_execute_then_usage_error() {
    let cli = Cli::try_parse_from(["labkit"]).unwrap();
    let err = execute_command(&cli).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_config_template_when_execute_then_ok() {
    let cli = Cli::try_parse_from(["labkit", "config", "template"]).unwrap();
    assert_eq!(execute_command(&cli).unwrap(), exitcode::OK);
}

fn run(args: &[&str]) -> i32 {
    let cli = Cli::try_parse_from(args).unwrap();
    execute_command(&cli).unwrap()
}

fn write_grid(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("grid.txt");
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[rstest]
#[case("1 2\n3 4\n", exitcode::NOT_MAGIC)]
#[case("2 7 6\n9 5 1\n4 3 8\n", exitcode::OK)]
fn given_grid_file_when_check_then_verdict_exit_code(
    #[case] grid: &str,
    #[case] expected: i32,
) {
    let dir = TempDir::new().unwrap();
    let file = write_grid(&dir, grid);
    assert_eq!(run(&["labkit", "check", &file]), expected);
}

#[test]
fn given_ragged_grid_file_when_check_then_data_error() {
    let dir = TempDir::new().unwrap();
    let file = write_grid(&dir, "1 2 3\n4 5\n");
    let cli = Cli::try_parse_from(["labkit", "check", &file]).unwrap();
    let err = execute_command(&cli).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[test]
fn given_odd_order_when_magic_then_ok() {
    assert_eq!(run(&["labkit", "magic", "--order", "3"]), exitcode::OK);
}

#[test]
fn given_even_order_when_magic_then_data_error() {
    let cli = Cli::try_parse_from(["labkit", "magic", "--order", "4"]).unwrap();
    let err = execute_command(&cli).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[test]
fn given_defaults_when_demo_then_ok() {
    assert_eq!(run(&["labkit", "demo"]), exitcode::OK);
}
