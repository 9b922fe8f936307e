//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{DemoReport, DemoService};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{Point, Verdict};
use crate::exitcode;

/// Run the parsed command and return the process exit code.
pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage("no command given, try --help".into()));
    };

    // Completion and config inspection must work even with a broken config file.
    match command {
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            return Ok(exitcode::OK);
        }
        Commands::Config {
            command: ConfigCommands::Template,
        } => {
            output::info(&Settings::template());
            return Ok(exitcode::OK);
        }
        Commands::Config {
            command: ConfigCommands::Path,
        } => {
            match global_config_path() {
                Some(path) => output::action("global config", &path.display()),
                None => output::info("no config directory available"),
            }
            return Ok(exitcode::OK);
        }
        _ => {}
    }

    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    let service = DemoService::new(settings);

    match command {
        Commands::Geometry { from, to } => {
            let a = point_arg(from.as_deref(), Point::new(3.0, 2.0))?;
            let b = point_arg(to.as_deref(), Point::new(-1.0, 5.0))?;
            Ok(print_report(&service.geometry(a, b)))
        }
        Commands::Tree { style } => Ok(print_report(&service.tree(*style))),
        Commands::List => Ok(print_report(&service.linked_list())),
        Commands::Queue { values } => Ok(print_report(&service.queue(values))),
        Commands::Mylist { first, values } => Ok(print_report(&service.my_list(*first, values))),
        Commands::Magic { order, width } => {
            let report = service.magic(*order, *width)?;
            Ok(print_report(&report))
        }
        Commands::Check { file } => {
            let report = service.check(file)?;
            Ok(print_report(&report))
        }
        Commands::Demo => {
            let reports = service.all()?;
            let codes: Vec<i32> = reports.iter().map(print_report).collect();
            Ok(codes.into_iter().max().unwrap_or(exitcode::OK))
        }
        Commands::Config {
            command: ConfigCommands::Show,
        } => {
            output::info(&service.settings().to_toml()?);
            Ok(exitcode::OK)
        }
        Commands::Config { .. } | Commands::Completion { .. } => Ok(exitcode::OK),
    }
}

/// Turn a `--from X Y` style argument into a point.
fn point_arg(values: Option<&[f64]>, default: Point) -> CliResult<Point> {
    match values {
        None => Ok(default),
        Some([x, y]) => Ok(Point::new(*x, *y)),
        Some(other) => Err(CliError::InvalidArgs(format!(
            "a point needs exactly two coordinates, got {}",
            other.len()
        ))),
    }
}

#[instrument(level = "trace", skip_all, fields(title = %report.title))]
fn print_report(report: &DemoReport) -> i32 {
    output::header(&report.title);

    let (body, verdict_line) = match report.verdict {
        Some(_) => report.lines.split_at(report.lines.len().saturating_sub(1)),
        None => (report.lines.as_slice(), &[][..]),
    };
    for line in body {
        output::info(line);
    }

    match (report.verdict, verdict_line.first()) {
        (Some(Verdict::Magic), Some(line)) => {
            output::success(line);
            exitcode::OK
        }
        (Some(Verdict::NotMagic), Some(line)) => {
            output::failure(line);
            exitcode::NOT_MAGIC
        }
        _ => exitcode::OK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_coordinates_when_point_arg_then_default() {
        let p = point_arg(None, Point::new(1.0, 2.0)).unwrap();
        assert_eq!(p, Point::new(1.0, 2.0));
    }

    #[test]
    fn given_two_coordinates_when_point_arg_then_point() {
        let p = point_arg(Some(&[0.0, -4.0]), Point::new(1.0, 2.0)).unwrap();
        assert_eq!(p, Point::new(0.0, -4.0));
    }

    #[test]
    fn given_three_coordinates_when_point_arg_then_invalid_args() {
        let err = point_arg(Some(&[0.0, 1.0, 2.0]), Point::new(1.0, 2.0)).unwrap_err();
        assert_eq!(err.exit_code(), exitcode::USAGE);
    }
}
