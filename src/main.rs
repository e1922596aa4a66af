use clap::Parser;
use se_schedule::{export_schedule, Division, ScheduleError, OUTPUT_FILE_NAME};
use std::{path::PathBuf, process::ExitCode};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Exit code for bad command-line arguments.
const USAGE_EXIT: u8 = 2;

#[derive(Parser)]
#[command(version, about = "SportsEngine Schedule Exporter")]
struct Args {
    /// Division - Bantam or Midget
    #[arg(long)]
    division: Division,

    /// The raw schedule to transform (.csv format)
    #[arg(long)]
    schedule: PathBuf,

    /// The mapping codes as exported by SportsEngine
    #[arg(long = "mappingcodes")]
    mapping_codes: PathBuf,
}

fn main() -> ExitCode {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) parse flags; usage problems go to stdout ─────────────────
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            println!("{}", err.render());
            return ExitCode::from(USAGE_EXIT);
        }
    };

    // ─── 3) convert ──────────────────────────────────────────────────
    let output = PathBuf::from(OUTPUT_FILE_NAME);
    match export_schedule(args.division, &args.schedule, &args.mapping_codes, &output) {
        Ok(summary) => {
            info!(
                rows = summary.rows_written,
                byes = summary.byes_skipped,
                "wrote {}",
                output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Printed regardless of RUST_LOG.
            eprintln!("{}", failure_message(&err));
            ExitCode::from(failure_code(&err))
        }
    }
}

fn failure_message(err: &anyhow::Error) -> String {
    format!("error: {:#}", err)
}

fn failure_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ScheduleError>()
        .map_or(1, ScheduleError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("se-schedule").chain(args.iter().copied()))
    }

    #[test]
    fn test_all_three_flags() {
        let args = parse(&[
            "--division",
            "Midget",
            "--schedule",
            "raw.csv",
            "--mappingcodes",
            "codes.csv",
        ])
        .unwrap();
        assert_eq!(args.division, Division::Midget);
        assert_eq!(args.schedule, PathBuf::from("raw.csv"));
        assert_eq!(args.mapping_codes, PathBuf::from("codes.csv"));
    }

    #[test]
    fn test_unknown_division_is_usage_error() {
        for division in ["Peewee", "bantam"] {
            let err = parse(&[
                "--division",
                division,
                "--schedule",
                "raw.csv",
                "--mappingcodes",
                "codes.csv",
            ])
            .err()
            .expect("should be rejected");
            assert!(err.use_stderr());
            assert!(err
                .to_string()
                .contains("Division must be either Bantam or Midget"));
        }
    }

    #[test]
    fn test_missing_flags_are_rejected() {
        assert!(parse(&["--division", "Bantam", "--schedule", "raw.csv"]).is_err());
        assert!(parse(&["--division", "Bantam", "--mappingcodes", "codes.csv"]).is_err());
        assert!(parse(&["--schedule", "raw.csv", "--mappingcodes", "codes.csv"]).is_err());
    }

    #[test]
    fn test_failure_report_names_cause_and_kind() {
        let err = anyhow::Error::new(ScheduleError::Lookup {
            line: 3,
            table: "venue url",
            key: "Nat Bailey".to_string(),
        })
        .context("converting schedule raw.csv");

        assert_eq!(
            failure_message(&err),
            "error: converting schedule raw.csv: line 3: no venue url entry for \"Nat Bailey\""
        );
        assert_eq!(failure_code(&err), 4);
        assert_eq!(failure_code(&anyhow::anyhow!("disk full")), 1);
    }
}
