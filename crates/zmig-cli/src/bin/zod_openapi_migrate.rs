#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

use zmig_cli::args::{CliArgs, ColorChoice};
use zmig_cli::config::options_from_args;
use zmig_cli::reporter::Reporter;
use zmig_core::Migrator;

fn main() -> ExitCode {
    // Initialize tracing if ZMIG_LOG or RUST_LOG is set (zero cost otherwise).
    // Supports ZMIG_LOG_FORMAT=tree|json|text.
    zmig_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let color = args.color.enabled(std::io::stdout().is_terminal());
    if args.color == ColorChoice::Always {
        colored::control::set_override(true);
    }
    let reporter = Reporter::new(color);

    match run(&args, &reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let color = args.color.enabled(std::io::stderr().is_terminal());
            eprint!("{}", Reporter::new(color).format_failure(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs, reporter: &Reporter) -> Result<()> {
    let options = options_from_args(args)?;
    let migrator = Migrator::new(options);

    if args.json {
        let result = migrator.migrate(&args.pattern)?;
        let json =
            serde_json::to_string_pretty(&result).context("failed to serialize result record")?;
        println!("{json}");
        return Ok(());
    }

    print!("{}", reporter.banner());
    let result = migrator.migrate(&args.pattern)?;
    let options = migrator.options();
    print!("{}", reporter.render(&result, options.verbose, options.dry_run));
    Ok(())
}
