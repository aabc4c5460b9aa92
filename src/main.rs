//! goup - update dependencies for all Go projects at once

use clap::Parser;
use goup::cli::CliArgs;
use goup::output::{create_formatter, OutputConfig};
use goup::toolchain::SystemGo;
use goup::{logging, updater};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init(args.debug);

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let config = args.to_run_config();
    let toolchain = SystemGo::new(&config.go_binary);

    let summary = updater::run(&config, &toolchain)?;

    let formatter = create_formatter(OutputConfig::from_cli(args.json, args.verbose, args.quiet));
    let mut stdout = io::stdout().lock();
    formatter.format(&summary, &mut stdout)?;
    stdout.flush()?;

    // Project failures are reported but only traversal failures change the exit code
    if summary.has_root_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
