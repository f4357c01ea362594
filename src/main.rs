use std::process::ExitCode;

use clap::Parser;
use stat_analyzer::app;
use stat_analyzer::cli::CliArgs;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Logs go to stderr; stdout carries only the report.
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    match app::run(&args, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
