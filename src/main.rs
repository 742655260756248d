use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use weekly_payroll::calculation::run_payroll;
use weekly_payroll::cli::{Cli, init_tracing, render};
use weekly_payroll::config::ConfigLoader;
use weekly_payroll::input::read_input_file;

fn run(cli: &Cli) -> Result<String> {
    let loader = ConfigLoader::load_or_default(cli.rates.as_ref())
        .context("could not load wage table")?;
    let lines = read_input_file(&cli.file)?;
    let payroll = run_payroll(loader.table(), &lines)?;
    let output = render(&payroll, cli.format).context("could not render payroll")?;
    Ok(output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
