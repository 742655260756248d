//! Command-line arguments for the payroll binaries.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::models::Payroll;
use crate::report::{PayrollSummary, render_text};

/// Output format for the payroll report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One "The amount to pay ..." line per employee (default)
    Text,
    /// JSON summary with per-shift outcomes
    Json,
}

/// Arguments of the `payroll` binary.
#[derive(Parser, Debug)]
#[command(name = "payroll")]
#[command(version)]
#[command(about = "Compute weekly pay from a timesheet file", long_about = None)]
pub struct Cli {
    /// Timesheet file, one NAME=DDHH:MM-HH:MM,... record per line
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// YAML wage table to use instead of the built-in rates
    #[arg(long = "rates", value_name = "YAML")]
    pub rates: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log progress and skipped shifts to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments of the `payroll-server` binary.
#[derive(Parser, Debug)]
#[command(name = "payroll-server")]
#[command(version)]
#[command(about = "Serve the payroll engine over HTTP", long_about = None)]
pub struct ServerCli {
    /// Address to listen on
    #[arg(long = "bind", value_name = "ADDR", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// YAML wage table to use instead of the built-in rates
    #[arg(long = "rates", value_name = "YAML")]
    pub rates: Option<PathBuf>,

    /// Log every request at info level
    #[arg(short, long)]
    pub verbose: bool,
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `warn`, or `info` when
/// `verbose` is on.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Renders a computed payroll in the requested format.
///
/// # Errors
///
/// Fails only if the JSON summary cannot be serialized.
pub fn render(payroll: &Payroll, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(payroll)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&PayrollSummary::from(payroll))?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::run_payroll;
    use crate::config::WageTable;

    #[test]
    fn test_parse_minimal_args() {
        let cli = Cli::try_parse_from(["payroll", "timesheet.txt"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("timesheet.txt"));
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.rates.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_all_args() {
        let cli = Cli::try_parse_from([
            "payroll",
            "timesheet.txt",
            "--rates",
            "rates.yaml",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.rates, Some(PathBuf::from("rates.yaml")));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_file_argument_is_required() {
        assert!(Cli::try_parse_from(["payroll"]).is_err());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["payroll", "a.txt", "--format", "csv"]).is_err());
    }

    #[test]
    fn test_server_defaults() {
        let cli = ServerCli::try_parse_from(["payroll-server"]).unwrap();
        assert_eq!(cli.bind, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert!(cli.rates.is_none());
    }

    #[test]
    fn test_server_rejects_bad_address() {
        assert!(ServerCli::try_parse_from(["payroll-server", "--bind", "nowhere"]).is_err());
    }

    #[test]
    fn test_render_formats() {
        let payroll = run_payroll(&WageTable::default(), ["KIM=MO10:00-12:00"]).unwrap();

        assert_eq!(
            render(&payroll, OutputFormat::Text).unwrap(),
            "The amount to pay KIM is: 30.00 USD\n"
        );

        let json = render(&payroll, OutputFormat::Json).unwrap();
        let summary: PayrollSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary.employees[0].name, "KIM");
        assert_eq!(summary.employees[0].amount, "30.00");
    }
}
