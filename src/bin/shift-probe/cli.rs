// CLI argument definitions using clap

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use shift_probe::cfg::{parse_duration, ProbeConfig};
use shift_probe::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "shift-probe")]
#[command(author = "hatlonely <hatlonely@foxmail.com>")]
#[command(version = "0.1.0")]
#[command(about = "Debug client for the shift scheduling service", long_about = None)]
pub struct Cli {
    /// Path to config file (default: ~/.shift-probe/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Defaults to `run` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send the scheduling request and print a debug report
    Run(RunArgs),
    /// Print the request document without sending it
    Payload(PayloadArgs),
    /// Validate a request document
    Validate(ValidateArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Scheduling endpoint (default: http://localhost:8000/schedule)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Request document (.json, .json5, .yaml, .toml); built-in debug request when omitted
    #[arg(short, long)]
    pub request: Option<PathBuf>,

    /// Request timeout such as 30s or 2m (default: wait indefinitely)
    #[arg(short, long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Also export generated shifts as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Skip the per-shift "Assigned names" line
    #[arg(long)]
    pub no_names: bool,

    /// Exit with a non-zero status when the request fails
    #[arg(long)]
    pub strict: bool,
}

impl RunArgs {
    /// Command-line flags take precedence over the config file
    pub fn apply(&self, config: &mut ProbeConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(request) = &self.request {
            config.request = Some(request.clone());
        }
        if let Some(timeout) = self.timeout {
            config.timeout = Some(timeout);
        }
        if let Some(format) = self.format {
            config.format = format.into();
        }
        if let Some(csv) = &self.csv {
            config.csv = Some(csv.clone());
        }
        if self.no_names {
            config.roster_names = false;
        }
        if self.strict {
            config.strict = true;
        }
    }
}

#[derive(Args, Debug)]
pub struct PayloadArgs {
    /// Request document to print; built-in debug request when omitted
    #[arg(short, long)]
    pub request: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Request document to validate
    pub request: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_defaults_to_run() {
        let cli = Cli::try_parse_from(["shift-probe"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_run_args_override_config() {
        let cli = Cli::try_parse_from([
            "shift-probe",
            "run",
            "--endpoint",
            "http://127.0.0.1:9000/schedule",
            "--timeout",
            "1m30s",
            "--format",
            "json",
            "--no-names",
            "--strict",
        ])
        .unwrap();

        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run command");
        };

        let mut config = ProbeConfig::default();
        args.apply(&mut config);
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/schedule");
        assert_eq!(config.timeout, Some(Duration::from_secs(90)));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.roster_names);
        assert!(config.strict);
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        assert!(Cli::try_parse_from(["shift-probe", "run", "--timeout", "soon"]).is_err());
    }
}
