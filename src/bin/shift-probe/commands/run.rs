// Run command implementation

use anyhow::Result;
use std::io;
use std::process::ExitCode;

use super::load_request;
use crate::cli::RunArgs;
use shift_probe::fixture::debug_request;
use shift_probe::{run_debug, ProbeConfig, ScheduleClient};

/// Execute the run command
///
/// Request failures are reported on stdout; the exit status only changes in strict mode.
pub fn execute_run(args: &RunArgs, mut config: ProbeConfig) -> Result<ExitCode> {
    args.apply(&mut config);

    let loaded;
    let request = match &config.request {
        Some(path) => {
            loaded = load_request(path)?;
            &loaded
        }
        None => debug_request(),
    };

    tracing::info!(
        endpoint = %config.endpoint,
        employees = request.employees.len(),
        shift_types = request.shift_types.len(),
        "running schedule probe"
    );

    let client = ScheduleClient::new(config.client_config())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_debug(&client, request, &config.probe_options(), &mut out) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) if config.strict => {
            tracing::debug!(error = %err, "probe failed in strict mode");
            Ok(ExitCode::FAILURE)
        }
        Err(_) => Ok(ExitCode::SUCCESS),
    }
}
