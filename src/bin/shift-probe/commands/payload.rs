// Payload command implementation

use anyhow::Result;

use super::load_request;
use crate::cli::PayloadArgs;
use shift_probe::fixture::debug_request;

/// Execute the payload command
pub fn execute_payload(args: &PayloadArgs) -> Result<()> {
    let json = match &args.request {
        Some(path) => serde_json::to_string_pretty(&load_request(path)?)?,
        None => serde_json::to_string_pretty(debug_request())?,
    };

    println!("{}", json);
    Ok(())
}
