// Validate command implementation

use anyhow::Result;

use super::load_request;
use crate::cli::ValidateArgs;

/// Execute the validate command
pub fn execute_validate(args: &ValidateArgs) -> Result<()> {
    let request = load_request(&args.request)?;

    println!(
        "✅ {} is a valid scheduling request ({} employees, {} shift types, {} to {})",
        args.request.display(),
        request.employees.len(),
        request.shift_types.len(),
        request.scheduling_period.start_date.format("%Y-%m-%d"),
        request.scheduling_period.end_date.format("%Y-%m-%d"),
    );
    Ok(())
}
