// Commands module

pub mod payload;
pub mod run;
pub mod validate;

pub use payload::execute_payload;
pub use run::execute_run;
pub use validate::execute_validate;

use anyhow::{Context, Result};
use garde::Validate;
use std::path::Path;

use shift_probe::cfg::load_document;
use shift_probe::SchedulingConfig;

/// Load and validate a request document
pub fn load_request(path: &Path) -> Result<SchedulingConfig> {
    let request: SchedulingConfig = load_document(path)?;
    request
        .validate()
        .with_context(|| format!("Invalid request document: {}", path.display()))?;
    Ok(request)
}
