//! Validate file contents against recorded digests

use crate::error::Result;
use bootstrap_fs::NormalizedPath;
use bootstrap_validate::ValidationRun;

/// Run the checks document and print the failure report, if any.
///
/// Failing checks are a report for the user, not an error; the exit
/// status only reflects whether the run itself could be carried out.
pub fn run_validate(yaml: &str) -> Result<()> {
    let run = ValidationRun::from_file(&NormalizedPath::new(yaml))?;
    let report = run.failure_report()?;
    if !report.is_empty() {
        println!("{report}");
    }
    Ok(())
}
