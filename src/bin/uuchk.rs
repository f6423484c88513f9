//! Entry point for `uuchk` (§4.G): validate the site configuration and
//! host table, grounded on the original `uuchk.c` checker.

use std::process::ExitCode;

use clap::Parser;
use cli::UuchkArgs;
use spool_core::{check, Severity, SubmissionContext, SystemTable};

fn main() -> ExitCode {
    let args = UuchkArgs::parse();

    let config = match SystemTable::load(&args.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("uuchk: {err}");
            return ExitCode::FAILURE;
        }
    };

    let ctx = SubmissionContext::new(config, "uuchk");
    let report = check(&ctx);

    for finding in &report.findings {
        let label = match finding.severity {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        println!("{label}: {}: {}", finding.subject, finding.message);
    }

    if report.is_healthy() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
