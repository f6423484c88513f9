//! Entry point for `uucp` (§6): queue a file for transfer to or from a
//! remote system.

use std::process::ExitCode;

use clap::Parser;
use cli::{classify, resolve_user, UucpArgs};
use spool_core::{submit_copy, CopyRequest, SubmissionContext, SystemTable};

fn main() -> ExitCode {
    let args = UucpArgs::parse();

    let config = match SystemTable::load(&args.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("uucp: {err}");
            return ExitCode::FAILURE;
        }
    };

    let ctx = SubmissionContext::new(config, "uucp");
    if args.debug > 0 {
        ctx.log.install_tracing();
    }

    let classified = match classify(&args.source, &args.dest) {
        Ok(classified) => classified,
        Err(err) => {
            eprintln!("uucp: {err}");
            return ExitCode::FAILURE;
        }
    };

    let request = CopyRequest {
        user: resolve_user(args.user.as_deref()),
        peer: classified.peer,
        local_token: classified.local_token,
        remote_token: classified.remote_token,
        direction: classified.direction,
        grade: args.grade,
        force_copy: args.copy,
        notify: args.notify,
    };

    match submit_copy(&ctx, request) {
        Ok(job) => {
            if args.jobid {
                println!("{job}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("uucp: {err}");
            ExitCode::FAILURE
        }
    }
}
