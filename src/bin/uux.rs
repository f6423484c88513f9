//! Entry point for `uux` (§6): queue a remote command execution.

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use cli::{resolve_user, split_host_bang, UuxArgs};
use spool_core::{submit_exec, ExecRequest, SubmissionContext, SystemTable};

fn main() -> ExitCode {
    let args = UuxArgs::parse();

    let config = match SystemTable::load(&args.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("uux: {err}");
            return ExitCode::FAILURE;
        }
    };

    let ctx = SubmissionContext::new(config, "uux");
    if args.debug > 0 {
        ctx.log.install_tracing();
    }

    let command_token = split_host_bang(&args.command);
    let Some(peer) = command_token.host else {
        eprintln!("uux: {:?} does not name a host (expected host!command)", args.command);
        return ExitCode::FAILURE;
    };

    let stdin_data = if args.args.iter().any(|a| a == "-") {
        let mut buf = Vec::new();
        if let Err(err) = std::io::stdin().read_to_end(&mut buf) {
            eprintln!("uux: reading standard input: {err}");
            return ExitCode::FAILURE;
        }
        Some(buf)
    } else {
        None
    };

    let request = ExecRequest {
        user: resolve_user(args.user.as_deref()),
        peer,
        cmd: command_token.path,
        args: args.args,
        grade: args.grade,
        no_ack: args.no_ack,
        error_ack: args.error_ack,
        notify: args.notify,
        status_file: args.status_file,
        stdin_return: args.stdin_return,
        stdin_data,
    };

    match submit_exec(&ctx, request) {
        Ok(job) => {
            if args.jobid {
                println!("{job}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("uux: {err}");
            ExitCode::FAILURE
        }
    }
}
