#![deny(unsafe_code)]

//! # Overview
//!
//! The orchestration layer: loads the site configuration and host table
//! (§4.G), and drives the `spool-paths` → `spool-naming` → `spool-format`
//! → `spool-lock` → `spool-log` pipeline that turns a `uucp`/`uux`
//! invocation into spool files on disk (§4.D, §4.E).
//!
//! # Design
//!
//! [`SubmissionContext`] is the single value a process builds once and
//! threads through every submission — the config, the namer, the lock
//! manager, and the log sink, matching the "one owning value" design note
//! in §9. [`submit_copy`] and [`submit_exec`] are the two entry points the
//! `uucp` and `uux` binaries call; both commit files in the order §4.E
//! requires (data, then execute, then command) so a crash between any two
//! steps leaves only files with no command file referencing them yet —
//! never a command file pointing at something that was never written.
//!
//! # Errors
//!
//! [`SubmitError`] composes every per-crate error this layer can surface,
//! per the taxonomy in §7.

mod config;
mod context;
mod copy;
mod doctor;
mod error;
mod exec;
mod grade;
mod job;
mod stage;

pub use config::{ConfigLogFormat, Host, HostConfig, SiteConfig, SystemTable};
pub use context::SubmissionContext;
pub use copy::{submit_copy, CopyDirection, CopyRequest};
pub use doctor::{check, DoctorFinding, DoctorReport, Severity};
pub use error::SubmitError;
pub use exec::{submit_exec, ExecRequest};
pub use grade::resolve_grade;
pub use job::JobId;

#[cfg(test)]
mod tests;
