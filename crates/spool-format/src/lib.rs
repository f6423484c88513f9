#![deny(unsafe_code)]

//! # Overview
//!
//! The on-disk record formats this repository's entire contract rests on
//! (§6): command-file records (`S`/`R`/`X`/`E`) and execute-file records
//! (`U`/`F`/`I`/`O`/`C`/`R`/`N`/`Z`/`B`/`M`), plus the one reusable
//! temp-then-rename abstraction (§9) every writer in the core builds on.
//!
//! # Design
//!
//! [`scoped::ScopedWriter`] owns a temp path, accepts writes, and either
//! `commit`s (fsync then rename into place) or `abort`s (remove the temp
//! file); both consume `self` so a writer cannot be used after either
//! outcome, and `Drop` removes an un-committed temp file on every other
//! exit path (early return, `?`, panic). [`command_file::CommandFile`] and
//! [`execute_file::ExecuteFile`] are pure, I/O-free record builders: they
//! only decide what bytes to render. The orchestration layer
//! (`spool-core`) decides *which* records a job needs and hands the
//! rendered bytes to [`scoped::ScopedWriter`] in the data → execute →
//! command commit order §4.E requires.
//!
//! # Errors
//!
//! [`FormatError`] wraps the I/O failures this crate's writer can raise;
//! record construction itself is infallible because every field it
//! accepts is already a plain string supplied by the resolver/namer, which
//! guarantee no embedded whitespace.

mod args;
mod command_file;
mod execute_file;
mod scoped;

pub use args::{tokenize_exec_args, ExecArg};
pub use command_file::{CommandFile, CommandRecord, ExecuteRequest, Receive, Send};
pub use execute_file::{ExecuteFile, FileSpec, OutputTarget};
pub use scoped::ScopedWriter;

/// Errors raised while writing spool-format files to disk.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Creating, writing, fsyncing, or renaming a spool file failed.
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Encodes a field for the command-file grammar (§6): a semantically
/// empty field is written as the literal `""`, never omitted.
#[must_use]
pub fn encode_field(value: &str) -> std::borrow::Cow<'_, str> {
    if value.is_empty() {
        std::borrow::Cow::Borrowed("\"\"")
    } else {
        std::borrow::Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests;
