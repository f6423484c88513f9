#![deny(unsafe_code)]

//! # Overview
//!
//! The log and stats sink (component F, §4.F): append-only event logging
//! in one of three on-disk formats, plus a per-transfer statistics record
//! with the bytes/seconds/rate arithmetic from §8 property 7.
//!
//! # Design
//!
//! [`format::LogFormat`] selects the dialect; [`event::EventRecord`] and
//! [`stats::StatsRecord`] are pure renderers, kept free of any file I/O so
//! their byte-exact output (§8 property 8) can be asserted directly in
//! tests. [`sink::LogSink`] is the single owning value the design note in
//! §9 calls for in place of the original's scattered global file handles:
//! it lazily opens the event, debug, and statistics files, and — under the
//! `hdb` format — closes and reopens the event log whenever the current
//! peer system changes, since that format templates the log path with the
//! peer's name. A `tracing` subscriber is the ambient diagnostic channel
//! alongside these durable on-disk formats; [`sink::LogSink::install_tracing`]
//! wires the two together so every event also gets a `tracing::event!`.
//!
//! # Errors
//!
//! File I/O failures surface as [`LogError::Io`]. A `LOG_FATAL` event
//! never returns an error to its caller: [`sink::LogSink::fatal`] logs,
//! flushes, sets the aborting flag ([`aborting`]), and calls
//! [`std::process::abort`] directly, matching §7's `FatalAssert` handling.

mod event;
mod fatal;
mod format;
mod header;
mod sink;
mod stats;
mod timestamp;

pub use event::EventRecord;
pub use fatal::{aborting, is_aborting};
pub use format::LogFormat;
pub use header::Header;
pub use sink::{LogSink, SinkPaths};
pub use stats::{compute_rate, Direction, StatsRecord};
pub use timestamp::LogTimestamp;

/// Errors raised while opening or writing log/statistics files.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// An I/O error occurred opening or writing a log/statistics file.
    #[error("log I/O error on {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}
