use std::path::PathBuf;

/// The composed error taxonomy for job submission (§7): every failure a
/// caller of [`crate::submit_copy`] or [`crate::submit_exec`] can observe,
/// whether it originates in this crate or one of the component crates it
/// orchestrates.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The site configuration or host table is malformed.
    #[error("invalid configuration: {detail}")]
    ConfigInvalid { detail: String },

    /// The named peer is absent from the host table and
    /// `unknown_hosts_ok` is false.
    #[error("unknown host {0:?}")]
    UnknownHost(String),

    /// A `~user` token named an account with no known home directory.
    #[error(transparent)]
    UnknownUser(#[from] spool_paths::PathError),

    /// The requested peer or command-class lock is already held by
    /// another live process; not fatal, the caller may retry later.
    #[error("lock {0:?} is busy")]
    LockBusy(String),

    /// A spool name could not be minted.
    #[error(transparent)]
    Naming(#[from] spool_naming::NamingError),

    /// A lock file could not be created, read, or removed.
    #[error(transparent)]
    Lock(#[from] spool_lock::LockError),

    /// Writing a command, data, or execute file failed.
    #[error(transparent)]
    Format(#[from] spool_format::FormatError),

    /// Appending to an event or statistics log failed.
    #[error(transparent)]
    Log(#[from] spool_log::LogError),

    /// A generic I/O failure not already covered by a more specific
    /// variant (e.g. reading a local file to stage it for transfer).
    #[error("I/O error on {path}: {source}")]
    IoFail {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Staging a file required a copy across filesystems that the
    /// submission pipeline does not attempt (§3 Non-goals: no rename
    /// fallback across devices beyond the temp-then-rename within one
    /// spool directory).
    #[error("{path} and the spool directory are on different filesystems")]
    CrossFilesystem { path: PathBuf },

    /// An invariant the design treats as unrecoverable was violated;
    /// logged at `FATAL:` severity and the process aborts rather than
    /// returning this to a caller that could act on it (§7 `FatalAssert`).
    #[error("fatal assertion failed: {0}")]
    FatalAssert(String),
}
