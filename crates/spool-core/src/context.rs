use std::path::PathBuf;

use spool_lock::LockManager;
use spool_log::{Header, LogSink, SinkPaths};
use spool_naming::SpoolNamer;
use spool_paths::{RealUserDirs, UserDirs};

use crate::config::SystemTable;
use crate::error::SubmitError;

/// Everything a submission pipeline needs, gathered once per process
/// invocation (§9's design note: a single owning value in place of the
/// original's scattered process-global state).
pub struct SubmissionContext {
    pub config: SystemTable,
    pub namer: SpoolNamer,
    pub locks: LockManager,
    pub log: LogSink,
    pub users: Box<dyn UserDirs + Send + Sync>,
    pub pid: u32,
}

impl SubmissionContext {
    /// Builds a context from a loaded [`SystemTable`], using the real
    /// account database for `~user` lookups and this process's own pid.
    #[must_use]
    pub fn new(config: SystemTable, program: &str) -> Self {
        let locks = LockManager::new(config.site.lock_dir.clone());
        let log_format: spool_log::LogFormat = config.site.log_format.into();
        let event_log = if log_format == spool_log::LogFormat::Hdb {
            config.site.spool_root.join(".Log").join(program).join("{peer}")
        } else {
            config.site.spool_root.join(".Log").join(program)
        };
        let paths = SinkPaths {
            event_log,
            stats_log: config.site.spool_root.join(".Log").join("Stats"),
            debug_log: None,
        };
        Self {
            config,
            namer: SpoolNamer::new(),
            locks,
            log: LogSink::new(log_format, paths, program),
            users: Box::new(RealUserDirs),
            pid: std::process::id(),
        }
    }

    /// Ensures `dir` exists, surfacing any I/O failure as
    /// [`SubmitError::IoFail`].
    pub(crate) fn ensure_dir(&self, dir: &std::path::Path) -> Result<(), SubmitError> {
        std::fs::create_dir_all(dir).map_err(|source| SubmitError::IoFail {
            path: dir.to_path_buf(),
            source,
        })
    }

    /// Logs a queued-job event at `Normal` severity, swallowing (but
    /// tracing) a logging failure rather than unwinding the whole
    /// submission: the job itself already landed on disk by the time this
    /// is called.
    pub(crate) fn log_queued(&self, system: &str, user: &str, message: String) {
        if let Err(err) = self.log.log(Header::Normal, system, user, message, 0, 0) {
            tracing::warn!(?err, "failed to append event log entry");
        }
    }

    pub(crate) fn mint_temp(&self, dir: &std::path::Path) -> Result<PathBuf, SubmitError> {
        self.namer.mint_temp(dir, self.pid).map_err(SubmitError::from)
    }
}
