use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, error};

use crate::event::EventRecord;
use crate::format::LogFormat;
use crate::header::Header;
use crate::stats::StatsRecord;
use crate::timestamp::LogTimestamp;
use crate::{fatal, LogError};

/// Where this sink's three outputs live.
///
/// Under [`LogFormat::Hdb`], `event_log` is a *template* containing the
/// literal substring `{peer}` (e.g. `.Log/uucico/{peer}`, matching the
/// original's per-peer log files); every other format treats it as a
/// fixed path.
#[derive(Debug, Clone)]
pub struct SinkPaths {
    pub event_log: PathBuf,
    pub stats_log: PathBuf,
    pub debug_log: Option<PathBuf>,
}

impl SinkPaths {
    fn event_log_for(&self, format: LogFormat, peer: &str) -> PathBuf {
        if format == LogFormat::Hdb {
            let templated = self.event_log.to_string_lossy().replace("{peer}", peer);
            PathBuf::from(templated)
        } else {
            self.event_log.clone()
        }
    }
}

/// The single owning value that replaces the original's scattered global
/// log/statistics/debug file handles and current-user/system/device state
/// (§9's design note). Lazily opens each file on first use and, under
/// `hdb`, closes and reopens the event log whenever the current peer
/// changes.
pub struct LogSink {
    format: LogFormat,
    paths: SinkPaths,
    program: String,
    current_peer: Mutex<Option<String>>,
    event_file: Mutex<Option<File>>,
    stats_file: Mutex<Option<File>>,
    debug_file: Mutex<Option<File>>,
}

impl LogSink {
    /// Creates a sink. No file is opened until the first event is logged.
    #[must_use]
    pub fn new(format: LogFormat, paths: SinkPaths, program: impl Into<String>) -> Self {
        Self {
            format,
            paths,
            program: program.into(),
            current_peer: Mutex::new(None),
            event_file: Mutex::new(None),
            stats_file: Mutex::new(None),
            debug_file: Mutex::new(None),
        }
    }

    /// Installs a `tracing` subscriber so events also reach stderr/whatever
    /// the process's `-x` debug level selects. Call once per process; a
    /// second call is a harmless no-op (the underlying `tracing` global
    /// dispatcher can only be set once).
    pub fn install_tracing(&self) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    /// Logs one event under `system`/`user`, at `header` severity.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Io`] if the event log file cannot be opened or
    /// written.
    #[allow(clippy::too_many_arguments)]
    pub fn log(
        &self,
        header: Header,
        system: &str,
        user: &str,
        message: impl Into<String>,
        id: u32,
        sequence: u32,
    ) -> Result<(), LogError> {
        let message = message.into();
        let record = EventRecord {
            program: self.program.clone(),
            system: system.to_string(),
            user: user.to_string(),
            timestamp: LogTimestamp::now(),
            id,
            sequence,
            header,
            message: message.clone(),
        };
        let line = record.render(self.format);

        match header {
            Header::Error => error!(system, user, "{message}"),
            Header::Debug => debug!(system, user, "{message}"),
            _ => tracing::info!(system, user, "{message}"),
        }

        self.reopen_if_peer_changed(system)?;
        self.write_line(&self.event_file, &self.paths.event_log_for(self.format, system), &line)?;
        if self.paths.debug_log.is_some() {
            let debug_path = self.paths.debug_log.clone().unwrap();
            self.write_line(&self.debug_file, &debug_path, &line)?;
        }
        Ok(())
    }

    /// Logs a `FATAL:` event, flushes every open file, marks the aborting
    /// flag, and terminates the process. Never returns.
    pub fn fatal(&self, system: &str, user: &str, message: impl Into<String>) -> ! {
        let _ = self.log(Header::Fatal, system, user, message, 0, 0);
        self.flush();
        fatal::aborting();
        std::process::abort();
    }

    /// Appends one statistics line, if this format reports this outcome.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Io`] if the statistics file cannot be opened or
    /// written.
    pub fn stats(&self, record: &StatsRecord) -> Result<(), LogError> {
        let Some(line) = record.render(self.format) else {
            return Ok(());
        };
        self.write_line(&self.stats_file, &self.paths.stats_log, &line)
    }

    /// Flushes every open file handle.
    pub fn flush(&self) {
        for lock in [&self.event_file, &self.stats_file, &self.debug_file] {
            if let Ok(mut guard) = lock.lock() {
                if let Some(file) = guard.as_mut() {
                    let _ = file.flush();
                }
            }
        }
    }

    fn reopen_if_peer_changed(&self, system: &str) -> Result<(), LogError> {
        if self.format != LogFormat::Hdb {
            return Ok(());
        }
        let mut current = self
            .current_peer
            .lock()
            .expect("current peer lock poisoned");
        if current.as_deref() != Some(system) {
            *self.event_file.lock().expect("event file lock poisoned") = None;
            *current = Some(system.to_string());
        }
        Ok(())
    }

    fn write_line(
        &self,
        slot: &Mutex<Option<File>>,
        path: &Path,
        line: &str,
    ) -> Result<(), LogError> {
        let mut guard = slot.lock().expect("log file lock poisoned");
        if guard.is_none() {
            *guard = Some(open_append(path)?);
        }
        let file = guard.as_mut().expect("just opened");
        writeln!(file, "{line}").map_err(|source| LogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        file.flush().map_err(|source| LogError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn open_append(path: &Path) -> Result<File, LogError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| LogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{Direction, StatsRecord};

    fn paths(dir: &Path) -> SinkPaths {
        SinkPaths {
            event_log: dir.join("Log"),
            stats_log: dir.join("Stats"),
            debug_log: None,
        }
    }

    #[test]
    fn logging_appends_a_rendered_line() {
        let dir = tempfile::tempdir().unwrap();
        let sink = LogSink::new(LogFormat::Taylor, paths(dir.path()), "uucico");
        sink.log(Header::Normal, "hosta", "u", "hello", 0, 0).unwrap();

        let contents = fs::read_to_string(dir.path().join("Log")).unwrap();
        assert!(contents.contains("uucico hosta u"));
        assert!(contents.contains("hello"));
    }

    #[test]
    fn hdb_format_reopens_the_log_on_peer_change() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = paths(dir.path());
        p.event_log = dir.path().join(".Log/uucico/{peer}");
        let sink = LogSink::new(LogFormat::Hdb, p, "uucico");

        sink.log(Header::Normal, "hosta", "u", "one", 0, 0).unwrap();
        sink.log(Header::Normal, "hostb", "u", "two", 0, 0).unwrap();

        assert!(dir.path().join(".Log/uucico/hosta").exists());
        assert!(dir.path().join(".Log/uucico/hostb").exists());
    }

    #[test]
    fn stats_appends_only_when_the_format_reports_the_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let sink = LogSink::new(LogFormat::Hdb, paths(dir.path()), "uucico");
        let mut record = StatsRecord {
            user: "u".to_string(),
            system: "hosta".to_string(),
            timestamp: LogTimestamp::from_components(1992, 1, 1, 0, 0, 0, 0),
            direction: Direction::Sent,
            success: false,
            bytes: 10,
            seconds: 1,
            micros: 0,
            id: 1,
            sequence: 0,
            device: None,
        };
        sink.stats(&record).unwrap();
        assert!(!dir.path().join("Stats").exists());

        record.success = true;
        sink.stats(&record).unwrap();
        assert!(dir.path().join("Stats").exists());
    }
}
