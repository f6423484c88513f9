use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::guard::LockGuard;
use crate::LockError;

/// Manages advisory lock files under a single lock directory.
#[derive(Debug, Clone)]
pub struct LockManager {
    lock_dir: PathBuf,
}

impl LockManager {
    /// Creates a manager rooted at `lock_dir`. The directory is not
    /// created here; callers are expected to provision it as part of spool
    /// setup.
    #[must_use]
    pub fn new(lock_dir: impl Into<PathBuf>) -> Self {
        Self {
            lock_dir: lock_dir.into(),
        }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.lock_dir.join(name)
    }

    /// Attempts to acquire `name`. Returns `Ok(Some(guard))` on success,
    /// `Ok(None)` if another live process holds it (§7 `LockBusy`, not an
    /// error), and `Err` only for unexpected I/O failures.
    ///
    /// A lock file whose recorded PID no longer corresponds to a live
    /// process is treated as stale: it is removed and acquisition is
    /// retried once, never evicting a lock whose holder is confirmed
    /// alive.
    ///
    /// # Errors
    ///
    /// Returns [`LockError::Io`] for I/O failures other than the lock
    /// already existing.
    pub fn acquire(&self, name: &str) -> Result<Option<LockGuard>, LockError> {
        let path = self.path_for(name);
        match self.try_create(&path, std::process::id()) {
            Ok(true) => {
                debug!(lock = name, "acquired");
                return Ok(Some(self.guard_for(path)));
            }
            Ok(false) => {}
            Err(source) => return Err(LockError::Io { path, source }),
        }

        if self.break_if_stale(&path)? {
            match self.try_create(&path, std::process::id()) {
                Ok(true) => {
                    info!(lock = name, "broke stale lock and acquired");
                    return Ok(Some(self.guard_for(path)));
                }
                Ok(false) => return Ok(None),
                Err(source) => return Err(LockError::Io { path, source }),
            }
        }

        Ok(None)
    }

    /// Reports whether `name` is currently held, without attempting to
    /// acquire or break it.
    ///
    /// # Errors
    ///
    /// Returns [`LockError::Io`] if the lock file exists but cannot be
    /// read for a reason other than it disappearing concurrently.
    pub fn is_locked(&self, name: &str) -> Result<bool, LockError> {
        let path = self.path_for(name);
        match fs::metadata(&path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(LockError::Io { path, source }),
        }
    }

    /// Unconditionally releases `name`, regardless of who holds it. Used
    /// by executors recovering from an abnormal exit; ordinary callers
    /// should prefer dropping the [`LockGuard`] returned by
    /// [`Self::acquire`].
    ///
    /// # Errors
    ///
    /// Returns [`LockError::Io`] for I/O failures other than the lock
    /// already being absent.
    pub fn release(&self, name: &str) -> Result<bool, LockError> {
        let path = self.path_for(name);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(LockError::Io { path, source }),
        }
    }

    fn try_create(&self, path: &Path, pid: u32) -> io::Result<bool> {
        match OpenOptions::new().create_new(true).write(true).open(path) {
            Ok(mut file) => {
                write!(file, "{pid}\n")?;
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn break_if_stale(&self, path: &Path) -> Result<bool, LockError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(source) => {
                return Err(LockError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let Ok(pid) = contents.trim().parse::<i32>() else {
            return Ok(false);
        };

        if process_is_alive(pid) {
            return Ok(false);
        }

        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
            Err(source) => Err(LockError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn guard_for(&self, path: PathBuf) -> LockGuard {
        LockGuard {
            path,
            released: false,
            on_drop: Arc::new(|path| {
                let _ = fs::remove_file(path);
            }),
        }
    }
}

#[cfg(unix)]
#[allow(unsafe_code)]
fn process_is_alive(pid: i32) -> bool {
    // SAFETY: signal 0 performs no action beyond existence/permission
    // checking; `pid` is only ever a value we ourselves wrote into a lock
    // file.
    let rc = unsafe { libc::kill(pid, 0) };
    if rc == 0 {
        return true;
    }
    // ESRCH: no such process, the lock is stale. Any other errno
    // (typically EPERM, meaning the process exists but we may not signal
    // it) is treated as "alive" so a live holder is never evicted.
    io::Error::last_os_error().raw_os_error() != Some(libc::ESRCH)
}

#[cfg(not(unix))]
fn process_is_alive(_pid: i32) -> bool {
    // Conservative: without a portable liveness check, never treat a lock
    // as stale.
    true
}
