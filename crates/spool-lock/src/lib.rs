#![deny(unsafe_code)]

//! # Overview
//!
//! The lock manager (component C, §4.C): advisory, file-backed mutual
//! exclusion for peer systems, command-class executors, individual execute
//! files, and the shared execute working directory.
//!
//! # Design
//!
//! Every lock is a file under a well-known lock directory; its presence is
//! the lock, and its contents are an opaque diagnostic (the holder's PID).
//! [`LockManager::acquire`] returns a [`LockGuard`] whose `Drop`
//! implementation releases the lock, matching the "`Acquire -> Guard`"
//! strategy called for in §9. A lock file left behind by a dead process is
//! detected by checking liveness of the recorded PID (`kill(pid, 0)`) and
//! broken automatically before a fresh acquire is retried — but only after
//! that check, never unconditionally, so a live holder is never evicted.
//!
//! # Errors
//!
//! I/O failures while creating, reading, or removing a lock file surface as
//! [`LockError::Io`]; [`LockManager::acquire`] returns `Ok(None)` (not an
//! error) when the lock is legitimately held by another live process,
//! matching §7's `LockBusy` classification as non-fatal.

mod guard;
mod manager;
mod names;

pub use guard::LockGuard;
pub use manager::LockManager;
pub use names::{command_lock_name, execute_dir_lock_name, execute_file_lock_name, peer_lock_name};

/// Errors raised while manipulating lock files.
#[derive(Debug, thiserror::Error)]
pub enum LockError {
    /// An I/O error occurred while creating, reading, or removing a lock
    /// file.
    #[error("lock I/O error on {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
