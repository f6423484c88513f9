use std::path::PathBuf;
use std::sync::Arc;

/// An acquired lock. Releases the underlying lock file when dropped.
pub struct LockGuard {
    pub(crate) path: PathBuf,
    pub(crate) released: bool,
    pub(crate) on_drop: Arc<dyn Fn(&std::path::Path) + Send + Sync>,
}

impl std::fmt::Debug for LockGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockGuard")
            .field("path", &self.path)
            .field("released", &self.released)
            .finish_non_exhaustive()
    }
}

impl LockGuard {
    /// The path of the lock file this guard holds.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Releases the lock early, rather than waiting for `Drop`.
    pub fn release(mut self) {
        self.do_release();
    }

    fn do_release(&mut self) {
        if !self.released {
            (self.on_drop)(&self.path);
            self.released = true;
        }
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        self.do_release();
    }
}
