use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::FormatError;

/// Owns a temp path through its whole write-then-publish lifecycle.
///
/// Matches the design note in §9: "one reusable scoped writer abstraction
/// that owns a temp path, offers `commit(final_path)` and `abort()`, and
/// releases the temp on all exit paths." Every spool artifact writer in
/// this repository (command files, execute files, promoted data files)
/// goes through this type rather than hand-rolling its own
/// temp-then-rename sequence.
pub struct ScopedWriter {
    temp_path: PathBuf,
    file: Option<File>,
    finished: bool,
}

impl ScopedWriter {
    /// Creates `temp_path` for writing. The path must not already exist.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Io`] if the temp file cannot be created.
    pub fn create(temp_path: impl Into<PathBuf>) -> Result<Self, FormatError> {
        let temp_path = temp_path.into();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|source| FormatError::Io {
                path: temp_path.clone(),
                source,
            })?;
        Ok(Self {
            temp_path,
            file: Some(file),
            finished: false,
        })
    }

    /// Writes the full contents of a record file in one call.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Io`] if the write fails.
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<(), FormatError> {
        self.file
            .as_mut()
            .expect("ScopedWriter used after commit/abort")
            .write_all(bytes)
            .map_err(|source| FormatError::Io {
                path: self.temp_path.clone(),
                source,
            })
    }

    /// Fsyncs the temp file and renames it onto `final_path`, publishing
    /// it atomically. Consumes `self` so the writer cannot be reused.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Io`] if the fsync or rename fails; the temp
    /// file is left in place in that case for diagnosis.
    pub fn commit(mut self, final_path: &Path) -> Result<(), FormatError> {
        let file = self.file.take().expect("ScopedWriter used after commit/abort");
        file.sync_all().map_err(|source| FormatError::Io {
            path: self.temp_path.clone(),
            source,
        })?;
        drop(file);
        fs::rename(&self.temp_path, final_path).map_err(|source| FormatError::Io {
            path: final_path.to_path_buf(),
            source,
        })?;
        self.finished = true;
        Ok(())
    }

    /// Discards the temp file without publishing it. Consumes `self` so
    /// the writer cannot be reused.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Io`] if removing the temp file fails for a
    /// reason other than it already being gone.
    pub fn abort(mut self) -> Result<(), FormatError> {
        self.file.take();
        self.finished = true;
        match fs::remove_file(&self.temp_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(FormatError::Io {
                path: self.temp_path.clone(),
                source,
            }),
        }
    }

    /// The temp path this writer owns.
    #[must_use]
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }
}

impl Drop for ScopedWriter {
    fn drop(&mut self) {
        if !self.finished {
            self.file.take();
            let _ = fs::remove_file(&self.temp_path);
        }
    }
}
