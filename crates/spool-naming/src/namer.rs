use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::grade::Grade;
use crate::seq::encode_seq;
use crate::{host_prefix, NamingError};

/// Which spool file letter a minted name is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// `C.` — command file.
    Command,
    /// `D.` — data file.
    Data,
    /// `X.` — execute file.
    Execute,
}

impl FileKind {
    fn letter(self) -> char {
        match self {
            Self::Command => 'C',
            Self::Data => 'D',
            Self::Execute => 'X',
        }
    }
}

/// The set of spool names minted for one job, sharing a single sequence
/// number (§4.B: the execute name is "paired 1:1 with the data name of the
/// job's cover file").
#[derive(Debug, Clone)]
pub struct JobNames {
    dir: PathBuf,
    prefix: String,
    grade: Grade,
    seq: u32,
    kinds: Vec<FileKind>,
}

impl JobNames {
    fn file_name(&self, kind: FileKind) -> String {
        format!("{}.{}{}{}", kind.letter(), self.prefix, self.grade, encode_seq(self.seq))
    }

    /// Returns the full path for `kind`, if it was requested when this set
    /// was minted.
    #[must_use]
    pub fn path(&self, kind: FileKind) -> Option<PathBuf> {
        self.kinds
            .contains(&kind)
            .then(|| self.dir.join(self.file_name(kind)))
    }

    /// Returns just the file name (no directory) for `kind`.
    #[must_use]
    pub fn name(&self, kind: FileKind) -> Option<String> {
        self.kinds.contains(&kind).then(|| self.file_name(kind))
    }

    /// The sequence number shared by every name in this set.
    #[must_use]
    pub fn seq(&self) -> u32 {
        self.seq
    }
}

/// Mints collision-free temporary, data, and execute names for one spool
/// directory.
///
/// No cross-process lock is used; uniqueness comes from `O_CREAT | O_EXCL`
/// on each candidate, matching §4.B's collision policy.
#[derive(Debug, Default)]
pub struct SpoolNamer {
    next_seq: Mutex<HashMap<(String, char), u32>>,
    temp_counter: AtomicU32,
}

impl SpoolNamer {
    /// Creates a namer with empty sequence tables.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_seq: Mutex::new(HashMap::new()),
            temp_counter: AtomicU32::new(1),
        }
    }

    /// Mints one or more spool file names for `host`/`grade` in `dir`,
    /// claiming each requested name by creating it as an empty file.
    ///
    /// Retries with the next sequence number whenever any requested
    /// candidate already exists, so the returned [`JobNames`] never names a
    /// file that existed at the moment this call returns.
    ///
    /// # Errors
    ///
    /// Returns [`NamingError::EmptyHostPrefix`] if `host` is empty, or
    /// [`NamingError::Io`] if file creation fails for a reason other than
    /// the name already being taken.
    pub fn mint_job(
        &self,
        dir: &Path,
        host: &str,
        grade: Grade,
        kinds: &[FileKind],
    ) -> Result<JobNames, NamingError> {
        let prefix = host_prefix(host)?;
        let mut seq = {
            let table = self.next_seq.lock().expect("naming sequence lock poisoned");
            *table.get(&(prefix.clone(), grade.as_char())).unwrap_or(&1)
        };

        loop {
            let candidate = JobNames {
                dir: dir.to_path_buf(),
                prefix: prefix.clone(),
                grade,
                seq,
                kinds: kinds.to_vec(),
            };

            match self.claim(&candidate, kinds) {
                Ok(()) => {
                    let mut table =
                        self.next_seq.lock().expect("naming sequence lock poisoned");
                    table.insert((prefix, grade.as_char()), seq + 1);
                    return Ok(candidate);
                }
                Err(ClaimError::Collision(claimed)) => {
                    self.unclaim(&candidate, &claimed);
                    seq += 1;
                }
                Err(ClaimError::Io(source)) => {
                    return Err(NamingError::Io {
                        dir: dir.to_path_buf(),
                        source,
                    });
                }
            }
        }
    }

    /// Mints a unique local-only temporary name, `TM.<pid>.<seq>`.
    ///
    /// # Errors
    ///
    /// Returns [`NamingError::Io`] if file creation fails for a reason
    /// other than the name already being taken.
    pub fn mint_temp(&self, dir: &Path, pid: u32) -> Result<PathBuf, NamingError> {
        loop {
            let seq = self.temp_counter.fetch_add(1, Ordering::Relaxed);
            let path = dir.join(format!("TM.{pid}.{seq}"));
            match OpenOptions::new().create_new(true).write(true).open(&path) {
                Ok(_) => return Ok(path),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(source) => {
                    return Err(NamingError::Io {
                        dir: dir.to_path_buf(),
                        source,
                    });
                }
            }
        }
    }

    fn claim(&self, candidate: &JobNames, kinds: &[FileKind]) -> Result<(), ClaimError> {
        let mut claimed = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            let path = candidate.path(kind).expect("kind was just requested");
            match OpenOptions::new().create_new(true).write(true).open(&path) {
                Ok(_) => claimed.push(kind),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    return Err(ClaimError::Collision(claimed));
                }
                Err(source) => return Err(ClaimError::Io(source)),
            }
        }
        Ok(())
    }

    fn unclaim(&self, candidate: &JobNames, claimed: &[FileKind]) {
        for &kind in claimed {
            if let Some(path) = candidate.path(kind) {
                let _ = std::fs::remove_file(path);
            }
        }
    }
}

enum ClaimError {
    Collision(Vec<FileKind>),
    Io(io::Error),
}
